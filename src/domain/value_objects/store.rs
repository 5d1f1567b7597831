use serde::Serialize;

/// What the store reports about itself when probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub database_name: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceInfoDto {
    pub name: &'static str,
    pub location: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectivityDto {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub collections: Vec<String>,
}
