use std::sync::Arc;

use tracing::warn;

use crate::domain::{
    repositories::store_probe::StoreProbeRepository,
    value_objects::store::{ConnectivityDto, ServiceInfoDto},
};

const MAX_ERROR_CHARS: usize = 80;
const MAX_COLLECTIONS: usize = 10;

pub struct StoreStatusUseCase<T>
where
    T: StoreProbeRepository + Send + Sync,
{
    store_probe: Arc<T>,
    database_url_set: bool,
}

impl<T> StoreStatusUseCase<T>
where
    T: StoreProbeRepository + Send + Sync,
{
    pub fn new(store_probe: Arc<T>, database_url_set: bool) -> Self {
        Self {
            store_probe,
            database_url_set,
        }
    }

    pub fn service_info(&self) -> ServiceInfoDto {
        ServiceInfoDto {
            name: "Jamie Andrew Car Services",
            location: "Doha, Qatar",
            status: "ok",
        }
    }

    /// Never fails: probe errors are folded into the report.
    pub async fn connectivity(&self) -> ConnectivityDto {
        let mut report = ConnectivityDto {
            backend: "Running".to_string(),
            database: "Not Available".to_string(),
            database_url: if self.database_url_set { "Set" } else { "Not Set" }.to_string(),
            database_name: "Not Set".to_string(),
            collections: Vec::new(),
        };

        match self.store_probe.probe().await {
            Ok(info) => {
                report.database = "Connected".to_string();
                report.database_name = info.database_name;
                report.collections = info.collections.into_iter().take(MAX_COLLECTIONS).collect();
            }
            Err(err) => {
                warn!(db_error = ?err, "store_status: probe failed");
                let detail: String = err.to_string().chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("Error: {detail}");
            }
        }

        report
    }
}
