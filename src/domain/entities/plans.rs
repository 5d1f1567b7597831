use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::plan;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntity {
    pub id: Uuid,
    pub name: String,
    pub tier: String,
    pub price_qr: f64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw row used for Diesel queries. Features stay as JSON and are parsed into a list of strings.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plan)]
pub struct PlanRow {
    pub id: Uuid,
    pub name: String,
    pub tier: String,
    pub price_qr: f64,
    pub description: Option<String>,
    pub features: serde_json::Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlanRow> for PlanEntity {
    fn from(value: PlanRow) -> Self {
        let features = serde_json::from_value(value.features).unwrap_or_default();

        Self {
            id: value.id,
            name: value.name,
            tier: value.tier,
            price_qr: value.price_qr,
            description: value.description,
            features,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = plan)]
pub struct InsertPlanEntity {
    pub name: String,
    pub tier: String,
    pub price_qr: f64,
    pub description: Option<String>,
    pub features: serde_json::Value,
    pub is_active: bool,
}
