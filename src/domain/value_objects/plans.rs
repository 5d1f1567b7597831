use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    entities::plans::{InsertPlanEntity, PlanEntity},
    value_objects::{document_id::DocumentId, validation::not_blank},
};

/// A catalog entry the seed routine can insert. The tier is its natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct PlanTemplate {
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub tier: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price_qr: f64,
    pub description: Option<String>,
    pub features: Vec<String>,
}

impl PlanTemplate {
    fn new(name: &str, tier: &str, price_qr: f64, description: &str, features: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            tier: tier.to_string(),
            price_qr,
            description: Some(description.to_string()),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn to_entity(&self) -> InsertPlanEntity {
        InsertPlanEntity {
            name: self.name.clone(),
            tier: self.tier.clone(),
            price_qr: self.price_qr,
            description: self.description.clone(),
            features: serde_json::Value::from(self.features.clone()),
            is_active: true,
        }
    }
}

/// Starter catalog, one template per tier.
pub fn default_plan_catalog() -> Vec<PlanTemplate> {
    vec![
        PlanTemplate::new(
            "Essential Wash",
            "basic",
            79.0,
            "Exterior wash + interior vacuum (1x/week)",
            &["Exterior wash", "Interior vacuum", "Tyre shine"],
        ),
        PlanTemplate::new(
            "Care Plus",
            "standard",
            149.0,
            "Wash + interior detail (2x/month)",
            &["Exterior wash", "Interior detail", "Glass cleaning"],
        ),
        PlanTemplate::new(
            "Premium Detail",
            "premium",
            299.0,
            "Full detailing + priority booking",
            &["Full detailing", "Wax coat", "Priority booking"],
        ),
        PlanTemplate::new(
            "Annual Care",
            "yearly",
            1000.0,
            "Yearly subscription with discounted bundled services",
            &[
                "Up to 12 washes per year",
                "Quarterly interior detailing",
                "Priority booking",
                "Annual wax and polish",
            ],
        ),
    ]
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanDto {
    pub id: DocumentId,
    pub name: String,
    pub tier: String,
    pub price_qr: f64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlanEntity> for PlanDto {
    fn from(value: PlanEntity) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            tier: value.tier,
            price_qr: value.price_qr,
            description: value.description,
            features: value.features,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedResultDto {
    pub inserted: usize,
}
