use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    entities::subscriptions::SubscriptionEntity,
    value_objects::{
        document_id::DocumentId, enums::subscription_statuses::SubscriptionStatus,
        validation::not_blank,
    },
};

/// Every tier renews on the same fixed period.
pub const RENEWAL_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubscriptionModel {
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub customer_id: String,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub plan_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsFilter {
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionPeriod {
    pub starts_at: DateTime<Utc>,
    pub renews_at: DateTime<Utc>,
}

impl SubscriptionPeriod {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            starts_at: now,
            renews_at: now + Duration::days(RENEWAL_PERIOD_DAYS),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionModel {
    pub id: DocumentId,
    pub customer_id: DocumentId,
    pub plan_id: DocumentId,
    pub status: SubscriptionStatus,
    pub starts_at: DateTime<Utc>,
    pub renews_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionEntity> for SubscriptionModel {
    type Error = anyhow::Error;

    fn try_from(value: SubscriptionEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            customer_id: value.customer_id.into(),
            plan_id: value.plan_id.into(),
            status: SubscriptionStatus::try_from(value.status.as_str())?,
            starts_at: value.starts_at,
            renews_at: value.renews_at,
            created_at: value.created_at,
        })
    }
}
