use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
    value_objects::document_id::DocumentId,
};

#[automock]
#[async_trait]
pub trait SubscriptionRepository {
    async fn insert(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity>;
    async fn find_by_id(&self, subscription_id: DocumentId) -> Result<Option<SubscriptionEntity>>;
    /// Scan in store order, optionally narrowed to one customer.
    async fn list(&self, customer_id: Option<DocumentId>) -> Result<Vec<SubscriptionEntity>>;
}
