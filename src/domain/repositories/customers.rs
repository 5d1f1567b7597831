use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::customers::{CustomerEntity, InsertCustomerEntity},
    value_objects::document_id::DocumentId,
};

#[automock]
#[async_trait]
pub trait CustomerRepository {
    async fn insert(&self, insert_customer_entity: InsertCustomerEntity) -> Result<DocumentId>;
    async fn find_by_id(&self, customer_id: DocumentId) -> Result<Option<CustomerEntity>>;
}
