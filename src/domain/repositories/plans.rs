use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::plans::{InsertPlanEntity, PlanEntity},
    value_objects::document_id::DocumentId,
};

#[automock]
#[async_trait]
pub trait PlanRepository {
    async fn find_by_id(&self, plan_id: DocumentId) -> Result<Option<PlanEntity>>;
    async fn find_by_tier(&self, tier: &str) -> Result<Option<PlanEntity>>;
    async fn list_active_plans(&self) -> Result<Vec<PlanEntity>>;
    async fn insert(&self, insert_plan_entity: InsertPlanEntity) -> Result<DocumentId>;
}
