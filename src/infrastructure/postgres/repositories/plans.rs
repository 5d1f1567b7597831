use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::plans::{InsertPlanEntity, PlanEntity, PlanRow},
        repositories::plans::PlanRepository,
        value_objects::document_id::DocumentId,
    },
    infrastructure::postgres::{
        postgres_connection::{PgPoolSquad, checkout},
        schema::plan,
    },
};

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn find_by_id(&self, plan_id: DocumentId) -> Result<Option<PlanEntity>> {
        let mut conn = checkout(&self.db_pool)?;

        let row = plan::table
            .filter(plan::id.eq(plan_id.as_uuid()))
            .select(PlanRow::as_select())
            .first::<PlanRow>(&mut conn)
            .optional()?;

        Ok(row.map(PlanEntity::from))
    }

    async fn find_by_tier(&self, tier: &str) -> Result<Option<PlanEntity>> {
        let mut conn = checkout(&self.db_pool)?;

        let row = plan::table
            .filter(plan::tier.eq(tier))
            .select(PlanRow::as_select())
            .first::<PlanRow>(&mut conn)
            .optional()?;

        Ok(row.map(PlanEntity::from))
    }

    async fn list_active_plans(&self) -> Result<Vec<PlanEntity>> {
        let mut conn = checkout(&self.db_pool)?;

        let rows = plan::table
            .filter(plan::is_active.eq(true))
            .select(PlanRow::as_select())
            .load::<PlanRow>(&mut conn)?;

        Ok(rows.into_iter().map(PlanEntity::from).collect())
    }

    async fn insert(&self, insert_plan_entity: InsertPlanEntity) -> Result<DocumentId> {
        let mut conn = checkout(&self.db_pool)?;

        let id = insert_into(plan::table)
            .values(&insert_plan_entity)
            .returning(plan::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(id.into())
    }
}
