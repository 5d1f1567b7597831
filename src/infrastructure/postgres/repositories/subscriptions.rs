use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;

use crate::{
    domain::{
        entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
        repositories::subscriptions::SubscriptionRepository,
        value_objects::document_id::DocumentId,
    },
    infrastructure::postgres::{
        postgres_connection::{PgPoolSquad, checkout},
        schema::subscription,
    },
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn insert(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity> {
        let mut conn = checkout(&self.db_pool)?;

        let row = insert_into(subscription::table)
            .values(&insert_subscription_entity)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        Ok(row)
    }

    async fn find_by_id(&self, subscription_id: DocumentId) -> Result<Option<SubscriptionEntity>> {
        let mut conn = checkout(&self.db_pool)?;

        let row = subscription::table
            .filter(subscription::id.eq(subscription_id.as_uuid()))
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list(&self, customer_id: Option<DocumentId>) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = checkout(&self.db_pool)?;

        let mut query = subscription::table.into_boxed();
        if let Some(customer_id) = customer_id {
            query = query.filter(subscription::customer_id.eq(customer_id.as_uuid()));
        }

        let rows = query
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(rows)
    }
}
