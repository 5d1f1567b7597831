use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::customers::{CustomerEntity, InsertCustomerEntity},
        repositories::customers::CustomerRepository,
        value_objects::document_id::DocumentId,
    },
    infrastructure::postgres::{
        postgres_connection::{PgPoolSquad, checkout},
        schema::customer,
    },
};

pub struct CustomerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CustomerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerPostgres {
    async fn insert(&self, insert_customer_entity: InsertCustomerEntity) -> Result<DocumentId> {
        let mut conn = checkout(&self.db_pool)?;

        let id = insert_into(customer::table)
            .values(&insert_customer_entity)
            .returning(customer::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(id.into())
    }

    async fn find_by_id(&self, customer_id: DocumentId) -> Result<Option<CustomerEntity>> {
        let mut conn = checkout(&self.db_pool)?;

        let row = customer::table
            .filter(customer::id.eq(customer_id.as_uuid()))
            .select(CustomerEntity::as_select())
            .first::<CustomerEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }
}
