use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, SelectableHelper, insert_into};
use std::sync::Arc;

use crate::{
    domain::{
        entities::bookings::{BookingEntity, InsertBookingEntity},
        repositories::bookings::BookingRepository,
    },
    infrastructure::postgres::{
        postgres_connection::{PgPoolSquad, checkout},
        schema::booking,
    },
};

pub struct BookingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BookingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BookingRepository for BookingPostgres {
    async fn insert(&self, insert_booking_entity: InsertBookingEntity) -> Result<BookingEntity> {
        let mut conn = checkout(&self.db_pool)?;

        let row = insert_into(booking::table)
            .values(&insert_booking_entity)
            .returning(BookingEntity::as_returning())
            .get_result::<BookingEntity>(&mut conn)?;

        Ok(row)
    }
}
