use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::bookings::{BookingEntity, InsertBookingEntity};

#[automock]
#[async_trait]
pub trait BookingRepository {
    /// Returns the stored row, including store-assigned id and timestamps.
    async fn insert(&self, insert_booking_entity: InsertBookingEntity) -> Result<BookingEntity>;
}
