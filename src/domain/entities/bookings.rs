use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::booking;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = booking)]
pub struct BookingEntity {
    pub id: Uuid,
    pub subscription_id: Uuid,
    pub service_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = booking)]
pub struct InsertBookingEntity {
    pub subscription_id: Uuid,
    pub service_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
    pub status: String,
}
