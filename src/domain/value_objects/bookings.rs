use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    entities::bookings::BookingEntity,
    value_objects::{
        document_id::DocumentId, enums::booking_statuses::BookingStatus, validation::not_blank,
    },
};

/// Booking request as received. `scheduled_date` stays raw until the validator parses it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingModel {
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub subscription_id: String,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub service_type: String,
    pub scheduled_date: String,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Accepts RFC 3339 (`T` or space separated), a timestamp without offset read as UTC,
/// or a bare date read as midnight UTC.
pub fn parse_scheduled_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z"))
    {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingModel {
    pub id: DocumentId,
    pub subscription_id: DocumentId,
    pub service_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingEntity> for BookingModel {
    type Error = anyhow::Error;

    fn try_from(value: BookingEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            subscription_id: value.subscription_id.into(),
            service_type: value.service_type,
            scheduled_date: value.scheduled_date,
            location: value.location,
            notes: value.notes,
            status: BookingStatus::try_from(value.status.as_str())?,
            created_at: value.created_at,
        })
    }
}
