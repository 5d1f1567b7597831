use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::customer;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = customer)]
pub struct CustomerEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: Option<i32>,
    pub plate_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = customer)]
pub struct InsertCustomerEntity {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: Option<i32>,
    pub plate_number: Option<String>,
}
