use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    entities::customers::InsertCustomerEntity,
    value_objects::{document_id::DocumentId, validation::not_blank},
};

pub const DEFAULT_CITY: &str = "Doha";
pub const DEFAULT_COUNTRY: &str = "Qatar";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCustomerModel {
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub phone: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub car_make: String,
    #[validate(custom(function = "not_blank", message = "must not be empty"))]
    pub car_model: String,
    #[serde(default)]
    #[validate(range(min = 1970, max = 2100, message = "must be between 1970 and 2100"))]
    pub car_year: Option<i32>,
    #[serde(default)]
    pub plate_number: Option<String>,
}

impl CreateCustomerModel {
    pub fn to_entity(&self) -> InsertCustomerEntity {
        InsertCustomerEntity {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: non_blank_or(&self.city, DEFAULT_CITY),
            country: non_blank_or(&self.country, DEFAULT_COUNTRY),
            car_make: self.car_make.clone(),
            car_model: self.car_model.clone(),
            car_year: self.car_year,
            plate_number: self.plate_number.clone(),
        }
    }
}

fn non_blank_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedDto {
    pub id: DocumentId,
}
