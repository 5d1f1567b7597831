pub mod bookings;
pub mod customers;
pub mod entity_validator;
pub mod errors;
pub mod plans;
pub mod reference_resolver;
pub mod store_status;
pub mod subscriptions;
