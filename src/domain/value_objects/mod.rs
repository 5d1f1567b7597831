pub mod bookings;
pub mod collections;
pub mod customers;
pub mod document_id;
pub mod enums;
pub mod plans;
pub mod store;
pub mod subscriptions;
pub mod validation;
