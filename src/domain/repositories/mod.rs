pub mod bookings;
pub mod customers;
pub mod plans;
pub mod store_errors;
pub mod store_probe;
pub mod subscriptions;
