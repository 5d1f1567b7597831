pub mod bookings;
pub mod customers;
pub mod plans;
pub mod seed;
pub mod store_status;
pub mod subscriptions;
