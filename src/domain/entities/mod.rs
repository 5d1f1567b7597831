pub mod bookings;
pub mod customers;
pub mod plans;
pub mod subscriptions;
