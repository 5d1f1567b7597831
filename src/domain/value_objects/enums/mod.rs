pub mod booking_statuses;
pub mod subscription_statuses;
