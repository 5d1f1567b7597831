use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::{
    application::usecases::bookings::BookingUseCase,
    domain::{
        repositories::{bookings::BookingRepository, subscriptions::SubscriptionRepository},
        value_objects::{bookings::CreateBookingModel, customers::CreatedDto},
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub fn router<S, B>(bookings_usecase: Arc<BookingUseCase<S, B>>) -> Router
where
    S: SubscriptionRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(create_booking::<S, B>))
        .with_state(bookings_usecase)
}

pub async fn create_booking<S, B>(
    State(bookings_usecase): State<Arc<BookingUseCase<S, B>>>,
    payload: Result<Json<CreateBookingModel>, JsonRejection>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync,
    B: BookingRepository + Send + Sync,
{
    let Json(create_booking_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match bookings_usecase.create_booking(create_booking_model).await {
        Ok(booking) => (StatusCode::OK, Json(CreatedDto { id: booking.id })).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
