use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::{
    application::usecases::customers::CustomerUseCase,
    domain::{
        repositories::customers::CustomerRepository,
        value_objects::customers::{CreateCustomerModel, CreatedDto},
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub fn router<T>(customers_usecase: Arc<CustomerUseCase<T>>) -> Router
where
    T: CustomerRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(create_customer::<T>))
        .with_state(customers_usecase)
}

pub async fn create_customer<T>(
    State(customers_usecase): State<Arc<CustomerUseCase<T>>>,
    payload: Result<Json<CreateCustomerModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: CustomerRepository + Send + Sync,
{
    let Json(create_customer_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match customers_usecase.create_customer(create_customer_model).await {
        Ok(id) => (StatusCode::OK, Json(CreatedDto { id })).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
