use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};

use crate::{
    application::usecases::plans::PlanUseCase,
    domain::{repositories::plans::PlanRepository, value_objects::plans::SeedResultDto},
    infrastructure::axum_http::error_responses::AppError,
};

pub fn router<T>(plans_usecase: Arc<PlanUseCase<T>>) -> Router
where
    T: PlanRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(seed_plans::<T>))
        .with_state(plans_usecase)
}

pub async fn seed_plans<T>(State(plans_usecase): State<Arc<PlanUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync,
{
    match plans_usecase.seed_default_plans().await {
        Ok(inserted) => (StatusCode::OK, Json(SeedResultDto { inserted })).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
