use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::{
    application::usecases::plans::PlanUseCase,
    domain::repositories::plans::PlanRepository,
    infrastructure::axum_http::error_responses::AppError,
};

pub fn router<T>(plans_usecase: Arc<PlanUseCase<T>>) -> Router
where
    T: PlanRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_plans::<T>))
        .with_state(plans_usecase)
}

pub async fn list_plans<T>(State(plans_usecase): State<Arc<PlanUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync,
{
    match plans_usecase.list_active_plans().await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
