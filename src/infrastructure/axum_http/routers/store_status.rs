use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tracing::info;

use crate::{
    application::usecases::store_status::StoreStatusUseCase,
    domain::repositories::store_probe::StoreProbeRepository,
};

pub fn router<T>(store_status_usecase: Arc<StoreStatusUseCase<T>>) -> Router
where
    T: StoreProbeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(service_info::<T>))
        .route("/test", get(connectivity::<T>))
        .with_state(store_status_usecase)
}

pub async fn service_info<T>(
    State(store_status_usecase): State<Arc<StoreStatusUseCase<T>>>,
) -> impl IntoResponse
where
    T: StoreProbeRepository + Send + Sync,
{
    (StatusCode::OK, Json(store_status_usecase.service_info())).into_response()
}

pub async fn connectivity<T>(
    State(store_status_usecase): State<Arc<StoreStatusUseCase<T>>>,
) -> impl IntoResponse
where
    T: StoreProbeRepository + Send + Sync,
{
    let report = store_status_usecase.connectivity().await;
    info!(database = %report.database, "store_status: connectivity checked");
    (StatusCode::OK, Json(report)).into_response()
}
