use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::usecases::subscriptions::SubscriptionUseCase,
    domain::{
        repositories::{
            customers::CustomerRepository, plans::PlanRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::{
            customers::CreatedDto,
            subscriptions::{CreateSubscriptionModel, ListSubscriptionsFilter},
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub fn router<C, P, S>(subscriptions_usecase: Arc<SubscriptionUseCase<C, P, S>>) -> Router
where
    C: CustomerRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(list_subscriptions::<C, P, S>).post(create_subscription::<C, P, S>),
        )
        .with_state(subscriptions_usecase)
}

pub async fn create_subscription<C, P, S>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<C, P, S>>>,
    payload: Result<Json<CreateSubscriptionModel>, JsonRejection>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync,
    P: PlanRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
{
    let Json(create_subscription_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match subscriptions_usecase
        .create_subscription(create_subscription_model)
        .await
    {
        Ok(subscription) => (
            StatusCode::OK,
            Json(CreatedDto {
                id: subscription.id,
            }),
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list_subscriptions<C, P, S>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<C, P, S>>>,
    filter: Result<Query<ListSubscriptionsFilter>, QueryRejection>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync,
    P: PlanRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
{
    let Query(filter) = match filter {
        Ok(filter) => filter,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match subscriptions_usecase.list_subscriptions(filter).await {
        Ok(subscriptions) => (StatusCode::OK, Json(subscriptions)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
