use crate::{
    application::usecases::{
        bookings::BookingUseCase, customers::CustomerUseCase, plans::PlanUseCase,
        store_status::StoreStatusUseCase, subscriptions::SubscriptionUseCase,
    },
    config::config_model::DotEnvyConfig,
    domain::repositories::{
        bookings::BookingRepository, customers::CustomerRepository, plans::PlanRepository,
        store_probe::StoreProbeRepository, subscriptions::SubscriptionRepository,
    },
    infrastructure::{
        axum_http::{default_routers, routers},
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bookings::BookingPostgres, customers::CustomerPostgres, plans::PlanPostgres,
                store_probe::StoreProbePostgres, subscriptions::SubscriptionPostgres,
            },
        },
    },
};
use anyhow::{Context, Result};
use axum::{Router, http::Method};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let app = app(Arc::clone(&config), db_pool)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(stage = %config.stage, "Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn app(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<Router> {
    let database_url_set = !config.database.url.trim().is_empty();

    let api = api_routes(
        Arc::new(CustomerPostgres::new(Arc::clone(&db_pool))),
        Arc::new(PlanPostgres::new(Arc::clone(&db_pool))),
        Arc::new(SubscriptionPostgres::new(Arc::clone(&db_pool))),
        Arc::new(BookingPostgres::new(Arc::clone(&db_pool))),
        Arc::new(StoreProbePostgres::new(Arc::clone(&db_pool))),
        database_url_set,
    );

    with_layers(api, &config)
}

/// The full route tree over any set of repository adapters.
pub fn api_routes<C, P, S, B, Q>(
    customers_repository: Arc<C>,
    plans_repository: Arc<P>,
    subscriptions_repository: Arc<S>,
    bookings_repository: Arc<B>,
    store_probe: Arc<Q>,
    database_url_set: bool,
) -> Router
where
    C: CustomerRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    Q: StoreProbeRepository + Send + Sync + 'static,
{
    let plans_usecase = Arc::new(PlanUseCase::new(Arc::clone(&plans_repository)));
    let customers_usecase = Arc::new(CustomerUseCase::new(Arc::clone(&customers_repository)));
    let subscriptions_usecase = Arc::new(SubscriptionUseCase::new(
        customers_repository,
        plans_repository,
        Arc::clone(&subscriptions_repository),
    ));
    let bookings_usecase = Arc::new(BookingUseCase::new(
        subscriptions_repository,
        bookings_repository,
    ));
    let store_status_usecase = Arc::new(StoreStatusUseCase::new(store_probe, database_url_set));

    Router::new()
        .nest("/api/plans", routers::plans::router(Arc::clone(&plans_usecase)))
        .nest("/api/customers", routers::customers::router(customers_usecase))
        .nest(
            "/api/subscriptions",
            routers::subscriptions::router(subscriptions_usecase),
        )
        .nest("/api/bookings", routers::bookings::router(bookings_usecase))
        .nest("/api/seed", routers::seed::router(plans_usecase))
        .merge(routers::store_status::router(store_status_usecase))
}

/// Applies the fallback and the shared middleware stack to an assembled router.
pub fn with_layers(router: Router, config: &DotEnvyConfig) -> Result<Router> {
    let body_limit: usize = config
        .server
        .body_limit
        .checked_mul(1024 * 1024)
        .context("SERVER_BODY_LIMIT is too large")?
        .try_into()
        .context("SERVER_BODY_LIMIT is too large")?;

    Ok(router
        .fallback(default_routers::not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = ?err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = ?err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
