use std::time::Duration;

use anyhow::Result;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool, PooledConnection},
};

use crate::domain::repositories::store_errors::StoreUnavailable;

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the pool without connecting, so the server can start while the database is down.
pub fn establish_connection(database_url: &str) -> PgPoolSquad {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build_unchecked(manager)
}

/// Checks out a connection; failure is tagged as `StoreUnavailable`.
pub fn checkout(db_pool: &PgPoolSquad) -> Result<PgPooledConnection> {
    db_pool
        .get()
        .map_err(|err| StoreUnavailable::new(err.to_string()).into())
}
