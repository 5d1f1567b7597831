use anyhow::Result;
use async_trait::async_trait;
use diesel::{QueryableByName, RunQueryDsl, sql_query, sql_types::Text};
use std::sync::Arc;

use crate::{
    domain::{repositories::store_probe::StoreProbeRepository, value_objects::store::StoreInfo},
    infrastructure::postgres::postgres_connection::{PgPoolSquad, checkout},
};

#[derive(Debug, QueryableByName)]
struct DatabaseNameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(Debug, QueryableByName)]
struct TableNameRow {
    #[diesel(sql_type = Text)]
    table_name: String,
}

pub struct StoreProbePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl StoreProbePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl StoreProbeRepository for StoreProbePostgres {
    async fn probe(&self) -> Result<StoreInfo> {
        let mut conn = checkout(&self.db_pool)?;

        let database = sql_query("SELECT current_database()::text AS name")
            .get_result::<DatabaseNameRow>(&mut conn)?;

        let tables = sql_query(
            "SELECT table_name::text AS table_name FROM information_schema.tables \
             WHERE table_schema = 'public' ORDER BY table_name LIMIT 10",
        )
        .load::<TableNameRow>(&mut conn)?;

        Ok(StoreInfo {
            database_name: database.name,
            collections: tables.into_iter().map(|row| row.table_name).collect(),
        })
    }
}
