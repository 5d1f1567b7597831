use anyhow::{Context, Result};

use super::{
    config_model::{Database, DotEnvyConfig, Server},
    stage::Stage,
};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BODY_LIMIT_MB: u64 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let port = match non_empty("SERVER_PORT").or_else(|| non_empty("PORT")) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SERVER_PORT is invalid: {raw}"))?,
        None => DEFAULT_PORT,
    };

    let body_limit = match non_empty("SERVER_BODY_LIMIT") {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SERVER_BODY_LIMIT is invalid: {raw}"))?,
        None => DEFAULT_BODY_LIMIT_MB,
    };

    let timeout = match non_empty("SERVER_TIMEOUT") {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SERVER_TIMEOUT is invalid: {raw}"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let database = Database {
        url: non_empty("DATABASE_URL").context("DATABASE_URL is not set")?,
    };

    let stage = non_empty("STAGE")
        .and_then(|raw| Stage::try_from(&raw).ok())
        .unwrap_or_default();

    Ok(DotEnvyConfig {
        server: Server {
            port,
            body_limit,
            timeout,
        },
        database,
        stage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| env.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/car_care")])).unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.body_limit, 10);
        assert_eq!(config.server.timeout, 30);
        assert_eq!(config.stage, Stage::Local);
    }

    #[test]
    fn port_falls_back_to_platform_variable() {
        let config = from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/car_care"),
            ("PORT", "9090"),
            ("STAGE", "production"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.stage, Stage::Production);
    }

    #[test]
    fn server_port_wins_over_platform_variable() {
        let config = from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/car_care"),
            ("SERVER_PORT", "8080"),
            ("PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = from_lookup(lookup(&[("SERVER_PORT", "8080")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn malformed_port_is_an_error() {
        let err = from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/car_care"),
            ("SERVER_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }
}
