//! Connection pool setup and database creation.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Open the process-wide pool.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::InvalidSetting {
            key: "DATABASE_URL",
            value: e.to_string(),
        })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Split a connection string into (url of the `postgres` admin database, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::InvalidSetting {
            key: "DATABASE_URL",
            value: "no database path".into(),
        })?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_default_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/acme_notes_db").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres");
        assert_eq!(name, "acme_notes_db");
    }

    #[test]
    fn keeps_credentials_port_and_query() {
        let (admin, name) =
            parse_db_name_from_url("postgres://app:s3cret@db:5433/notes?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://app:s3cret@db:5433/postgres?sslmode=disable");
        assert_eq!(name, "notes");
    }

    #[test]
    fn url_without_path_is_rejected() {
        let err = parse_db_name_from_url("postgres://localhost").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { key: "DATABASE_URL", .. }));
    }

    #[tokio::test]
    async fn unparseable_url_is_a_config_error() {
        let err = ensure_database_exists("postgres://localhost:notaport/acme").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidSetting { key: "DATABASE_URL", .. })
        ));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("acme"), "\"acme\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
