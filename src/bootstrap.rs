//! Startup schema setup: (re)create each table, then insert seed rows.
//! Runs in one transaction before the listener opens; any failure aborts startup.

use crate::config::{catalog, validate_catalog, SchemaMode};
use crate::error::AppError;
use crate::resources::{Flavors, Notes, Resource};
use crate::sql::{create_table, drop_table, insert, select_any};
use sqlx::{PgConnection, PgPool};

/// Validate the catalog and prepare every table. In `Reset` mode existing data is discarded.
pub async fn bootstrap_schema(pool: &PgPool, mode: SchemaMode) -> Result<(), AppError> {
    validate_catalog(&catalog())?;
    if mode == SchemaMode::Reset {
        tracing::warn!("schema mode is reset: existing notes and flavors are dropped");
    }
    let mut tx = pool.begin().await?;
    prepare_table::<Notes>(&mut *tx, mode).await?;
    prepare_table::<Flavors>(&mut *tx, mode).await?;
    tx.commit().await?;
    Ok(())
}

async fn prepare_table<R: Resource>(conn: &mut PgConnection, mode: SchemaMode) -> Result<(), AppError> {
    let def = R::def();
    match mode {
        SchemaMode::Reset => {
            execute(conn, &drop_table(def)).await?;
            execute(conn, &create_table(def, false)).await?;
        }
        SchemaMode::Preserve => {
            execute(conn, &create_table(def, true)).await?;
        }
    }
    tracing::info!(table = def.table_name, "table created");

    let seed = R::seed();
    if seed.is_empty() {
        return Ok(());
    }
    if mode == SchemaMode::Preserve {
        let has_rows: bool = sqlx::query_scalar(&select_any(def))
            .fetch_one(&mut *conn)
            .await?;
        if has_rows {
            tracing::info!(table = def.table_name, "table not empty, skipping seed");
            return Ok(());
        }
    }
    for input in &seed {
        let q = insert(def, &R::assignments(input));
        tracing::debug!(sql = %q.sql, params = ?q.params, "seed");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query.execute(&mut *conn).await?;
    }
    tracing::info!(table = def.table_name, rows = seed.len(), "data seeded");
    Ok(())
}

async fn execute(conn: &mut PgConnection, sql: &str) -> Result<(), AppError> {
    tracing::debug!(sql = %sql, "ddl");
    sqlx::query(sql).execute(&mut *conn).await?;
    Ok(())
}
