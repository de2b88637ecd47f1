//! Generic CRUD execution against PostgreSQL. One statement per operation.

use crate::error::AppError;
use crate::resources::Resource;
use crate::sql::{delete, insert, select_by_id, select_list, update, QueryBuf};
use sqlx::PgPool;

pub struct CrudService;

impl CrudService {
    /// All rows, newest first.
    pub async fn list<R: Resource>(pool: &PgPool) -> Result<Vec<R::Row>, AppError> {
        let q = select_list(R::def());
        Self::fetch_all::<R>(pool, &q).await
    }

    /// Fetch one row by primary key. An empty result is `None`, not an error.
    pub async fn read<R: Resource>(pool: &PgPool, id: i32) -> Result<Option<R::Row>, AppError> {
        let q = select_by_id(R::def(), id);
        Self::fetch_optional::<R>(pool, &q).await
    }

    /// Insert one row; absent fields take their column default. Returns the created row.
    pub async fn create<R: Resource>(pool: &PgPool, input: &R::Input) -> Result<R::Row, AppError> {
        let q = insert(R::def(), &R::assignments(input));
        Self::fetch_optional::<R>(pool, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Full-replace update by id. Returns the updated row, or `None` when no row has that id.
    pub async fn update<R: Resource>(
        pool: &PgPool,
        id: i32,
        input: &R::Input,
    ) -> Result<Option<R::Row>, AppError> {
        let q = update(R::def(), id, &R::assignments(input));
        Self::fetch_optional::<R>(pool, &q).await
    }

    /// Delete by id. Returns rows affected; deleting a missing id yields 0.
    pub async fn delete<R: Resource>(pool: &PgPool, id: i32) -> Result<u64, AppError> {
        let q = delete(R::def(), id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }

    async fn fetch_all<R: Resource>(pool: &PgPool, q: &QueryBuf) -> Result<Vec<R::Row>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R::Row>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn fetch_optional<R: Resource>(pool: &PgPool, q: &QueryBuf) -> Result<Option<R::Row>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R::Row>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(pool).await?)
    }
}
