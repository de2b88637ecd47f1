//! Resource CRUD handlers: list, read, create, update, delete. Generic over the resource.

use crate::error::AppError;
use crate::resources::Resource;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R::Row>>, AppError> {
    let rows = CrudService::list::<R>(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<R::Row>, AppError> {
    let id = parse_id(&id_str)?;
    let row = CrudService::read::<R>(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{}/{}", R::def().path_segment, id)))?;
    Ok(Json(row))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<R::Row>, AppError> {
    let Json(input) = body?;
    let row = CrudService::create::<R>(&state.pool, &input).await?;
    Ok(Json(row))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<R::Row>, AppError> {
    let id = parse_id(&id_str)?;
    let Json(input) = body?;
    let row = CrudService::update::<R>(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{}/{}", R::def().path_segment, id)))?;
    Ok(Json(row))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    let affected = CrudService::delete::<R>(&state.pool, id).await?;
    tracing::debug!(resource = R::def().path_segment, id, affected, "deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "invalid id: abc"));
        assert!(parse_id("99999999999").is_err());
    }
}
