//! Resource CRUD routes built from each resource's allowed operations.
//! `/<path_segment>` carries list and create; `/<path_segment>/:id` carries read, update and delete.

use crate::config::Operation;
use crate::handlers::{create, delete as delete_handler, list, read, update};
use crate::resources::{Flavors, Notes, Resource};
use crate::state::AppState;
use axum::{routing::MethodRouter, Router};

pub fn resource_routes<R: Resource>(state: AppState) -> Router {
    let def = R::def();
    let mut collection: MethodRouter<AppState> = MethodRouter::new();
    if def.allows(Operation::List) {
        collection = collection.get(list::<R>);
    }
    if def.allows(Operation::Create) {
        collection = collection.post(create::<R>);
    }
    let mut item: MethodRouter<AppState> = MethodRouter::new();
    if def.allows(Operation::Read) {
        item = item.get(read::<R>);
    }
    if def.allows(Operation::Update) {
        item = item.put(update::<R>);
    }
    if def.allows(Operation::Delete) {
        item = item.delete(delete_handler::<R>);
    }
    Router::new()
        .route(&format!("/{}", def.path_segment), collection)
        .route(&format!("/{}/:id", def.path_segment), item)
        .with_state(state)
}

/// Notes and flavors, to be nested under `/api`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Notes>(state.clone()))
        .merge(resource_routes::<Flavors>(state))
}
