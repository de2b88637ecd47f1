//! Typed resources: row shape, request body shape and catalog entry for each collection.

mod flavor;
mod note;

pub use flavor::{Flavor, FlavorInput, Flavors};
pub use note::{Note, NoteInput, Notes};

use crate::config::ResourceDef;
use crate::sql::Assignment;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A collection served under `/api/<path_segment>`.
pub trait Resource: Send + Sync + 'static {
    /// Row as returned by every statement (`RETURNING` / `SELECT` list).
    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static;
    /// Create and update body. Fields are `Option<Option<T>>`: outer `None` is absent, `Some(None)` is null.
    type Input: DeserializeOwned + Send + Sync + 'static;

    fn def() -> &'static ResourceDef;

    /// Writable columns of a body, in statement order.
    fn assignments(input: &Self::Input) -> Vec<Assignment>;

    /// Rows inserted by the bootstrapper after the table is created.
    fn seed() -> Vec<Self::Input> {
        Vec::new()
    }
}

/// Body as received: a JSON object. Inputs decode through it so positional
/// (array) bodies are rejected.
pub(crate) type JsonObject = serde_json::Map<String, serde_json::Value>;

pub(crate) fn from_object<T: DeserializeOwned>(obj: JsonObject) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::Value::Object(obj))
}

/// Deserialize a present field, including an explicit `null`, as `Some(..)`.
/// Paired with `#[serde(default)]` so an absent field stays `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
