use crate::config::{ResourceDef, FLAVORS};
use crate::resources::{from_object, present, JsonObject, Resource};
use crate::sql::Assignment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Flavor {
    pub id: i32,
    pub name: String,
    /// Nullable: a full-replace update without `is_favorite` clears it.
    pub is_favorite: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct FlavorInput {
    pub name: Option<Option<String>>,
    pub is_favorite: Option<Option<bool>>,
}

#[derive(Deserialize)]
struct FlavorFields {
    #[serde(default, deserialize_with = "present")]
    name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    is_favorite: Option<Option<bool>>,
}

impl TryFrom<JsonObject> for FlavorInput {
    type Error = serde_json::Error;

    fn try_from(obj: JsonObject) -> Result<Self, Self::Error> {
        let FlavorFields { name, is_favorite } = from_object(obj)?;
        Ok(FlavorInput { name, is_favorite })
    }
}

pub struct Flavors;

impl Resource for Flavors {
    type Row = Flavor;
    type Input = FlavorInput;

    fn def() -> &'static ResourceDef {
        &FLAVORS
    }

    fn assignments(input: &FlavorInput) -> Vec<Assignment> {
        vec![
            Assignment::text("name", &input.name),
            Assignment::bool("is_favorite", &input.is_favorite),
        ]
    }
}
