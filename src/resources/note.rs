use crate::config::{ResourceDef, NOTES};
use crate::resources::{from_object, present, JsonObject, Resource};
use crate::sql::Assignment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Note {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ranking: i32,
    pub txt: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct NoteInput {
    pub txt: Option<Option<String>>,
    pub ranking: Option<Option<i32>>,
}

#[derive(Deserialize)]
struct NoteFields {
    #[serde(default, deserialize_with = "present")]
    txt: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    ranking: Option<Option<i32>>,
}

impl TryFrom<JsonObject> for NoteInput {
    type Error = serde_json::Error;

    fn try_from(obj: JsonObject) -> Result<Self, Self::Error> {
        let NoteFields { txt, ranking } = from_object(obj)?;
        Ok(NoteInput { txt, ranking })
    }
}

impl NoteInput {
    pub fn new(txt: &str, ranking: i32) -> Self {
        NoteInput {
            txt: Some(Some(txt.to_string())),
            ranking: Some(Some(ranking)),
        }
    }
}

pub struct Notes;

impl Resource for Notes {
    type Row = Note;
    type Input = NoteInput;

    fn def() -> &'static ResourceDef {
        &NOTES
    }

    fn assignments(input: &NoteInput) -> Vec<Assignment> {
        vec![
            Assignment::text("txt", &input.txt),
            Assignment::int("ranking", &input.ranking),
        ]
    }

    fn seed() -> Vec<NoteInput> {
        vec![
            NoteInput::new("First Note", 5),
            NoteInput::new("Second Note", 3),
            NoteInput::new("Third Note", 1),
        ]
    }
}
