//! Typed values bound to PostgreSQL statements.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value bound to a positional parameter. Each variant carries its own SQL type,
/// so a NULL is still sent as a typed NULL (`Int(None)` binds as `INT4`).
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Int(Option<i32>),
    Text(Option<String>),
    Bool(Option<bool>),
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            PgBindValue::Int(v) => <Option<i32> as Encode<Postgres>>::encode_by_ref(v, buf),
            PgBindValue::Text(v) => <Option<String> as Encode<Postgres>>::encode_by_ref(v, buf),
            PgBindValue::Bool(v) => <Option<bool> as Encode<Postgres>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Int(_) => <i32 as Type<Postgres>>::type_info(),
            PgBindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            PgBindValue::Bool(_) => <bool as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }
}

/// One column of a create/update body.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub column: &'static str,
    pub value: PgBindValue,
    /// False when the field was absent from the request body. Inserts skip
    /// absent fields so the column default applies; updates write `value` (NULL).
    pub supplied: bool,
}

impl Assignment {
    pub fn int(column: &'static str, field: &Option<Option<i32>>) -> Self {
        Assignment {
            column,
            value: PgBindValue::Int(field.flatten()),
            supplied: field.is_some(),
        }
    }

    pub fn text(column: &'static str, field: &Option<Option<String>>) -> Self {
        Assignment {
            column,
            value: PgBindValue::Text(field.clone().flatten()),
            supplied: field.is_some(),
        }
    }

    pub fn bool(column: &'static str, field: &Option<Option<bool>>) -> Self {
        Assignment {
            column,
            value: PgBindValue::Bool(field.flatten()),
            supplied: field.is_some(),
        }
    }
}
