//! Catalog validation: identifier shape, primary keys and column references.

use crate::config::{ColumnType, ResourceDef};
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;

fn check_identifier(re: &Regex, kind: &str, name: &str) -> Result<(), ConfigError> {
    if !re.is_match(name) {
        return Err(ConfigError::Validation(format!("invalid {} name: {:?}", kind, name)));
    }
    Ok(())
}

fn check_timestamp_column(def: &ResourceDef, role: &str, name: &str) -> Result<(), ConfigError> {
    match def.column(name) {
        Some(c) if c.ty == ColumnType::Timestamptz => Ok(()),
        Some(_) => Err(ConfigError::Validation(format!(
            "{}: {} column {} must be a timestamp",
            def.table_name, role, name
        ))),
        None => Err(ConfigError::Validation(format!(
            "{}: {} column {} does not exist",
            def.table_name, role, name
        ))),
    }
}

pub fn validate_resource(def: &ResourceDef) -> Result<(), ConfigError> {
    let ident = Regex::new(r"^[a-z_][a-z0-9_]{0,62}$")
        .map_err(|e| ConfigError::Validation(e.to_string()))?;
    check_identifier(&ident, "table", def.table_name)?;
    check_identifier(&ident, "path segment", def.path_segment)?;

    let mut names = HashSet::new();
    for c in def.columns {
        check_identifier(&ident, "column", c.name)?;
        if !names.insert(c.name) {
            return Err(ConfigError::Validation(format!(
                "{}: duplicate column {}",
                def.table_name, c.name
            )));
        }
        if let ColumnType::Varchar(0) = c.ty {
            return Err(ConfigError::Validation(format!(
                "{}: column {} has zero length",
                def.table_name, c.name
            )));
        }
    }

    let pks: Vec<_> = def.columns.iter().filter(|c| c.primary_key).collect();
    match pks.as_slice() {
        [pk] if pk.ty == ColumnType::Serial => {}
        [pk] => {
            return Err(ConfigError::InvalidPrimaryKey {
                table: def.table_name.to_string(),
                column: pk.name.to_string(),
            })
        }
        _ => {
            return Err(ConfigError::Validation(format!(
                "{}: exactly one primary key column required, found {}",
                def.table_name,
                pks.len()
            )))
        }
    }

    check_timestamp_column(def, "order", def.order_column)?;
    if let Some(touch) = def.touch_column {
        check_timestamp_column(def, "touch", touch)?;
    }
    Ok(())
}

pub fn validate_catalog(defs: &[&ResourceDef]) -> Result<(), ConfigError> {
    let mut path_segments = HashSet::new();
    let mut tables = HashSet::new();
    for def in defs {
        validate_resource(def)?;
        if !path_segments.insert(def.path_segment) {
            return Err(ConfigError::DuplicatePathSegment(def.path_segment.to_string()));
        }
        if !tables.insert(def.table_name) {
            return Err(ConfigError::Validation(format!("duplicate table: {}", def.table_name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{catalog, ColumnDef, Operation, FLAVORS, NOTES};

    static NO_PK: ResourceDef = ResourceDef {
        path_segment: "things",
        table_name: "things",
        columns: &[
            ColumnDef::new("name", ColumnType::Varchar(10)),
            ColumnDef::new("created_at", ColumnType::Timestamptz),
        ],
        operations: &[Operation::List],
        order_column: "created_at",
        touch_column: None,
    };

    static TEXT_PK: ResourceDef = ResourceDef {
        path_segment: "things",
        table_name: "things",
        columns: &[
            ColumnDef::new("id", ColumnType::Varchar(36)).primary_key(),
            ColumnDef::new("created_at", ColumnType::Timestamptz),
        ],
        operations: &[Operation::List],
        order_column: "created_at",
        touch_column: None,
    };

    static BAD_ORDER: ResourceDef = ResourceDef {
        path_segment: "things",
        table_name: "things",
        columns: &[
            ColumnDef::new("id", ColumnType::Serial).primary_key(),
            ColumnDef::new("name", ColumnType::Varchar(10)),
        ],
        operations: &[Operation::List],
        order_column: "name",
        touch_column: None,
    };

    static QUOTED_NAME: ResourceDef = ResourceDef {
        path_segment: "things",
        table_name: "things\"; DROP TABLE notes; --",
        columns: &[ColumnDef::new("id", ColumnType::Serial).primary_key()],
        operations: &[Operation::List],
        order_column: "id",
        touch_column: None,
    };

    #[test]
    fn builtin_catalog_is_valid() {
        validate_catalog(&catalog()).unwrap();
    }

    #[test]
    fn duplicate_path_segment_rejected() {
        let err = validate_catalog(&[&NOTES, &FLAVORS, &NOTES]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePathSegment(ref s) if s == "notes"));
    }

    #[test]
    fn missing_primary_key_rejected() {
        let err = validate_resource(&NO_PK).unwrap_err();
        assert!(err.to_string().contains("exactly one primary key"));
    }

    #[test]
    fn non_serial_primary_key_rejected() {
        let err = validate_resource(&TEXT_PK).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrimaryKey { ref column, .. } if column == "id"));
    }

    #[test]
    fn order_column_must_be_timestamp() {
        let err = validate_resource(&BAD_ORDER).unwrap_err();
        assert!(err.to_string().contains("must be a timestamp"));
    }

    #[test]
    fn unsafe_identifier_rejected() {
        let err = validate_resource(&QUOTED_NAME).unwrap_err();
        assert!(err.to_string().contains("invalid table name"));
    }
}
