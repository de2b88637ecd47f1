//! The resources served by this process.

use crate::config::types::{ColumnDef, ColumnType, Operation, ResourceDef};

pub static NOTES: ResourceDef = ResourceDef {
    path_segment: "notes",
    table_name: "notes",
    columns: &[
        ColumnDef::new("id", ColumnType::Serial).primary_key(),
        ColumnDef::new("created_at", ColumnType::Timestamptz).not_null().with_default("NOW()"),
        ColumnDef::new("updated_at", ColumnType::Timestamptz).not_null().with_default("NOW()"),
        ColumnDef::new("ranking", ColumnType::Integer).not_null().with_default("3"),
        ColumnDef::new("txt", ColumnType::Varchar(255)).not_null(),
    ],
    operations: &[Operation::List, Operation::Create, Operation::Update, Operation::Delete],
    order_column: "created_at",
    touch_column: Some("updated_at"),
};

pub static FLAVORS: ResourceDef = ResourceDef {
    path_segment: "flavors",
    table_name: "flavors",
    columns: &[
        ColumnDef::new("id", ColumnType::Serial).primary_key(),
        ColumnDef::new("name", ColumnType::Varchar(255)).not_null(),
        ColumnDef::new("is_favorite", ColumnType::Boolean).with_default("false"),
        ColumnDef::new("created_at", ColumnType::Timestamptz).not_null().with_default("NOW()"),
        ColumnDef::new("updated_at", ColumnType::Timestamptz).not_null().with_default("NOW()"),
    ],
    operations: &[
        Operation::List,
        Operation::Read,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ],
    order_column: "created_at",
    touch_column: Some("updated_at"),
};

/// All resources, in bootstrap order.
pub fn catalog() -> [&'static ResourceDef; 2] {
    [&NOTES, &FLAVORS]
}
