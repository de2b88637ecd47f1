//! Resource definitions: the table layout and exposed operations of each resource.

/// PostgreSQL column types used by the resource catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Serial,
    Integer,
    Varchar(u16),
    Boolean,
    Timestamptz,
}

impl ColumnType {
    /// Type as written in DDL.
    pub fn ddl(&self) -> String {
        match self {
            ColumnType::Serial => "SERIAL".into(),
            ColumnType::Integer => "INTEGER".into(),
            ColumnType::Varchar(len) => format!("VARCHAR({})", len),
            ColumnType::Boolean => "BOOLEAN".into(),
            ColumnType::Timestamptz => "TIMESTAMPTZ".into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
    /// SQL default expression (e.g. `NOW()`, `3`). Trusted: compiled in, never user input.
    pub default: Option<&'static str>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        ColumnDef {
            name,
            ty,
            primary_key: false,
            not_null: false,
            default: None,
        }
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub const fn with_default(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }
}

/// Operations a resource may expose over HTTP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

#[derive(Clone, Debug)]
pub struct ResourceDef {
    /// URL segment under `/api` (e.g. "notes").
    pub path_segment: &'static str,
    pub table_name: &'static str,
    pub columns: &'static [ColumnDef],
    pub operations: &'static [Operation],
    /// List order column, descending; ties break on the primary key, descending.
    pub order_column: &'static str,
    /// Column set to `NOW()` on every update.
    pub touch_column: Option<&'static str>,
}

impl ResourceDef {
    pub fn allows(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// First primary key column. The catalog validator guarantees exactly one.
    pub fn pk_column(&self) -> &'static str {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .map(|c| c.name)
            .unwrap_or("id")
    }
}
