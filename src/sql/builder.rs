//! Builds parameterized DDL, SELECT, INSERT, UPDATE and DELETE from a resource definition.

use crate::config::ResourceDef;
use crate::sql::{Assignment, PgBindValue};

/// Quote identifier for PostgreSQL (safe: only from the catalog).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list(def: &ResourceDef) -> String {
    def.columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// DROP TABLE IF EXISTS.
pub fn drop_table(def: &ResourceDef) -> String {
    format!("DROP TABLE IF EXISTS {}", quoted(def.table_name))
}

/// CREATE TABLE from column definitions; `if_not_exists` leaves an existing table alone.
pub fn create_table(def: &ResourceDef, if_not_exists: bool) -> String {
    let col_defs: Vec<String> = def
        .columns
        .iter()
        .map(|c| {
            let mut col = format!("{} {}", quoted(c.name), c.ty.ddl());
            if c.primary_key {
                col.push_str(" PRIMARY KEY");
            }
            if let Some(d) = c.default {
                col.push_str(" DEFAULT ");
                col.push_str(d);
            }
            if c.not_null && !c.primary_key {
                col.push_str(" NOT NULL");
            }
            col
        })
        .collect();
    format!(
        "CREATE TABLE {}{} (\n  {}\n)",
        if if_not_exists { "IF NOT EXISTS " } else { "" },
        quoted(def.table_name),
        col_defs.join(",\n  ")
    )
}

/// SELECT EXISTS: whether the table holds any row.
pub fn select_any(def: &ResourceDef) -> String {
    format!("SELECT EXISTS (SELECT 1 FROM {})", quoted(def.table_name))
}

/// SELECT all rows, newest first; ties on the order column break on the primary key.
pub fn select_list(def: &ResourceDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {} DESC, {} DESC",
        select_column_list(def),
        quoted(def.table_name),
        quoted(def.order_column),
        quoted(def.pk_column())
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(def: &ResourceDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(Some(id)));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(def),
        quoted(def.table_name),
        quoted(def.pk_column()),
        n
    );
    q
}

/// INSERT supplied columns only, so absent ones take their DB default.
/// Falls back to `DEFAULT VALUES` when nothing was supplied.
pub fn insert(def: &ResourceDef, assignments: &[Assignment]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for a in assignments {
        if !a.supplied {
            continue;
        }
        let Some(c) = def.column(a.column) else { continue };
        if c.primary_key {
            continue;
        }
        let n = q.push_param(a.value.clone());
        cols.push(quoted(c.name));
        placeholders.push(format!("${}", n));
    }
    let table = quoted(def.table_name);
    let returning = select_column_list(def);
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table,
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE by id, full replace: every assignment is written, supplied or not.
/// The touch column is refreshed with NOW(); the id is the last parameter.
pub fn update(def: &ResourceDef, id: i32, assignments: &[Assignment]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let pk = def.pk_column();
    let mut sets = Vec::new();
    for a in assignments {
        let Some(c) = def.column(a.column) else { continue };
        if c.primary_key || Some(c.name) == def.touch_column {
            continue;
        }
        let n = q.push_param(a.value.clone());
        sets.push(format!("{} = ${}", quoted(c.name), n));
    }
    if let Some(touch) = def.touch_column {
        sets.push(format!("{} = NOW()", quoted(touch)));
    }
    let table = quoted(def.table_name);
    let returning = select_column_list(def);
    if sets.is_empty() {
        let n = q.push_param(PgBindValue::Int(Some(id)));
        q.sql = format!("SELECT {} FROM {} WHERE {} = ${}", returning, table, quoted(pk), n);
        return q;
    }
    let n = q.push_param(PgBindValue::Int(Some(id)));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        table,
        sets.join(", "),
        quoted(pk),
        n,
        returning
    );
    q
}

/// DELETE by id. Callers read rows affected; zero is not an error.
pub fn delete(def: &ResourceDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(Some(id)));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(def.table_name),
        quoted(def.pk_column()),
        n
    );
    q
}
