//! Output formatting for CLI commands.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

/// A value column in tabular output.
pub struct Column {
    pub name: &'static str,
    kind: ColumnKind,
}

enum ColumnKind {
    Int,
    Float,
}

impl Column {
    /// An integer-valued column.
    pub fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Int,
        }
    }

    /// A float-valued column, printed with fixed precision.
    pub fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Float,
        }
    }

    fn render(&self, value: &serde_json::Value) -> String {
        match self.kind {
            ColumnKind::Int => value.as_i64().map_or_else(String::new, |v| v.to_string()),
            ColumnKind::Float => value
                .as_f64()
                .map_or_else(String::new, |v| format!("{v:.6}")),
        }
    }
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Print rows as pretty JSON.
pub fn print_json<T: Serialize>(rows: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// Print rows as a table with a `vertex` column followed by the value
/// columns.
pub fn print_table<T: Serialize>(columns: &[Column], rows: &[T]) {
    let mut table = create_table();
    let mut header = vec!["vertex".to_string()];
    header.extend(columns.iter().map(|c| c.name.to_string()));
    table.set_header(header);

    for row in rows {
        let value = serde_json::to_value(row).unwrap_or_default();
        let mut cells = vec![
            value
                .get("vertex")
                .and_then(serde_json::Value::as_i64)
                .map_or_else(String::new, |v| v.to_string()),
        ];
        for column in columns {
            let cell = value
                .get(column.name)
                .map_or_else(String::new, |v| column.render(v));
            cells.push(cell);
        }
        table.add_row(cells);
    }
    println!("{table}");
}
