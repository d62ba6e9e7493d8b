//! Output formatting module
//!
//! Every record type renders as a table, CSV, JSON or YAML. Table and CSV
//! show a fixed column subset; JSON and YAML serialize the whole record.

mod common;
mod modules;
mod registry;
mod tf_versions;
mod workspaces;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

pub use common::{escape_csv, RenderError};

/// A record that can be shown as one table or CSV row
pub trait Tabular: Serialize {
    /// Column titles for table output; CSV uses their snake_case form
    const COLUMNS: &'static [&'static str];

    /// Plural noun for the total line
    const NOUN: &'static str;

    /// Cell values, one per column
    fn cells(&self) -> Vec<String>;
}

/// Render `rows` in the requested format
pub fn render<T: Tabular>(
    rows: &[T],
    format: OutputFormat,
    no_header: bool,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(render_table(rows, no_header)),
        OutputFormat::Csv => Ok(render_csv(rows, no_header)),
        OutputFormat::Json => common::to_json(rows),
        OutputFormat::Yaml => common::to_yaml(rows),
    }
}

fn render_table<T: Tabular>(rows: &[T], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    if !no_header {
        table.set_header(T::COLUMNS.to_vec());
    }

    for row in rows {
        table.add_row(row.cells());
    }

    if no_header {
        format!("{table}")
    } else {
        format!("\n{table}\n\nTotal: {} {}", rows.len(), T::NOUN)
    }
}

fn render_csv<T: Tabular>(rows: &[T], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    if !no_header {
        let headers: Vec<String> = T::COLUMNS.iter().map(|c| common::csv_header(c)).collect();
        lines.push(headers.join(","));
    }

    for row in rows {
        let fields: Vec<String> = row.cells().iter().map(|c| escape_csv(c)).collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}
