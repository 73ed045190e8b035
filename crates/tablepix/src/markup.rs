//! Deterministic HTML markup generation.
//!
//! [`render_markup`] serializes a table plus a resolved [`TableStyle`] into
//! a complete, self-contained HTML document. All styling is embedded inline
//! on the structural elements, so the document depends on no external
//! stylesheet. The table sits inside a single `<div class="table-container">`
//! so a capture backend can crop to exactly that element.
//!
//! Rendering is a pure function of its inputs: the same (table, style,
//! show_index) triple always produces byte-identical output.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::Error;
use crate::style::TableStyle;
use crate::table::Table;

/// The document template. Registered under an `.html` name so the engine
/// HTML-escapes interpolated cell text.
const TABLE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
</head>
<body style="margin: 0; padding: 20px; background: transparent;">
<div class="table-container" style="display: inline-block; border-radius: {{ style.border_radius }}; box-shadow: {{ style.shadow }}; overflow: hidden;">
<table style="border-collapse: collapse; font-family: {{ style.font_family }}; font-size: {{ style.font_size }}px;">
<thead>
<tr>{% for header in headers %}<th style="background-color: {{ style.header_bg_color }}; color: {{ style.header_text_color }}; padding: {{ style.cell_padding }}; border: 1px solid {{ style.border_color }}; text-align: left;">{{ header }}</th>{% endfor %}</tr>
</thead>
<tbody>
{% for row in rows %}<tr>{% for cell in row.cells %}<td style="background-color: {{ row.bg_color }}; color: {{ style.row_text_color }}; padding: {{ style.cell_padding }}; border: 1px solid {{ style.border_color }};">{{ cell }}</td>{% endfor %}</tr>
{% endfor %}</tbody>
</table>
</div>
</body>
</html>
"#;

static ENGINE: Lazy<minijinja::Environment<'static>> = Lazy::new(|| {
    let mut env = minijinja::Environment::new();
    env.add_template("table.html", TABLE_TEMPLATE)
        .expect("built-in table template must compile");
    env
});

#[derive(Serialize)]
struct RowContext {
    bg_color: String,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    style: &'a TableStyle,
    headers: Vec<String>,
    rows: Vec<RowContext>,
}

/// Renders a table and a resolved style into a self-contained HTML document.
///
/// One header cell per column, one row per table row with its background
/// taken from the style's row-color pair by row parity, and one cell per
/// (row, column) pair holding the cell's display text. When `show_index` is
/// true an extra leading column carries the row labels (row numbers when the
/// table has no index). Missing cells render as empty content.
///
/// Column and row ordering in the output mirrors the input exactly.
///
/// # Errors
///
/// Returns [`Error::Template`] if template expansion fails.
pub fn render_markup(
    table: &Table,
    style: &TableStyle,
    show_index: bool,
) -> Result<String, Error> {
    let mut headers = Vec::with_capacity(table.n_cols() + 1);
    if show_index {
        headers.push(String::new());
    }
    headers.extend(table.columns().iter().map(|c| c.name.clone()));

    let rows = (0..table.n_rows())
        .map(|row| {
            let mut cells = Vec::with_capacity(table.n_cols() + 1);
            if show_index {
                cells.push(row_label(table, row));
            }
            for column in table.columns() {
                cells.push(column.values[row].display_text());
            }
            RowContext {
                bg_color: style.row_bg_colors[row % 2].clone(),
                cells,
            }
        })
        .collect();

    let context = DocumentContext {
        style,
        headers,
        rows,
    };

    let template = ENGINE.get_template("table.html")?;
    let value = minijinja::Value::from_serialize(&context);
    Ok(template.render(value)?)
}

/// The display label for a row: the table's index entry, or the row number
/// when no index was supplied.
fn row_label(table: &Table, row: usize) -> String {
    match table.index() {
        Some(labels) => labels[row].clone(),
        None => row.to_string(),
    }
}
