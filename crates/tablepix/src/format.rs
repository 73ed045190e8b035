//! Display formatting for cells and whole tables.
//!
//! [`format_cell`] turns a single cell into its display string, applying
//! grouped-digit formatting when [`wants_grouping`] approves.
//! [`format_table`] applies it across a table, resolving each column's type
//! once and handling categorical coercion.
//!
//! Formatting is pure: identical inputs produce identical output, and
//! re-formatting an already formatted grouped string does not double-group
//! it (grouping commas are stripped before re-parsing).

use crate::classify::wants_grouping;
use crate::table::{CellValue, Column, ColumnType, Table};

/// Formats a single cell for display.
///
/// - Missing values become the empty string.
/// - Text that is not a clean numeric literal passes through verbatim.
/// - Numbers denied grouping render plainly: two decimals if fractional,
///   a bare integer string otherwise.
/// - Numbers approved for grouping get a comma every three digits in the
///   integer part, plus exactly two decimals if fractional.
///
/// A cell that cannot be handled cleanly falls back to its unmodified text
/// representation; one odd cell never poisons a table.
///
/// # Example
///
/// ```rust
/// use tablepix::{format::format_cell, CellValue};
///
/// assert_eq!(format_cell(&CellValue::Int(1234567), "revenue"), "1,234,567");
/// assert_eq!(format_cell(&CellValue::Int(1999), "year"), "1999");
/// assert_eq!(format_cell(&CellValue::Float(1234.5), "price"), "1,234.50");
/// assert_eq!(format_cell(&CellValue::Missing, "anything"), "");
/// ```
pub fn format_cell(value: &CellValue, label: &str) -> String {
    if value.is_missing() {
        return String::new();
    }
    let Some(n) = value.as_f64() else {
        // Non-numeric: unparsable text, booleans, etc. pass through.
        return value.display_text();
    };

    // Integers take an exact path so large magnitudes never round-trip
    // through f64.
    let plain = if let Some(i) = value.as_i64_exact() {
        i.to_string()
    } else if n.fract() != 0.0 {
        format!("{:.2}", n)
    } else {
        format!("{}", n as i64)
    };

    if wants_grouping(value, label) {
        group_digits(&plain)
    } else {
        plain
    }
}

/// Inserts a comma every three digits in the integer part of a rendered
/// number. The sign and any decimal suffix are preserved untouched.
fn group_digits(rendered: &str) -> String {
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Applies display formatting to every cell of a table.
///
/// With `grouping_enabled` false this is a structural copy: no cell changes.
/// Otherwise each column's element type is resolved once and its cells are
/// run through [`format_cell`] with the column's label:
///
/// - Categorical columns are checked for numeric category values first; if
///   none of the categories parse as numbers, cells keep their plain text
///   representation.
/// - Every other column type goes through the formatter directly (numeric
///   formatting for numbers, verbatim passthrough for text).
///
/// Column count, order, and row count are unchanged; row labels carry over.
/// The result holds display text only and is a presentation artifact, not
/// meant for further numeric computation.
pub fn format_table(table: &Table, grouping_enabled: bool) -> Table {
    if !grouping_enabled {
        return table.clone();
    }

    let mut out = Table::new();
    for column in table.columns() {
        let formatted = match column.column_type() {
            ColumnType::Categorical => format_categorical(column),
            ColumnType::Numeric | ColumnType::Mixed | ColumnType::Text | ColumnType::Bool => {
                column
                    .values
                    .iter()
                    .map(|v| CellValue::Text(format_cell(v, &column.name)))
                    .collect()
            }
        };
        out = out.push_column(Column::new(column.name.clone(), formatted));
    }
    if let Some(labels) = table.index() {
        out = out.with_index(labels.to_vec());
    }
    out
}

/// Formats a categorical column, coercing category values to numbers first.
fn format_categorical(column: &Column) -> Vec<CellValue> {
    let any_numeric = column
        .values
        .iter()
        .any(|v| !v.is_missing() && v.as_f64().is_some());

    column
        .values
        .iter()
        .map(|v| {
            let text = if any_numeric {
                format_cell(v, &column.name)
            } else {
                v.display_text()
            };
            CellValue::Text(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Single-cell formatting
    // =========================================================================

    #[test]
    fn test_format_reference_cases() {
        assert_eq!(format_cell(&CellValue::Int(1234567), "revenue"), "1,234,567");
        assert_eq!(format_cell(&CellValue::Int(1999), "year"), "1999");
        assert_eq!(format_cell(&CellValue::Int(123), "amount"), "123");
        assert_eq!(format_cell(&CellValue::Float(1234.5), "price"), "1,234.50");
        assert_eq!(format_cell(&CellValue::Missing, "anything"), "");
    }

    #[test]
    fn test_format_negative_values() {
        assert_eq!(format_cell(&CellValue::Int(-1234567), "delta"), "-1,234,567");
        assert_eq!(format_cell(&CellValue::Float(-1234.5), "delta"), "-1,234.50");
        assert_eq!(format_cell(&CellValue::Int(-999), "delta"), "-999");
    }

    #[test]
    fn test_format_ungrouped_float() {
        // Fractional but below the grouping threshold: plain two decimals.
        assert_eq!(format_cell(&CellValue::Float(458.7), "市值"), "458.70");
        // Integral float renders as a bare integer.
        assert_eq!(format_cell(&CellValue::Float(140.0), "市值"), "140");
        assert_eq!(format_cell(&CellValue::Float(0.0), "市值"), "0");
    }

    #[test]
    fn test_format_year_column_label() {
        assert_eq!(format_cell(&CellValue::Int(1500000), "年sales"), "1500000");
        assert_eq!(format_cell(&CellValue::Int(15000), "annual total"), "15000");
    }

    #[test]
    fn test_format_text_passthrough() {
        assert_eq!(format_cell(&CellValue::text("A级"), "评级"), "A级");
        assert_eq!(format_cell(&CellValue::text("2023Q1"), "季度"), "2023Q1");
        assert_eq!(format_cell(&CellValue::text("1.2.3"), "version"), "1.2.3");
    }

    #[test]
    fn test_format_numeric_text() {
        // Clean numeric literals follow the numeric rules.
        assert_eq!(format_cell(&CellValue::text("1234567"), "revenue"), "1,234,567");
        assert_eq!(format_cell(&CellValue::text("1999"), "revenue"), "1999");
    }

    #[test]
    fn test_format_already_grouped_text_is_stable() {
        // Commas are stripped before re-parsing, so re-formatting a formatted
        // string neither double-groups nor shifts magnitude.
        let first = format_cell(&CellValue::Int(1234567), "revenue");
        let second = format_cell(&CellValue::text(first.clone()), "revenue");
        assert_eq!(first, second);

        let first = format_cell(&CellValue::Float(1234.5), "price");
        let second = format_cell(&CellValue::text(first.clone()), "price");
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_cell(&CellValue::Bool(true), "in stock"), "true");
        assert_eq!(format_cell(&CellValue::Bool(false), "in stock"), "false");
    }

    #[test]
    fn test_group_digits_shapes() {
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("999999"), "999,999");
        assert_eq!(group_digits("1000000"), "1,000,000");
        assert_eq!(group_digits("-1000"), "-1,000");
        assert_eq!(group_digits("1234.50"), "1,234.50");
    }

    proptest! {
        #[test]
        fn prop_grouped_integer_roundtrips(v in 1000i64..=i64::MAX / 2) {
            prop_assume!(!(1000..=2100).contains(&v));
            let formatted = format_cell(&CellValue::Int(v), "revenue");
            prop_assert!(formatted.contains(','));
            let reparsed: i64 = formatted.replace(',', "").parse().unwrap();
            prop_assert_eq!(reparsed, v);
        }

        #[test]
        fn prop_small_magnitudes_never_grouped(v in -999i64..=999) {
            let formatted = format_cell(&CellValue::Int(v), "revenue");
            prop_assert!(!formatted.contains(','));
            prop_assert_eq!(formatted, v.to_string());
        }

        #[test]
        fn prop_formatting_is_deterministic(v in proptest::num::f64::NORMAL) {
            let a = format_cell(&CellValue::Float(v), "amount");
            let b = format_cell(&CellValue::Float(v), "amount");
            prop_assert_eq!(a, b);
        }
    }

    // =========================================================================
    // Whole-table formatting
    // =========================================================================

    fn sample_table() -> Table {
        Table::new()
            .column(
                "公司名称",
                vec![CellValue::text("阿里巴巴"), CellValue::text("腾讯控股")],
            )
            .column("年份", vec![CellValue::Int(2019), CellValue::Int(2020)])
            .column(
                "营收",
                vec![CellValue::Int(377289), CellValue::Int(481277)],
            )
            .column(
                "缺失数据",
                vec![CellValue::Int(1250000), CellValue::Missing],
            )
    }

    #[test]
    fn test_format_table_disabled_is_identity() {
        let table = sample_table();
        let out = format_table(&table, false);
        assert_eq!(out, table);
    }

    #[test]
    fn test_format_table_groups_numeric_columns() {
        let out = format_table(&sample_table(), true);
        assert_eq!(out.columns()[2].values[0], CellValue::text("377,289"));
        assert_eq!(out.columns()[2].values[1], CellValue::text("481,277"));
    }

    #[test]
    fn test_format_table_leaves_year_column_plain() {
        let out = format_table(&sample_table(), true);
        assert_eq!(out.columns()[1].values[0], CellValue::text("2019"));
    }

    #[test]
    fn test_format_table_missing_becomes_empty() {
        let out = format_table(&sample_table(), true);
        assert_eq!(out.columns()[3].values[0], CellValue::text("1,250,000"));
        assert_eq!(out.columns()[3].values[1], CellValue::text(""));
    }

    #[test]
    fn test_format_table_preserves_shape_and_index() {
        let table = sample_table().with_index(vec!["r0".to_string(), "r1".to_string()]);
        let out = format_table(&table, true);
        assert_eq!(out.n_cols(), table.n_cols());
        assert_eq!(out.n_rows(), table.n_rows());
        assert_eq!(out.index(), table.index());
        let names: Vec<_> = out.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["公司名称", "年份", "营收", "缺失数据"]);
    }

    #[test]
    fn test_format_table_categorical_numeric_coercion() {
        let table = Table::new().column(
            "评级金额",
            vec![
                CellValue::categorical(CellValue::Int(15000)),
                CellValue::categorical(CellValue::Int(25000)),
            ],
        );
        let out = format_table(&table, true);
        assert_eq!(out.columns()[0].values[0], CellValue::text("15,000"));
        assert_eq!(out.columns()[0].values[1], CellValue::text("25,000"));
    }

    #[test]
    fn test_format_table_categorical_non_numeric() {
        let table = Table::new().column(
            "评级",
            vec![
                CellValue::categorical(CellValue::text("A级")),
                CellValue::categorical(CellValue::text("B级")),
            ],
        );
        let out = format_table(&table, true);
        assert_eq!(out.columns()[0].values[0], CellValue::text("A级"));
        assert_eq!(out.columns()[0].values[1], CellValue::text("B级"));
    }

    #[test]
    fn test_format_table_mixed_column() {
        let table = Table::new().column(
            "notes",
            vec![CellValue::Int(120000), CellValue::text("pending")],
        );
        let out = format_table(&table, true);
        assert_eq!(out.columns()[0].values[0], CellValue::text("120,000"));
        assert_eq!(out.columns()[0].values[1], CellValue::text("pending"));
    }
}
