//! CJK script detection for font fallback selection.
//!
//! Rendering engines fall back to tofu boxes when a table contains CJK text
//! and the style's font stack has no CJK coverage. [`has_cjk`] answers the
//! one question the style resolver needs: does any header, row label, or
//! text cell carry a CJK character?

use crate::table::{CellValue, Table};

/// Unicode block ranges scanned for CJK ideographs (inclusive).
///
/// Covers the unified ideograph block plus extensions A through F.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF),
    (0x3400, 0x4DBF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B73F),
    (0x2B740, 0x2B81F),
    (0x2B820, 0x2CEAF),
];

/// Returns true if the character is a CJK ideograph.
fn is_cjk_char(ch: char) -> bool {
    let code = ch as u32;
    CJK_RANGES
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
}

/// Returns true if the string contains any CJK ideograph.
pub fn text_has_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_char)
}

fn cell_has_cjk(value: &CellValue) -> bool {
    match value {
        CellValue::Text(s) => text_has_cjk(s),
        CellValue::Categorical(inner) => cell_has_cjk(inner),
        _ => false,
    }
}

/// Scans column names, row labels, and text cells for CJK characters.
///
/// Short-circuits on the first hit; read-only.
///
/// # Example
///
/// ```rust
/// use tablepix::{script::has_cjk, CellValue, Table};
///
/// let table = Table::new().column("公司名称", vec![CellValue::text("Acme")]);
/// assert!(has_cjk(&table));
///
/// let plain = Table::new().column("company", vec![CellValue::text("Acme")]);
/// assert!(!has_cjk(&plain));
/// ```
pub fn has_cjk(table: &Table) -> bool {
    if table.columns().iter().any(|c| text_has_cjk(&c.name)) {
        return true;
    }
    if let Some(labels) = table.index() {
        if labels.iter().any(|l| text_has_cjk(l)) {
            return true;
        }
    }
    table
        .columns()
        .iter()
        .any(|c| c.values.iter().any(cell_has_cjk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_detection() {
        assert!(text_has_cjk("阿里巴巴"));
        assert!(text_has_cjk("year 年"));
        assert!(!text_has_cjk("plain ascii"));
        assert!(!text_has_cjk("café"));
        assert!(!text_has_cjk(""));
    }

    #[test]
    fn test_extension_a_range() {
        // U+3400 is in extension A.
        assert!(text_has_cjk("\u{3400}"));
    }

    #[test]
    fn test_detects_in_column_name() {
        let table = Table::new().column("成立年份", vec![CellValue::Int(1999)]);
        assert!(has_cjk(&table));
    }

    #[test]
    fn test_detects_in_index() {
        let table = Table::new()
            .column("a", vec![CellValue::Int(1)])
            .with_index(vec!["第一行".to_string()]);
        assert!(has_cjk(&table));
    }

    #[test]
    fn test_detects_in_cells() {
        let table = Table::new().column("region", vec![CellValue::text("华东")]);
        assert!(has_cjk(&table));

        let categorical = Table::new().column(
            "grade",
            vec![CellValue::categorical(CellValue::text("甲"))],
        );
        assert!(has_cjk(&categorical));
    }

    #[test]
    fn test_no_cjk_anywhere() {
        let table = Table::new()
            .column("product", vec![CellValue::text("Laptop")])
            .column("price", vec![CellValue::Float(1299.99)])
            .with_index(vec!["0".to_string()]);
        assert!(!has_cjk(&table));
    }

    #[test]
    fn test_numeric_cells_are_ignored() {
        let table = Table::new().column("n", vec![CellValue::Int(0x4E00)]);
        assert!(!has_cjk(&table));
    }
}
