//! Per-cell classification for numeric display formatting.
//!
//! Two independent signals decide whether a cell gets grouped-digit
//! formatting:
//!
//! - [`is_year_like`]: the value itself looks like a calendar year
//!   (integral, in `[1000, 2100]`).
//! - [`label_has_year_keyword`]: the column label names a year concept.
//!
//! Both veto grouping. They are deliberately independent and separately
//! testable: a non-year column whose values coincidentally land in the year
//! range (say a price column around 1500) is still denied grouping by
//! [`is_year_like`] alone, with the label veto as the tie-breaker of last
//! resort. This is a known limitation of the range heuristic, documented
//! rather than patched over.

use crate::table::CellValue;

/// Substrings of a column label that mark it as year-related.
///
/// Matched case-insensitively. Covers the English words and the CJK
/// ideograms for "year" / "annual".
pub const YEAR_KEYWORDS: &[&str] = &["年", "year", "年份", "年度", "annual"];

/// Inclusive range of integral values treated as calendar years.
pub const YEAR_RANGE: (f64, f64) = (1000.0, 2100.0);

/// Returns true if the value is a non-missing, integral number in the year
/// range `[1000, 2100]`.
///
/// Non-numeric and missing values are never year-like.
///
/// # Example
///
/// ```rust
/// use tablepix::{classify::is_year_like, CellValue};
///
/// assert!(is_year_like(&CellValue::Int(1999)));
/// assert!(!is_year_like(&CellValue::Int(999)));
/// assert!(!is_year_like(&CellValue::Float(1999.5)));
/// ```
pub fn is_year_like(value: &CellValue) -> bool {
    match value.as_f64() {
        Some(n) => n.fract() == 0.0 && n >= YEAR_RANGE.0 && n <= YEAR_RANGE.1,
        None => false,
    }
}

/// Returns true if the column label contains any year keyword,
/// case-insensitively.
pub fn label_has_year_keyword(label: &str) -> bool {
    let lower = label.to_lowercase();
    YEAR_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Decides whether a cell qualifies for grouped-digit formatting.
///
/// Grouping applies iff the value is numeric, not missing, not year-like,
/// its column label carries no year keyword, and its absolute magnitude is
/// at least 1000.
///
/// # Example
///
/// ```rust
/// use tablepix::{classify::wants_grouping, CellValue};
///
/// assert!(wants_grouping(&CellValue::Int(1234567), "revenue"));
/// assert!(!wants_grouping(&CellValue::Int(1999), "revenue")); // year-like
/// assert!(!wants_grouping(&CellValue::Int(15000), "年收入")); // label veto
/// assert!(!wants_grouping(&CellValue::Int(123), "amount")); // too small
/// ```
pub fn wants_grouping(value: &CellValue, label: &str) -> bool {
    let Some(n) = value.as_f64() else {
        return false;
    };
    if is_year_like(value) {
        return false;
    }
    if label_has_year_keyword(label) {
        return false;
    }
    n.abs() >= 1000.0
}
