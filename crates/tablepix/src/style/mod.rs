//! Style records, themes, and resolution.
//!
//! A [`TableStyle`] is a flat, immutable bundle of presentation attributes.
//! Callers request one either by theme name or as an explicit bundle (a
//! [`StyleSpec`]); [`resolve`] turns the request into a concrete record,
//! applying the per-call grouping override and the CJK font rewrite.
//! Resolution always returns a new record; shared styles are never mutated
//! in place.
//!
//! # Example
//!
//! ```rust
//! use tablepix::style::{resolve, StyleSpec, TableStyle};
//!
//! let style = resolve(&StyleSpec::theme("dark"), Some(true), false, &[]).unwrap();
//! assert!(style.thousand_separator);
//!
//! let custom = StyleSpec::Custom(TableStyle {
//!     font_size: 16,
//!     ..TableStyle::default()
//! });
//! let style = resolve(&custom, None, false, &[]).unwrap();
//! assert_eq!(style.font_size, 16);
//! ```

mod themes;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use themes::{theme, theme_names};

/// Generic fallback chain appended after a CJK font.
const CJK_FALLBACK_FONTS: &str = "'Microsoft YaHei', 'SimHei', sans-serif";

/// A flat record of table presentation attributes.
///
/// All fields have documented defaults (the `light` theme), so explicit
/// bundles only need to set what they change. Colors are CSS color strings;
/// `cell_padding`, `border_radius`, and `shadow` are CSS values embedded
/// verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// CSS font-family stack.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: u32,
    /// Header row background color.
    pub header_bg_color: String,
    /// Header row text color.
    pub header_text_color: String,
    /// Body row background colors, alternating by row parity.
    pub row_bg_colors: [String; 2],
    /// Body row text color.
    pub row_text_color: String,
    /// Cell border color.
    pub border_color: String,
    /// CSS padding for every cell.
    pub cell_padding: String,
    /// CSS border-radius of the table container.
    pub border_radius: String,
    /// CSS box-shadow of the table container.
    pub shadow: String,
    /// Default for grouped-digit formatting; an explicit per-call flag
    /// overrides it.
    pub thousand_separator: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_family:
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif".to_string(),
            font_size: 14,
            header_bg_color: "#f8f9fa".to_string(),
            header_text_color: "#212529".to_string(),
            row_bg_colors: ["#ffffff".to_string(), "#f8f9fa".to_string()],
            row_text_color: "#212529".to_string(),
            border_color: "#dee2e6".to_string(),
            cell_padding: "8px 12px".to_string(),
            border_radius: "8px".to_string(),
            shadow: "0 2px 8px rgba(0, 0, 0, 0.1)".to_string(),
            thousand_separator: false,
        }
    }
}

impl TableStyle {
    /// Parses an explicit style bundle from YAML content.
    ///
    /// Unset fields take their defaults; unknown fields are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablepix::style::TableStyle;
    ///
    /// let style = TableStyle::from_yaml("font_size: 16\nheader_bg_color: '#FF6B6B'").unwrap();
    /// assert_eq!(style.font_size, 16);
    /// assert_eq!(style.cell_padding, TableStyle::default().cell_padding);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads an explicit style bundle from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// A style request: a named theme or an explicit bundle.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleSpec {
    /// Look up a built-in theme by name.
    Theme(String),
    /// Use this record as-is.
    Custom(TableStyle),
}

impl StyleSpec {
    /// Convenience constructor for theme requests.
    pub fn theme(name: impl Into<String>) -> Self {
        StyleSpec::Theme(name.into())
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        StyleSpec::Theme("light".to_string())
    }
}

impl From<&str> for StyleSpec {
    fn from(name: &str) -> Self {
        StyleSpec::Theme(name.to_string())
    }
}

impl From<TableStyle> for StyleSpec {
    fn from(style: TableStyle) -> Self {
        StyleSpec::Custom(style)
    }
}

/// Resolves a style request into a concrete record.
///
/// - Theme names are looked up in the built-in table; unknown names fail
///   with [`Error::UnknownTheme`].
/// - A present `grouping_override` replaces the record's
///   `thousand_separator` flag.
/// - When `cjk_detected` is true and `available_fonts` is non-empty, the
///   font-family field is rewritten to a fallback chain headed by the first
///   available font. With an empty font list the field is left untouched.
///
/// Total and side-effect-free; the input spec is never mutated.
pub fn resolve(
    spec: &StyleSpec,
    grouping_override: Option<bool>,
    cjk_detected: bool,
    available_fonts: &[String],
) -> Result<TableStyle, Error> {
    let mut style = match spec {
        StyleSpec::Theme(name) => {
            theme(name).ok_or_else(|| Error::UnknownTheme(name.clone()))?
        }
        StyleSpec::Custom(style) => style.clone(),
    };

    if let Some(flag) = grouping_override {
        style.thousand_separator = flag;
    }

    if cjk_detected {
        if let Some(first) = available_fonts.first() {
            style.font_family = format!("'{}', {}", first, CJK_FALLBACK_FONTS);
        }
    }

    Ok(style)
}
