//! # Tablepix - Styled Table Rendering
//!
//! `tablepix` renders tabular data as a styled, self-contained HTML document
//! and, through a pluggable backend, as an image. Its heart is the numeric
//! display formatter: per cell, it decides whether a value gets grouped-digit
//! formatting (`1234567` → `1,234,567`) without corrupting values that merely
//! look numeric, such as years, or that carry missing-data semantics.
//!
//! ## Core Concepts
//!
//! - [`Table`] / [`CellValue`]: the immutable column-ordered data model
//! - [`classify`]: the year-likeness and grouping-eligibility signals
//! - [`format`]: per-cell and whole-table display formatting
//! - [`style`]: named themes ([`StyleSpec`]) and style resolution
//! - [`markup`]: deterministic inline-styled HTML generation
//! - [`RenderBackend`]: the swappable markup-to-pixels boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use tablepix::{render_to_markup, CellValue, RenderOptions, Table};
//!
//! let table = Table::new()
//!     .column("year", vec![CellValue::Int(2022), CellValue::Int(2023)])
//!     .column("revenue", vec![CellValue::Int(1250000), CellValue::Int(1875000)]);
//!
//! let options = RenderOptions::new()
//!     .style("dark")
//!     .thousand_separator(true)
//!     .show_index(false);
//!
//! let html = render_to_markup(&table, &options).unwrap();
//! assert!(html.contains("1,250,000"));
//! assert!(html.contains("2022")); // years stay plain
//! ```
//!
//! ## Images
//!
//! Pixel capture lives behind the [`RenderBackend`] trait so the core stays
//! fully testable without a browser:
//!
//! ```rust
//! use tablepix::{
//!     render_to_image, CaptureRequest, CellValue, RenderBackend, RenderOptions, Table,
//! };
//!
//! struct NullBackend;
//!
//! impl RenderBackend for NullBackend {
//!     fn capture(&self, _request: &CaptureRequest) -> Result<Vec<u8>, tablepix::BackendError> {
//!         Ok(vec![0x89, b'P', b'N', b'G'])
//!     }
//! }
//!
//! let table = Table::new().column("n", vec![CellValue::Int(1)]);
//! let bytes = render_to_image(&table, &RenderOptions::new(), &NullBackend).unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod backend;
pub mod classify;
mod error;
pub mod format;
pub mod markup;
pub mod script;
pub mod style;
mod table;

use std::path::Path;

pub use backend::{CaptureRequest, ImageFormat, RenderBackend};
pub use error::{BackendError, Error};
pub use style::{StyleSpec, TableStyle};
pub use table::{CellValue, Column, ColumnType, Table};

/// Per-call rendering options with documented defaults.
///
/// Defaults: `light` theme, PNG output, no size constraints, row labels
/// shown, grouping taken from the resolved style, no CJK fonts available.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Requested style: theme name or explicit bundle.
    pub style: StyleSpec,
    /// Viewport width in pixels.
    pub width: Option<u32>,
    /// Viewport height in pixels.
    pub height: Option<u32>,
    /// Output image format (image path only).
    pub format: Option<ImageFormat>,
    /// Whether to render the leading row-label column.
    pub show_index: bool,
    /// Per-call grouping override; `None` defers to the style's flag.
    pub thousand_separator: Option<bool>,
    /// CJK font families available on the host, best first.
    pub cjk_fonts: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: StyleSpec::default(),
            width: None,
            height: None,
            format: None,
            show_index: true,
            thousand_separator: None,
            cjk_fonts: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Creates options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style request.
    pub fn style(mut self, spec: impl Into<StyleSpec>) -> Self {
        self.style = spec.into();
        self
    }

    /// Constrains the viewport width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Constrains the viewport height.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Selects the output image format.
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Shows or hides the row-label column.
    pub fn show_index(mut self, show: bool) -> Self {
        self.show_index = show;
        self
    }

    /// Overrides the style's grouping flag for this call.
    pub fn thousand_separator(mut self, enabled: bool) -> Self {
        self.thousand_separator = Some(enabled);
        self
    }

    /// Declares the CJK fonts available on the host.
    pub fn cjk_fonts(mut self, fonts: Vec<String>) -> Self {
        self.cjk_fonts = fonts;
        self
    }
}

/// Renders a table to a styled, self-contained HTML document.
///
/// This is the markup-only exit path: fully core-contained, no backend
/// involved. The pipeline is validate → resolve style (with CJK-driven font
/// rewrite) → format values → generate markup.
///
/// # Errors
///
/// - [`Error::EmptyInput`] / [`Error::Ragged`] for structural violations,
///   surfaced before any formatting work.
/// - [`Error::UnknownTheme`] for a theme name outside the built-in set.
/// - [`Error::Template`] if markup generation fails.
pub fn render_to_markup(table: &Table, options: &RenderOptions) -> Result<String, Error> {
    table.validate()?;
    let resolved = style::resolve(
        &options.style,
        options.thousand_separator,
        script::has_cjk(table),
        &options.cjk_fonts,
    )?;
    let formatted = format::format_table(table, resolved.thousand_separator);
    markup::render_markup(&formatted, &resolved, options.show_index)
}

/// Renders a table to image bytes via the given backend.
///
/// Runs the full markup pipeline, then submits a single [`CaptureRequest`]
/// to the backend. A WebP request is downgraded to a PNG capture before
/// submission. Backend failures are wrapped with the failing stage and
/// re-raised without retry.
pub fn render_to_image<B: RenderBackend>(
    table: &Table,
    options: &RenderOptions,
    backend: &B,
) -> Result<Vec<u8>, Error> {
    let format = options.format.unwrap_or(ImageFormat::Png);
    let markup = render_to_markup(table, options)?;
    let request = CaptureRequest {
        markup,
        width: options.width,
        height: options.height,
        format: format.capture_format(),
    };
    backend
        .capture(&request)
        .map_err(|source| Error::Backend {
            stage: "capture",
            source,
        })
}

/// Renders a table to markup and writes the document verbatim to `path`.
pub fn write_markup<P: AsRef<Path>>(
    table: &Table,
    options: &RenderOptions,
    path: P,
) -> Result<(), Error> {
    let markup = render_to_markup(table, options)?;
    std::fs::write(path, markup)?;
    Ok(())
}
