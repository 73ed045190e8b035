//! The rendering backend boundary.
//!
//! Turning markup into pixels is the job of an external engine (a headless
//! browser or similar). The core only produces a [`CaptureRequest`] and
//! hands it to a [`RenderBackend`]; it never retries, batches, or inspects
//! partial results. A backend failure propagates wrapped with the stage
//! name, the underlying cause unmasked.
//!
//! Tests run against a fake backend; no real capture engine is needed to
//! exercise the core.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BackendError, Error};

/// Output image format, a small closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless raster.
    Png,
    /// Lossy raster.
    Jpeg,
    /// Requested as WebP; captured as PNG (see
    /// [`capture_format`](Self::capture_format)).
    Webp,
}

impl ImageFormat {
    /// The lowercase name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
        }
    }

    /// The format actually passed to the capture engine.
    ///
    /// Element capture engines commonly support only PNG and JPEG, so a
    /// WebP request is captured as PNG and keeps its requested extension.
    pub fn capture_format(self) -> ImageFormat {
        match self {
            ImageFormat::Webp => ImageFormat::Png,
            other => other,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    /// Parses a format name case-insensitively.
    ///
    /// Anything outside {png, jpeg, webp} is [`Error::UnsupportedFormat`],
    /// surfaced before any rendering work happens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Everything a backend needs to produce an image: the complete markup
/// document and the output constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureRequest {
    /// The self-contained markup document. Its single
    /// `class="table-container"` element is the capture target.
    pub markup: String,
    /// Viewport width in pixels, if constrained.
    pub width: Option<u32>,
    /// Viewport height in pixels, if constrained.
    pub height: Option<u32>,
    /// Effective capture format (WebP already downgraded to PNG).
    pub format: ImageFormat,
}

/// An engine that can turn a markup document into image bytes.
///
/// Implementations are expected to crop their capture to the markup's
/// `table-container` element rather than the whole page. The core treats
/// `capture` as opaque and potentially slow; it waits for the single
/// terminal result and performs no retry.
pub trait RenderBackend {
    /// Captures the request's markup as an image.
    fn capture(&self, request: &CaptureRequest) -> Result<Vec<u8>, BackendError>;
}
