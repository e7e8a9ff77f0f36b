//! Error types reported by host collaborators and configuration parsing.

use thiserror::Error;

use crate::layer::LayerKind;

/// Failures a host collaborator can report back to the view.
///
/// The view never propagates these to callers of its setters; it logs them
/// and keeps its own state consistent.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host could not paint one of the layers.
    #[error("failed to render {layer:?} layer: {message}")]
    Render {
        /// Layer that failed.
        layer: LayerKind,
        /// Host supplied reason.
        message: String,
    },
    /// The host surface is gone (detached or torn down).
    #[error("render surface is not available")]
    SurfaceUnavailable,
}

/// Errors produced when parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string had neither 6 nor 8 hex digits.
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// The string contained a non-hex character.
    #[error("invalid hex color: {0}")]
    InvalidDigit(String),
}
