//! The host's rendering surface.

use crate::{error::HostError, layer::LayerSet, path::Size};

/// Opacity applied while the control is highlighted.
pub const HIGHLIGHTED_OPACITY: f32 = 0.5;

/// Everything the host needs to paint the control once.
#[derive(Clone, Copy, Debug)]
pub struct LayerFrame<'a> {
    /// Bounds of the control.
    pub size: Size,
    /// Opacity of the whole control.
    pub opacity: f32,
    /// Freshly generated layers, back to front.
    pub layers: &'a LayerSet,
}

/// Paints layers produced by the view.
pub trait LayerRenderer {
    /// The view changed and wants [`draw`](crate::CircularProgressView::draw)
    /// to be called on the next frame.
    fn set_needs_display(&mut self) {}

    /// Applies a new opacity to the whole control immediately.
    fn set_opacity(&mut self, _opacity: f32) {}

    /// Paints one frame.
    fn render(&mut self, frame: &LayerFrame<'_>) -> Result<(), HostError>;
}
