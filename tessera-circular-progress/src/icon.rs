//! Custom glyphs shown in the [`Icon`](crate::CircularState::Icon) state.

use crate::{path::LyonPath, path_generator::ArrowDirection};

/// What the icon layer shows while the control is in the icon state.
#[derive(Clone, Debug, Default)]
pub enum IconContent {
    /// Nothing; the icon layer is cleared.
    #[default]
    None,
    /// A caller supplied glyph, stroked with the progress color and not filled.
    PathOnly(LyonPath),
    /// The host draws its own icon view with `path`; the control only strokes
    /// an arrow above it.
    ViewWithOverlay {
        /// Glyph the host's icon view renders.
        path: LyonPath,
        /// Arrow drawn over the view.
        arrow: ArrowDirection,
    },
}

impl IconContent {
    /// Shorthand for a host icon view with the default downward arrow.
    pub fn with_view(path: LyonPath) -> Self {
        IconContent::ViewWithOverlay {
            path,
            arrow: ArrowDirection::Down,
        }
    }

    /// The caller supplied glyph, if any.
    pub fn path(&self) -> Option<&LyonPath> {
        match self {
            IconContent::None => None,
            IconContent::PathOnly(path) | IconContent::ViewWithOverlay { path, .. } => Some(path),
        }
    }

    /// Whether a host icon view is attached.
    pub fn has_view(&self) -> bool {
        matches!(self, IconContent::ViewWithOverlay { .. })
    }
}
