//! Vector path descriptions handed to the host for each layer.
//!
//! ## Usage
//!
//! Paths are plain data. Hosts that tessellate with lyon can call
//! [`LayerPath::to_lyon_path`]; other hosts read the arc parameters or polygon
//! points directly.

mod arc;
mod polygon;

pub use arc::ArcPath;
pub use lyon_path::Path as LyonPath;
pub use lyon_path::math::{Angle, Point, Size, Transform, Vector, point, size, vector};
pub use polygon::PolygonPath;

/// Geometry assigned to a single layer.
#[derive(Debug, Clone)]
pub enum LayerPath {
    /// A circular arc, used by the background ring and the progress arc.
    Arc(ArcPath),
    /// A closed polyline glyph (stop square, checkmark, arrows).
    Polygon(PolygonPath),
    /// A caller supplied glyph drawn as-is.
    Custom(LyonPath),
}

impl LayerPath {
    /// Returns the arc parameters if this is an arc path.
    pub fn as_arc(&self) -> Option<&ArcPath> {
        match self {
            LayerPath::Arc(arc) => Some(arc),
            _ => None,
        }
    }

    /// Returns the polygon if this is a polyline glyph.
    pub fn as_polygon(&self) -> Option<&PolygonPath> {
        match self {
            LayerPath::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Converts the description into a lyon path.
    pub fn to_lyon_path(&self) -> LyonPath {
        match self {
            LayerPath::Arc(arc) => arc.to_lyon_path(),
            LayerPath::Polygon(polygon) => polygon.to_lyon_path(),
            LayerPath::Custom(path) => path.clone(),
        }
    }
}

impl PartialEq for LayerPath {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LayerPath::Arc(a), LayerPath::Arc(b)) => a == b,
            (LayerPath::Polygon(a), LayerPath::Polygon(b)) => a == b,
            (LayerPath::Custom(a), LayerPath::Custom(b)) => a.iter().eq(b.iter()),
            _ => false,
        }
    }
}

impl From<ArcPath> for LayerPath {
    fn from(arc: ArcPath) -> Self {
        LayerPath::Arc(arc)
    }
}

impl From<PolygonPath> for LayerPath {
    fn from(polygon: PolygonPath) -> Self {
        LayerPath::Polygon(polygon)
    }
}

impl From<LyonPath> for LayerPath {
    fn from(path: LyonPath) -> Self {
        LayerPath::Custom(path)
    }
}
