use lyon_path::{
    Path as LyonPath,
    geom::euclid::default::Box2D,
    math::{Point, Transform},
};
use smallvec::SmallVec;

/// A polyline glyph, closed back to its first point.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPath {
    points: SmallVec<[Point; 8]>,
    closed: bool,
}

impl PolygonPath {
    /// Creates a closed polyline through `points`.
    pub fn closed(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            closed: true,
        }
    }

    /// Creates an open polyline through `points`.
    pub fn open(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            closed: false,
        }
    }

    /// Vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the polyline is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies `transform` to every vertex.
    pub fn transformed(mut self, transform: &Transform) -> Self {
        for p in self.points.iter_mut() {
            *p = transform.transform_point(*p);
        }
        self
    }

    /// Axis aligned bounds of the vertices, `None` when empty.
    pub fn bounds(&self) -> Option<Box2D<f32>> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Box2D::new(min, max))
    }

    /// Builds the equivalent lyon path.
    pub fn to_lyon_path(&self) -> LyonPath {
        let mut builder = LyonPath::builder().with_svg();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            builder.move_to(*first);
            for p in points {
                builder.line_to(*p);
            }
            if self.closed {
                builder.close();
            }
        }
        builder.build()
    }
}
