use std::f32::consts::TAU;

use lyon_path::{
    Path as LyonPath,
    math::{Angle, Point, vector},
};

/// A circular arc swept clockwise (in y-down screen space) from `start_angle`.
///
/// Angles are measured from the positive x axis; `-π/2` is the top of the
/// circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f32,
    /// Angle at which the arc starts.
    pub start_angle: Angle,
    /// Signed angle covered by the arc.
    pub sweep_angle: Angle,
}

impl ArcPath {
    /// Creates an arc description.
    pub fn new(center: Point, radius: f32, start_angle: Angle, sweep_angle: Angle) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep_angle,
        }
    }

    /// Angle at which the arc ends.
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    /// Point on the circle at `angle`.
    pub fn point_at(&self, angle: Angle) -> Point {
        let (sin, cos) = angle.radians.sin_cos();
        self.center + vector(cos, sin) * self.radius
    }

    /// First point of the arc.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// Last point of the arc.
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle())
    }

    /// Whether the arc covers the whole circle.
    pub fn is_full_circle(&self) -> bool {
        self.sweep_angle.radians.abs() >= TAU
    }

    /// Builds an open lyon path following the arc.
    pub fn to_lyon_path(&self) -> LyonPath {
        let mut builder = LyonPath::builder().with_svg();
        builder.move_to(self.start_point());
        if self.radius > 0.0 && self.sweep_angle.radians != 0.0 {
            builder.arc(
                self.center,
                vector(self.radius, self.radius),
                self.sweep_angle,
                Angle::zero(),
            );
        }
        builder.build()
    }
}
