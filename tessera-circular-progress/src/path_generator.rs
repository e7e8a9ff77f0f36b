//! Geometry for the control's layers.
//!
//! Every function here is pure: the same bounds, line width and progress
//! always produce the same path. Coordinates are in the control's local,
//! y-down space with the origin at its top-left corner.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::path::{Angle, ArcPath, Point, PolygonPath, Size, Transform, point, vector};

/// Arrow segment length as a fraction of the control width.
pub const ARROW_SIZE_RATIO: f32 = 0.12;
/// Stop square side as a fraction of the control width.
pub const STOP_SIZE_RATIO: f32 = 0.3;
/// Checkmark stroke width as a fraction of the radius.
pub const TICK_WIDTH_RATIO: f32 = 0.3;
/// Sweep of the background ring while spinning; the gap makes rotation visible.
pub const SPINNING_SWEEP: f32 = 1.8 * PI;

/// Arcs start at the top of the circle.
const START_ANGLE: f32 = -FRAC_PI_2;

/// Direction of the arrow overlay drawn above a custom icon view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Points down ("expand").
    #[default]
    Down,
    /// Points up ("collapse").
    Up,
}

fn center(size: Size) -> Point {
    point(size.width / 2.0, size.height / 2.0)
}

fn min_dimension(size: Size) -> f32 {
    size.width.min(size.height)
}

/// The ring behind the progress arc.
///
/// A full circle normally; when `partial` (the control is spinning) it leaves
/// a gap of `0.2π`.
pub fn background_arc_path(size: Size, line_width: f32, partial: bool) -> ArcPath {
    let radius = ((min_dimension(size) - line_width) / 2.0).max(0.0);
    let sweep = if partial { SPINNING_SWEEP } else { TAU };
    ArcPath::new(
        center(size),
        radius,
        Angle::radians(START_ANGLE),
        Angle::radians(sweep),
    )
}

/// The determinate progress arc, inset from the ring.
///
/// The sweep is `progress × 2π`. Progress is not clamped here, so a negative
/// value sweeps counter-clockwise.
pub fn progress_arc_path(size: Size, line_width: f32, progress: f64) -> ArcPath {
    let radius = ((min_dimension(size) - line_width * 3.0) / 2.0).max(0.0);
    ArcPath::new(
        center(size),
        radius,
        Angle::radians(START_ANGLE),
        Angle::radians(progress as f32 * TAU),
    )
}

/// The completion checkmark.
///
/// Built as an L-shaped bar `tick_width` thick, rotated by -45° and moved
/// into place.
pub fn checkmark_path(size: Size) -> PolygonPath {
    let radius = min_dimension(size) / 2.0;
    let tick = radius * TICK_WIDTH_RATIO;

    PolygonPath::closed([
        point(0.0, 0.0),
        point(0.0, tick * 2.0),
        point(tick * 3.0, tick * 2.0),
        point(tick * 3.0, tick),
        point(tick, tick),
        point(tick, 0.0),
    ])
    .transformed(
        &Transform::rotation(Angle::radians(-FRAC_PI_4))
            .then_translate(vector(radius * 0.46, radius * 1.02)),
    )
}

/// The centered stop square.
pub fn stop_square_path(size: Size) -> PolygonPath {
    let radius = size.width / 2.0;
    let side = size.width * STOP_SIZE_RATIO;
    let inset = radius * (1.0 - STOP_SIZE_RATIO);

    PolygonPath::closed([
        point(0.0, 0.0),
        point(side, 0.0),
        point(side, side),
        point(0.0, side),
    ])
    .transformed(&Transform::translation(inset, inset))
}

fn arrow_outline(segment: f32, tip_depth: f32) -> [Point; 8] {
    [
        point(0.0, 0.0),
        point(segment * 2.0, 0.0),
        point(segment * 2.0, segment),
        point(segment * 3.0, segment),
        point(segment, segment * tip_depth),
        point(-segment, segment),
        point(0.0, segment),
        point(0.0, 0.0),
    ]
}

/// A downward pointing arrow centered horizontally in the control.
pub fn down_arrow_path(size: Size) -> PolygonPath {
    let radius = size.width / 2.0;
    let segment = size.width * ARROW_SIZE_RATIO;
    let offset = radius * (1.0 - ARROW_SIZE_RATIO);

    PolygonPath::closed(arrow_outline(segment, 3.0)).transformed(
        &Transform::translation(-(segment / 2.0), -segment / 1.2)
            .then_translate(vector(offset, offset)),
    )
}

/// An upward pointing arrow, the down arrow's shape turned half a turn.
pub fn up_arrow_path(size: Size) -> PolygonPath {
    let radius = size.width / 2.0;
    let segment = size.width * ARROW_SIZE_RATIO;

    PolygonPath::closed(arrow_outline(segment, 3.3)).transformed(
        &Transform::rotation(Angle::radians(PI))
            .then_translate(vector(radius, radius))
            .then_translate(vector(segment, segment * 1.3)),
    )
}

/// Arrow glyph for `direction`.
pub fn arrow_path(size: Size, direction: ArrowDirection) -> PolygonPath {
    match direction {
        ArrowDirection::Down => down_arrow_path(size),
        ArrowDirection::Up => up_arrow_path(size),
    }
}
