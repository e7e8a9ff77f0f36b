//! Declarative animation requests for the host's animation engine.
//!
//! ## Usage
//!
//! The view never interpolates anything itself. It describes each animation
//! as an [`AnimationRequest`] and hands it to an [`Animator`], which runs it
//! asynchronously and can cancel it again by [`AnimationKey`].

use std::time::Duration;

use crate::{color::Color, layer::LayerKind, path::Angle};

/// Duration of one full spin revolution.
pub const SPIN_DURATION: Duration = Duration::from_secs(1);
/// Duration of the background fill on completion.
pub const FILL_DURATION: Duration = Duration::from_millis(500);

/// Identifies a running animation so it can be replaced or cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    /// The continuous spin of the background ring.
    Rotation,
    /// The completion fill of the background disc.
    FillColor,
}

impl AnimationKey {
    /// Stable string form, for hosts keyed by name.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKey::Rotation => "rotationAnimation",
            AnimationKey::FillColor => "colorAnimation",
        }
    }
}

/// The layer property an animation drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedProperty {
    /// Rotation around the layer's z axis.
    RotationZ,
    /// The layer's fill color.
    FillColor,
}

/// A value an animated property moves from or to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationValue {
    /// A rotation.
    Angle(Angle),
    /// A fill color; `None` is no fill.
    Color(Option<Color>),
}

/// How many times an animation plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RepeatCount {
    /// A fixed number of cycles.
    Finite(f32),
    /// Until removed.
    Infinite,
}

/// Timing curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow and accelerates, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
}

impl Easing {
    /// Maps linear time `t` in `0.0..=1.0` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => EASE_IN.solve(t),
        }
    }
}

/// `cubic-bezier(x1, y1, x2, y2)` with fixed end points `(0, 0)` and `(1, 1)`.
struct TimingCurve {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

const EASE_IN: TimingCurve = TimingCurve {
    x1: 0.42,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

impl TimingCurve {
    fn sample(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn slope(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Finds the curve parameter whose x is `x` with Newton steps, then
    /// returns its y.
    fn solve(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, s) - x;
            if error.abs() < 1e-6 {
                break;
            }
            let slope = Self::slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s = (s - error / slope).clamp(0.0, 1.0);
        }
        Self::sample(self.y1, self.y2, s).clamp(0.0, 1.0)
    }
}

/// A single animation handed to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Layer the animation runs on.
    pub layer: LayerKind,
    /// Key used to replace or cancel it.
    pub key: AnimationKey,
    /// Property being animated.
    pub property: AnimatedProperty,
    /// Start value; `None` starts from the current presentation value.
    pub from: Option<AnimationValue>,
    /// End value.
    pub to: AnimationValue,
    /// Length of one cycle.
    pub duration: Duration,
    /// Number of cycles.
    pub repeat: RepeatCount,
    /// Timing curve.
    pub easing: Easing,
    /// When `false` the end value stays applied after the animation finishes.
    pub removed_on_completion: bool,
}

impl AnimationRequest {
    /// One revolution per [`SPIN_DURATION`], repeated until removed.
    pub fn spin() -> Self {
        Self {
            layer: LayerKind::Background,
            key: AnimationKey::Rotation,
            property: AnimatedProperty::RotationZ,
            from: None,
            to: AnimationValue::Angle(Angle::two_pi()),
            duration: SPIN_DURATION,
            repeat: RepeatCount::Infinite,
            easing: Easing::Linear,
            removed_on_completion: true,
        }
    }

    /// Fills the background disc from `from` to `to` once, keeping the end color.
    pub fn fill(from: Option<Color>, to: Color) -> Self {
        Self {
            layer: LayerKind::Background,
            key: AnimationKey::FillColor,
            property: AnimatedProperty::FillColor,
            from: Some(AnimationValue::Color(from)),
            to: AnimationValue::Color(Some(to)),
            duration: FILL_DURATION,
            repeat: RepeatCount::Finite(1.0),
            easing: Easing::EaseIn,
            removed_on_completion: false,
        }
    }
}

/// The host's animation engine.
pub trait Animator {
    /// Starts `request`, replacing any running animation with the same key on
    /// the same layer.
    fn add_animation(&mut self, request: AnimationRequest);

    /// Cancels the animation `key` on `layer`; unknown keys are ignored.
    fn remove_animation(&mut self, layer: LayerKind, key: AnimationKey);
}
