//! A circular progress indicator with spinning, determinate, completed and
//! icon states.
//!
//! # Layers
//!
//! The control is made of three stacked vector layers: a background ring, a
//! progress arc inside it and an icon glyph in the middle. The view computes
//! their geometry and style; the host paints them through a
//! [`LayerRenderer`] and runs animations through an [`Animator`].
//!
//! # States
//!
//! [`CircularState`] selects what the control shows:
//!
//! - `Stop`: a full ring with a stop square.
//! - `StopSpinning`: a ring with a gap that rotates continuously.
//! - `StopProgress`: a full ring with an arc following [`CircularProgressView::set_progress`].
//! - `Completed`: a filled disc with a checkmark.
//! - `Icon`: a caller supplied glyph, see [`IconContent`].
//!
//! ```
//! use tessera_circular_progress::{
//!     AnimationKey, AnimationRequest, Animator, CircularProgressArgsBuilder,
//!     CircularProgressView, CircularState, HostError, LayerFrame, LayerKind, LayerRenderer, Size,
//! };
//!
//! struct Surface;
//!
//! impl LayerRenderer for Surface {
//!     fn render(&mut self, frame: &LayerFrame<'_>) -> Result<(), HostError> {
//!         for (kind, layer) in frame.layers.iter() {
//!             println!("{kind:?}: {:?}", layer.path);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! struct Engine;
//!
//! impl Animator for Engine {
//!     fn add_animation(&mut self, request: AnimationRequest) {
//!         println!("start {}", request.key.as_str());
//!     }
//!
//!     fn remove_animation(&mut self, _layer: LayerKind, key: AnimationKey) {
//!         println!("stop {}", key.as_str());
//!     }
//! }
//!
//! let args = CircularProgressArgsBuilder::default()
//!     .size(Size::new(64.0, 64.0))
//!     .state(CircularState::StopSpinning)
//!     .build()
//!     .unwrap();
//! let mut view = CircularProgressView::new(args, Surface, Engine);
//! assert!(view.is_spinning());
//!
//! view.set_state(CircularState::Completed);
//! assert!(view.draw_if_needed());
//! ```
//!
//! # Lifecycle
//!
//! Hosts may drop running animations when a control leaves the window or the
//! application goes to the background. Attach the view to a [`LifecycleHub`]
//! and call [`CircularProgressView::process_lifecycle_events`] to restart the
//! spin when that happens.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod args;
pub mod color;
pub mod error;
pub mod icon;
pub mod layer;
pub mod lifecycle;
pub mod path;
pub mod path_generator;
pub mod render;
pub mod state;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod view;

pub use crate::{
    animation::{
        AnimatedProperty, AnimationKey, AnimationRequest, AnimationValue, Animator, Easing,
        RepeatCount,
    },
    args::{CircularProgressArgs, CircularProgressArgsBuilder},
    color::Color,
    error::{HostError, ParseColorError},
    icon::IconContent,
    layer::{FillRule, LayerKind, LayerSet, LineCap, VisualLayer},
    lifecycle::{LifecycleEvent, LifecycleHub, LifecycleSubscription},
    path::{ArcPath, LayerPath, LyonPath, PolygonPath, Size},
    path_generator::ArrowDirection,
    render::{LayerFrame, LayerRenderer},
    state::CircularState,
    view::{CircularProgressView, MAX_PROGRESS},
};
