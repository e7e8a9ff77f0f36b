//! Recording host collaborators for tests.
//!
//! Enabled for this crate's own tests and, for downstream crates, through the
//! `testing` feature.

use crate::{
    animation::{AnimationKey, AnimationRequest, Animator},
    error::HostError,
    layer::{LayerKind, LayerSet},
    path::Size,
    render::{LayerFrame, LayerRenderer},
};

/// A frame captured by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFrame {
    /// Bounds passed with the frame.
    pub size: Size,
    /// Opacity passed with the frame.
    pub opacity: f32,
    /// Snapshot of the layers.
    pub layers: LayerSet,
}

/// Renderer that keeps every frame and invalidation.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Frames in the order they were rendered.
    pub frames: Vec<RecordedFrame>,
    /// Number of `set_needs_display` calls.
    pub needs_display_requests: usize,
    /// Every opacity pushed by the view.
    pub opacity_changes: Vec<f32>,
    /// When set, the next `render` call fails with this error.
    pub fail_next: Option<HostError>,
}

impl RecordingRenderer {
    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl LayerRenderer for RecordingRenderer {
    fn set_needs_display(&mut self) {
        self.needs_display_requests += 1;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity_changes.push(opacity);
    }

    fn render(&mut self, frame: &LayerFrame<'_>) -> Result<(), HostError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.frames.push(RecordedFrame {
            size: frame.size,
            opacity: frame.opacity,
            layers: frame.layers.clone(),
        });
        Ok(())
    }
}

/// A call received by [`RecordingAnimator`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnimatorCall {
    /// `add_animation`.
    Add(AnimationRequest),
    /// `remove_animation`.
    Remove(LayerKind, AnimationKey),
}

/// Animator that keeps every call.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    /// Calls in the order they were made.
    pub calls: Vec<AnimatorCall>,
}

impl RecordingAnimator {
    /// Number of requests added under `key`.
    pub fn added(&self, key: AnimationKey) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AnimatorCall::Add(request) if request.key == key))
            .count()
    }

    /// Number of removals of `key`.
    pub fn removed(&self, key: AnimationKey) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AnimatorCall::Remove(_, removed) if *removed == key))
            .count()
    }

    /// The last request added under `key`.
    pub fn last_added(&self, key: AnimationKey) -> Option<&AnimationRequest> {
        self.calls.iter().rev().find_map(|call| match call {
            AnimatorCall::Add(request) if request.key == key => Some(request),
            _ => None,
        })
    }

    /// Whether `key` was added more recently than it was removed.
    pub fn is_running(&self, key: AnimationKey) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                AnimatorCall::Add(request) if request.key == key => Some(true),
                AnimatorCall::Remove(_, removed) if *removed == key => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Animator for RecordingAnimator {
    fn add_animation(&mut self, request: AnimationRequest) {
        self.calls.push(AnimatorCall::Add(request));
    }

    fn remove_animation(&mut self, layer: LayerKind, key: AnimationKey) {
        self.calls.push(AnimatorCall::Remove(layer, key));
    }
}
