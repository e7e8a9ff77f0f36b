//! Host collaborators that report to the log instead of a screen.

use std::{collections::HashMap, time::Instant};

use tessera_circular_progress::{
    AnimationKey, AnimationRequest, Animator, HostError, LayerFrame, LayerKind, LayerPath,
    LayerRenderer, RepeatCount,
};
use tracing::{debug, info};

#[derive(Default)]
pub struct TracingRenderer {
    frames: usize,
}

impl TracingRenderer {
    pub fn frames(&self) -> usize {
        self.frames
    }
}

fn describe(path: Option<&LayerPath>) -> String {
    match path {
        Some(LayerPath::Arc(arc)) => format!(
            "arc r={:.1} sweep={:.0}deg",
            arc.radius,
            arc.sweep_angle.to_degrees()
        ),
        Some(LayerPath::Polygon(polygon)) => format!("polygon {} pts", polygon.points().len()),
        Some(LayerPath::Custom(_)) => "custom glyph".to_string(),
        None => "empty".to_string(),
    }
}

impl LayerRenderer for TracingRenderer {
    fn set_needs_display(&mut self) {
        debug!("redraw requested");
    }

    fn set_opacity(&mut self, opacity: f32) {
        info!(opacity, "opacity changed");
    }

    fn render(&mut self, frame: &LayerFrame<'_>) -> Result<(), HostError> {
        if frame.size.is_empty() {
            return Err(HostError::SurfaceUnavailable);
        }
        self.frames += 1;
        for (kind, layer) in frame.layers.iter() {
            debug!(
                frame = self.frames,
                ?kind,
                fill = ?layer.fill_color.map(|color| color.to_array()),
                "{}",
                describe(layer.path.as_ref())
            );
        }
        Ok(())
    }
}

/// Eased progress of `request` at 25%, 50% and 75% of its duration.
pub fn eased_quarters(request: &AnimationRequest) -> [f32; 3] {
    [0.25, 0.5, 0.75].map(|t| request.easing.apply(t))
}

#[derive(Default)]
pub struct TracingAnimator {
    running: HashMap<(LayerKind, AnimationKey), Instant>,
}

impl TracingAnimator {
    pub fn running(&self) -> usize {
        self.running.len()
    }
}

impl Animator for TracingAnimator {
    fn add_animation(&mut self, request: AnimationRequest) {
        info!(
            key = request.key.as_str(),
            duration = ?request.duration,
            repeat = ?request.repeat,
            "animation started"
        );
        if let RepeatCount::Finite(_) = request.repeat {
            let curve = eased_quarters(&request);
            debug!(key = request.key.as_str(), ?curve, "eased progress at quarter points");
        }
        self.running.insert((request.layer, request.key), Instant::now());
    }

    fn remove_animation(&mut self, layer: LayerKind, key: AnimationKey) {
        match self.running.remove(&(layer, key)) {
            Some(started) => info!(
                key = key.as_str(),
                elapsed = ?started.elapsed(),
                "animation removed"
            ),
            None => debug!(key = key.as_str(), "no animation to remove"),
        }
    }
}
