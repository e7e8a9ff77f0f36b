//! The circular progress control.
//!
//! ## Usage
//!
//! Create a [`CircularProgressView`] with the host's renderer and animator,
//! drive it through [`set_state`](CircularProgressView::set_state) and
//! [`set_progress`](CircularProgressView::set_progress), and call
//! [`draw`](CircularProgressView::draw) whenever the renderer was asked to
//! redisplay.
//!
//! See the crate level documentation for a complete host setup.

use tracing::{debug, error, trace};

use crate::{
    animation::{AnimationKey, AnimationRequest, Animator},
    args::{CircularProgressArgs, MIN_LINE_WIDTH},
    color::Color,
    icon::IconContent,
    layer::{LayerKind, LayerSet},
    lifecycle::{LifecycleEvent, LifecycleHub, LifecycleSubscription},
    path::{LayerPath, Size},
    path_generator::{
        arrow_path, background_arc_path, checkmark_path, progress_arc_path, stop_square_path,
    },
    render::{HIGHLIGHTED_OPACITY, LayerFrame, LayerRenderer},
    state::{CircularState, FillAction, SpinAction},
};

/// Upper bound of the progress fraction.
pub const MAX_PROGRESS: f64 = 1.0;

/// A circular progress indicator bound to a host renderer and animator.
pub struct CircularProgressView<R, A> {
    size: Size,
    line_width: f32,
    progress: f64,
    state: CircularState,
    progress_color: Color,
    tick_color: Color,
    background_color: Option<Color>,
    icon: IconContent,
    highlighted: bool,
    is_spinning: bool,
    is_animating_fill: bool,
    needs_display: bool,
    layers: LayerSet,
    renderer: R,
    animator: A,
    lifecycle: Option<LifecycleSubscription>,
}

impl<R: LayerRenderer, A: Animator> CircularProgressView<R, A> {
    /// Creates the view and enters `args.state`.
    pub fn new(args: CircularProgressArgs, renderer: R, animator: A) -> Self {
        let line_width = args.resolved_line_width();
        let mut view = Self {
            size: args.size,
            line_width,
            progress: 0.0,
            state: CircularState::Stop,
            progress_color: args.progress_color,
            tick_color: args.tick_color,
            background_color: args.background_color,
            icon: args.icon,
            highlighted: false,
            is_spinning: false,
            is_animating_fill: false,
            needs_display: false,
            layers: LayerSet::new(args.progress_color, args.background_color, line_width),
            renderer,
            animator,
            lifecycle: None,
        };
        view.set_state(args.state);
        view.request_redraw();
        view
    }

    /// Current progress fraction.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Stores a new progress fraction.
    ///
    /// Values above 1.0 are clamped; there is no lower clamp. Reaching exactly
    /// 1.0 starts the background fill animation, reaching exactly 0.0 restores
    /// the container background as the ring's fill. Setting the current value
    /// again does nothing.
    pub fn set_progress(&mut self, value: f64) {
        let value = value.min(MAX_PROGRESS);
        if self.progress == value {
            return;
        }
        self.progress = value;
        trace!(progress = value, "progress updated");

        if value == MAX_PROGRESS {
            self.animate_fill();
        }
        if value == 0.0 {
            self.layers.background.fill_color = self.background_color;
        }
        self.request_redraw();
    }

    /// Current state.
    pub fn state(&self) -> CircularState {
        self.state
    }

    /// Enters `state`, applying its transition side effects.
    ///
    /// Entering the current state again does nothing.
    #[tracing::instrument(level = "debug", skip(self), fields(from = ?self.state))]
    pub fn set_state(&mut self, state: CircularState) {
        if self.state == state {
            return;
        }
        let transition = state.transition();
        debug!(?transition, "entering circular state");

        if let Some(progress) = transition.progress {
            self.set_progress(progress);
        }
        // Progress may already sit at 1.0, in which case set_progress did not fill.
        if transition.fill == FillAction::Keep && !self.is_animating_fill {
            self.animate_fill();
        }
        match transition.spin {
            SpinAction::Start if !self.is_spinning => self.start_spin(),
            SpinAction::Stop if self.is_spinning => self.stop_spin(),
            _ => {}
        }
        if transition.fill == FillAction::Cancel && self.is_animating_fill {
            self.stop_fill_animation();
        }

        self.state = state;
        self.request_redraw();
    }

    /// Whether the ring is spinning.
    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    /// Whether the completion fill has been requested and not cancelled.
    pub fn is_animating_fill(&self) -> bool {
        self.is_animating_fill
    }

    /// Opens a gap in the ring and starts rotating it.
    pub fn start_spin(&mut self) {
        self.is_spinning = true;
        self.layers.background.path =
            Some(background_arc_path(self.size, self.line_width, true).into());
        self.animator.add_animation(AnimationRequest::spin());
        debug!("spin started");
        self.request_redraw();
    }

    /// Stops rotating and closes the ring again.
    pub fn stop_spin(&mut self) {
        self.layers.background.path =
            Some(background_arc_path(self.size, self.line_width, false).into());
        self.animator
            .remove_animation(LayerKind::Background, AnimationKey::Rotation);
        self.is_spinning = false;
        debug!("spin stopped");
        self.request_redraw();
    }

    /// Re-issues the spin animation if the view is spinning.
    ///
    /// Hosts may silently drop running animations while a control is
    /// detached or the application is in the background.
    pub fn restart_animation(&mut self) {
        if !self.is_spinning {
            return;
        }
        self.stop_spin();
        self.start_spin();
    }

    fn animate_fill(&mut self) {
        let from = self.layers.background.fill_color;
        let to = self.layers.background.stroke_color;
        self.animator.add_animation(AnimationRequest::fill(from, to));
        self.layers.background.fill_color = Some(to);
        self.is_animating_fill = true;
        debug!("completion fill requested");
    }

    fn stop_fill_animation(&mut self) {
        self.animator
            .remove_animation(LayerKind::Background, AnimationKey::FillColor);
        self.layers.background.fill_color = self.background_color;
        self.is_animating_fill = false;
        debug!("completion fill cancelled");
    }

    /// Base stroke width.
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Sets the base stroke width, raised to at least 1.0.
    pub fn set_line_width(&mut self, line_width: f32) {
        self.line_width = line_width.max(MIN_LINE_WIDTH);
        self.layers.set_line_width(self.line_width);
    }

    /// Color of the ring, the arc and the stop square.
    pub fn progress_color(&self) -> Color {
        self.progress_color
    }

    /// Restrokes every layer; a completed disc is refilled with the new color.
    pub fn set_progress_color(&mut self, color: Color) {
        self.progress_color = color;
        self.layers.set_stroke_color(color);
        if self.progress == MAX_PROGRESS {
            self.layers.background.fill_color = Some(color);
        }
    }

    /// Sets the progress color from a tint, or resets it to the default blue.
    pub fn set_tint_color(&mut self, tint: Option<Color>) {
        self.set_progress_color(tint.unwrap_or(Color::SYSTEM_BLUE));
    }

    /// Fill color of the checkmark.
    pub fn tick_color(&self) -> Color {
        self.tick_color
    }

    /// Sets the checkmark fill, applied on the next draw.
    pub fn set_tick_color(&mut self, color: Color) {
        self.tick_color = color;
    }

    /// Container background used as the ring's resting fill.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Sets the container background; the ring picks it up the next time its
    /// fill is reset.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Glyph used in the icon state.
    pub fn icon(&self) -> &IconContent {
        &self.icon
    }

    /// Replaces the icon content.
    pub fn set_icon(&mut self, icon: IconContent) {
        self.icon = icon;
        self.request_redraw();
    }

    /// Whether the control is highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Dims the control to half opacity while highlighted.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
        self.renderer.set_opacity(self.opacity());
    }

    /// Opacity of the whole control.
    pub fn opacity(&self) -> f32 {
        if self.highlighted {
            HIGHLIGHTED_OPACITY
        } else {
            1.0
        }
    }

    /// Bounds of the control.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resizes the control.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.request_redraw();
    }

    /// Layers as of the last draw or style change.
    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    /// Whether a redraw was requested since the last [`draw`](Self::draw).
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// The host renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The host renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The host animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// The host animator, mutably.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    fn request_redraw(&mut self) {
        self.needs_display = true;
        trace!("redraw requested");
        self.renderer.set_needs_display();
    }

    /// Draws only if a redraw is pending; returns whether it drew.
    pub fn draw_if_needed(&mut self) -> bool {
        if !self.needs_display {
            return false;
        }
        self.draw();
        true
    }

    /// Regenerates every layer and hands them to the renderer.
    #[tracing::instrument(level = "trace", skip(self), fields(state = ?self.state))]
    pub fn draw(&mut self) {
        self.needs_display = false;
        let size = self.size;

        self.layers.background.path =
            Some(background_arc_path(size, self.line_width, self.is_spinning).into());
        self.layers.progress.path =
            Some(progress_arc_path(size, self.line_width, self.progress).into());

        let icon = &mut self.layers.icon;
        match self.state {
            CircularState::Stop | CircularState::StopSpinning | CircularState::StopProgress => {
                icon.path = Some(stop_square_path(size).into());
                icon.stroke_color = self.layers.progress.stroke_color;
                icon.fill_color = Some(self.progress_color);
            }
            CircularState::Completed => {
                icon.path = Some(checkmark_path(size).into());
                icon.fill_color = Some(self.tick_color);
                self.layers.background.fill_color = Some(self.layers.progress.stroke_color);
            }
            CircularState::Icon => match &self.icon {
                IconContent::ViewWithOverlay { arrow, .. } => {
                    icon.path = Some(arrow_path(size, *arrow).into());
                    icon.fill_color = None;
                }
                IconContent::PathOnly(path) => {
                    icon.path = Some(LayerPath::Custom(path.clone()));
                    icon.fill_color = None;
                }
                IconContent::None => icon.path = None,
            },
        }

        let frame = LayerFrame {
            size,
            opacity: self.opacity(),
            layers: &self.layers,
        };
        if let Err(err) = self.renderer.render(&frame) {
            error!("Circular progress frame was not rendered: {err}");
        }
    }

    /// Subscribes to `hub`, replacing any previous subscription.
    pub fn attach_lifecycle(&mut self, hub: &LifecycleHub) {
        self.lifecycle = Some(hub.subscribe());
    }

    /// Cancels the lifecycle subscription, if any.
    pub fn detach_lifecycle(&mut self) {
        if let Some(subscription) = self.lifecycle.take() {
            subscription.cancel();
        }
    }

    /// Handles every queued lifecycle event and returns how many there were.
    pub fn process_lifecycle_events(&mut self) -> usize {
        let events = match &self.lifecycle {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };
        for event in &events {
            self.handle_lifecycle_event(*event);
        }
        events.len()
    }

    /// Reacts to a single lifecycle event.
    pub fn handle_lifecycle_event(&mut self, event: LifecycleEvent) {
        debug!(?event, spinning = self.is_spinning, "lifecycle event");
        match event {
            LifecycleEvent::WillMoveToSuperview
            | LifecycleEvent::WillMoveToWindow
            | LifecycleEvent::WillEnterForeground => self.restart_animation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use lyon_path::math::point;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::{
        animation::AnimationValue,
        args::CircularProgressArgsBuilder,
        error::HostError,
        path::LyonPath,
        path_generator::{ArrowDirection, down_arrow_path, up_arrow_path},
        testing::{AnimatorCall, RecordingAnimator, RecordingRenderer},
    };

    type TestView = CircularProgressView<RecordingRenderer, RecordingAnimator>;

    fn view() -> TestView {
        view_with(CircularProgressArgs::default())
    }

    fn view_with(args: CircularProgressArgs) -> TestView {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        CircularProgressView::new(args, RecordingRenderer::default(), RecordingAnimator::default())
    }

    fn glyph() -> LyonPath {
        let mut builder = LyonPath::builder().with_svg();
        builder.move_to(point(4.0, 4.0));
        builder.line_to(point(20.0, 4.0));
        builder.line_to(point(12.0, 18.0));
        builder.close();
        builder.build()
    }

    fn background_sweep(view: &TestView) -> f32 {
        view.layers()
            .background
            .path
            .as_ref()
            .and_then(LayerPath::as_arc)
            .map(|arc| arc.sweep_angle.radians)
            .expect("background ring is an arc")
    }

    #[test]
    fn starts_idle() {
        let view = view();
        assert_eq!(view.state(), CircularState::Stop);
        assert_eq!(view.progress(), 0.0);
        assert!(!view.is_spinning());
        assert!(!view.is_animating_fill());
        assert!(view.needs_display());
        assert!(view.animator().calls.is_empty());
    }

    #[test]
    fn initial_state_runs_its_transition() {
        let args = CircularProgressArgsBuilder::default()
            .state(CircularState::StopSpinning)
            .build()
            .expect("all fields have defaults");
        let view = view_with(args);
        assert!(view.is_spinning());
        assert_eq!(view.animator().added(AnimationKey::Rotation), 1);
    }

    #[test]
    fn progress_above_one_is_clamped() {
        let mut view = view();
        view.set_progress(1.5);
        assert_eq!(view.progress(), 1.0);
    }

    #[test]
    fn negative_progress_is_stored_as_is() {
        let mut view = view();
        view.set_progress(-0.25);
        assert_eq!(view.progress(), -0.25);
        view.draw();
        let arc = view.layers().progress.path.as_ref().and_then(LayerPath::as_arc);
        assert!(arc.is_some_and(|arc| arc.sweep_angle.radians < 0.0));
    }

    #[test]
    fn repeated_progress_is_a_no_op() {
        let mut view = view();
        view.set_progress(1.0);
        let requests = view.renderer().needs_display_requests;
        view.set_progress(1.0);
        view.set_progress(7.0);
        assert_eq!(view.animator().added(AnimationKey::FillColor), 1);
        assert_eq!(view.renderer().needs_display_requests, requests);
    }

    #[test]
    fn reaching_one_requests_fill_from_current_color() {
        let mut view = view();
        view.set_progress(1.0);
        let request = view
            .animator()
            .last_added(AnimationKey::FillColor)
            .expect("fill requested");
        assert_eq!(request.from, Some(AnimationValue::Color(Some(Color::TRANSPARENT))));
        assert!(view.is_animating_fill());
        assert_eq!(view.layers().background.fill_color, Some(Color::SYSTEM_BLUE));
    }

    #[test]
    fn reaching_zero_restores_container_background() {
        let mut view = view();
        view.set_background_color(Some(Color::BLACK));
        view.set_progress(1.0);
        view.set_progress(0.0);
        assert_eq!(view.layers().background.fill_color, Some(Color::BLACK));
        // the flag is only cleared by a cancelling state transition
        assert!(view.is_animating_fill());
    }

    #[test]
    fn every_progress_change_requests_redraw() {
        let mut view = view();
        for step in 1..=10 {
            view.set_progress(step as f64 / 10.0);
        }
        // one extra from construction
        assert_eq!(view.renderer().needs_display_requests, 11);
    }

    #[test]
    fn same_state_twice_has_no_side_effects() {
        let mut view = view();
        view.set_state(CircularState::StopSpinning);
        let calls = view.animator().calls.len();
        let requests = view.renderer().needs_display_requests;
        view.set_state(CircularState::StopSpinning);
        assert_eq!(view.animator().calls.len(), calls);
        assert_eq!(view.renderer().needs_display_requests, requests);
    }

    #[rstest]
    fn transitions_follow_table(
        #[values(
            CircularState::Stop,
            CircularState::StopSpinning,
            CircularState::StopProgress,
            CircularState::Completed,
            CircularState::Icon
        )]
        from: CircularState,
        #[values(
            CircularState::Stop,
            CircularState::StopSpinning,
            CircularState::StopProgress,
            CircularState::Completed,
            CircularState::Icon
        )]
        to: CircularState,
    ) {
        let mut view = view();
        view.set_state(from);
        if from == CircularState::StopProgress {
            view.set_progress(0.5);
        }
        let progress_before = view.progress();
        let was_spinning = view.is_spinning();
        view.animator_mut().clear();

        view.set_state(to);

        assert_eq!(view.state(), to);
        if from == to {
            assert!(view.animator().calls.is_empty());
            assert_eq!(view.progress(), progress_before);
            return;
        }

        let transition = to.transition();
        assert_eq!(
            view.progress(),
            transition.progress.unwrap_or(progress_before)
        );
        assert_eq!(view.is_spinning(), to == CircularState::StopSpinning);

        let spin_starts = view.animator().added(AnimationKey::Rotation);
        let spin_stops = view.animator().removed(AnimationKey::Rotation);
        if to == CircularState::StopSpinning {
            assert_eq!(spin_starts, usize::from(!was_spinning));
            assert_eq!(spin_stops, 0);
        } else {
            assert_eq!(spin_starts, 0);
            assert_eq!(spin_stops, usize::from(was_spinning));
        }

        match transition.fill {
            FillAction::Keep => assert!(view.is_animating_fill()),
            FillAction::Cancel => assert!(!view.is_animating_fill()),
        }
        assert_eq!(
            view.animator().added(AnimationKey::FillColor),
            usize::from(to == CircularState::Completed)
        );
        assert_eq!(
            view.animator().removed(AnimationKey::FillColor),
            usize::from(from == CircularState::Completed)
        );
    }

    #[test]
    fn reentering_completed_requests_fill_again() {
        let mut view = view();
        view.set_state(CircularState::Completed);
        view.set_state(CircularState::StopProgress);
        assert_eq!(view.progress(), 1.0);
        view.animator_mut().clear();

        view.set_state(CircularState::Completed);
        assert_eq!(view.animator().added(AnimationKey::FillColor), 1);
        assert!(view.is_animating_fill());
        view.draw();

        view.set_state(CircularState::StopProgress);
        view.draw();
        assert_eq!(view.animator().removed(AnimationKey::FillColor), 1);
        assert_eq!(view.layers().background.fill_color, Some(Color::TRANSPARENT));
    }

    #[test]
    fn completing_progress_then_entering_completed_fills_once() {
        let mut view = view();
        view.set_state(CircularState::StopProgress);
        view.set_progress(1.0);
        view.set_state(CircularState::Completed);
        assert_eq!(view.animator().added(AnimationKey::FillColor), 1);
    }

    #[test]
    fn first_transition_cancels_nothing() {
        let mut view = view();
        view.set_state(CircularState::StopProgress);
        assert!(view.animator().calls.is_empty());
        assert_eq!(view.layers().background.fill_color, Some(Color::TRANSPARENT));
    }

    #[test]
    fn new_view_notifies_renderer() {
        let view = view();
        assert!(view.needs_display());
        assert_eq!(view.renderer().needs_display_requests, 1);
    }

    fn repeated_value() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.0), Just(1.0), 0.01f64..0.99]
    }

    proptest! {
        #[test]
        fn progress_above_one_always_stores_one(value in 1.0f64..1e12) {
            let mut view = view();
            view.set_progress(value);
            prop_assert_eq!(view.progress(), 1.0);
        }

        #[test]
        fn identical_progress_fires_side_effects_once(
            value in repeated_value(),
            repeats in 1usize..8,
        ) {
            let mut view = view();
            view.set_progress(value);
            let calls = view.animator().calls.len();
            let requests = view.renderer().needs_display_requests;

            for _ in 0..repeats {
                view.set_progress(value);
            }
            prop_assert_eq!(view.animator().calls.len(), calls);
            prop_assert_eq!(view.renderer().needs_display_requests, requests);
            prop_assert_eq!(view.progress(), value);
        }
    }

    #[test]
    fn scenario_start_spinning_from_stop() {
        let mut view = view();
        view.set_state(CircularState::StopSpinning);
        assert!(view.is_spinning());
        assert_eq!(view.progress(), 0.0);
        assert_eq!(background_sweep(&view), 1.8 * PI);

        view.draw();
        assert_eq!(background_sweep(&view), 1.8 * PI);
    }

    #[test]
    fn scenario_progress_completes_while_spinning() {
        let mut view = view();
        view.set_state(CircularState::StopSpinning);
        view.set_progress(1.0);
        assert_eq!(view.progress(), 1.0);
        assert_eq!(view.animator().added(AnimationKey::FillColor), 1);
    }

    #[test]
    fn scenario_completed_directly_from_stop() {
        let mut view = view();
        view.set_state(CircularState::Completed);
        assert_eq!(view.progress(), 1.0);
        assert!(!view.is_spinning());
        assert_eq!(view.animator().added(AnimationKey::FillColor), 1);
        assert_eq!(view.animator().added(AnimationKey::Rotation), 0);
    }

    #[test]
    fn completed_stops_a_running_spin() {
        let mut view = view();
        view.set_state(CircularState::StopSpinning);
        view.set_state(CircularState::Completed);
        assert!(!view.is_spinning());
        assert!(!view.animator().is_running(AnimationKey::Rotation));
        assert_eq!(background_sweep(&view), TAU);
    }

    #[test]
    fn scenario_icon_path_without_view() {
        let mut view = view();
        view.set_icon(IconContent::PathOnly(glyph()));
        view.set_state(CircularState::Icon);
        view.draw();

        let icon = &view.layers().icon;
        assert_eq!(icon.path, Some(LayerPath::Custom(glyph())));
        assert_eq!(icon.fill_color, None);
    }

    #[test]
    fn icon_view_gets_arrow_overlay() {
        let mut view = view();
        view.set_icon(IconContent::with_view(glyph()));
        view.set_state(CircularState::Icon);
        view.draw();
        assert_eq!(
            view.layers().icon.path,
            Some(LayerPath::Polygon(down_arrow_path(view.size())))
        );
        assert_eq!(view.layers().icon.fill_color, None);

        view.set_icon(IconContent::ViewWithOverlay {
            path: glyph(),
            arrow: ArrowDirection::Up,
        });
        view.draw();
        assert_eq!(
            view.layers().icon.path,
            Some(LayerPath::Polygon(up_arrow_path(view.size())))
        );
    }

    #[test]
    fn icon_state_without_content_clears_icon_layer() {
        let mut view = view();
        view.draw();
        assert!(view.layers().icon.path.is_some());

        view.set_state(CircularState::Icon);
        view.draw();
        assert!(view.layers().icon.path.is_none());
    }

    #[test]
    fn stop_states_draw_filled_stop_square() {
        let mut view = view();
        view.set_progress_color(Color::BLACK);
        view.draw();
        let icon = &view.layers().icon;
        assert_eq!(
            icon.path,
            Some(LayerPath::Polygon(stop_square_path(view.size())))
        );
        assert_eq!(icon.fill_color, Some(Color::BLACK));
        assert_eq!(icon.stroke_color, Color::BLACK);
    }

    #[test]
    fn completed_draws_tick_on_solid_disc() {
        let mut view = view();
        view.set_tick_color(Color::WHITE);
        view.set_state(CircularState::Completed);
        view.draw();
        let layers = view.layers();
        assert_eq!(
            layers.icon.path,
            Some(LayerPath::Polygon(checkmark_path(view.size())))
        );
        assert_eq!(layers.icon.fill_color, Some(Color::WHITE));
        assert_eq!(layers.background.fill_color, Some(Color::SYSTEM_BLUE));
    }

    #[test]
    fn progress_arc_tracks_progress_in_every_state() {
        let mut view = view();
        view.set_state(CircularState::StopProgress);
        view.set_progress(0.5);
        view.draw();
        let arc = view.layers().progress.path.as_ref().and_then(LayerPath::as_arc);
        assert!(arc.is_some_and(|arc| arc.sweep_angle.radians == PI));
    }

    #[test]
    fn cancelling_fill_restores_background() {
        let mut view = view();
        view.set_state(CircularState::Completed);
        view.set_state(CircularState::StopProgress);
        assert!(!view.is_animating_fill());
        assert_eq!(view.animator().removed(AnimationKey::FillColor), 1);
        assert_eq!(view.layers().background.fill_color, Some(Color::TRANSPARENT));
        // progress is left at 1.0 but no second fill is requested
        assert_eq!(view.progress(), 1.0);
        assert_eq!(view.animator().added(AnimationKey::FillColor), 1);
    }

    #[test]
    fn line_width_floor_and_layer_widths() {
        let mut view = view();
        view.set_line_width(0.2);
        assert_eq!(view.line_width(), 1.0);
        view.set_line_width(3.0);
        assert_eq!(view.layers().background.line_width, 3.0);
        assert_eq!(view.layers().progress.line_width, 6.0);
        assert_eq!(view.layers().icon.line_width, 3.0);
    }

    #[test]
    fn style_setters_do_not_request_redraw() {
        let mut view = view();
        let requests = view.renderer().needs_display_requests;
        view.set_line_width(4.0);
        view.set_progress_color(Color::BLACK);
        view.set_tick_color(Color::BLACK);
        view.set_background_color(None);
        assert_eq!(view.renderer().needs_display_requests, requests);
    }

    #[test]
    fn progress_color_refills_completed_disc() {
        let mut view = view();
        view.set_progress(1.0);
        view.set_progress_color(Color::BLACK);
        assert_eq!(view.layers().background.fill_color, Some(Color::BLACK));
        assert_eq!(view.layers().progress.stroke_color, Color::BLACK);
    }

    #[test]
    fn tint_resets_to_default_blue() {
        let mut view = view();
        view.set_tint_color(Some(Color::BLACK));
        assert_eq!(view.progress_color(), Color::BLACK);
        view.set_tint_color(None);
        assert_eq!(view.progress_color(), Color::SYSTEM_BLUE);
    }

    #[test]
    fn highlight_toggles_opacity() {
        let mut view = view();
        view.set_highlighted(true);
        view.draw();
        view.set_highlighted(false);
        assert_eq!(view.renderer().opacity_changes, vec![0.5, 1.0]);
        assert_eq!(view.renderer().last_frame().map(|frame| frame.opacity), Some(0.5));
    }

    #[test]
    fn draw_if_needed_only_draws_when_dirty() {
        let mut view = view();
        assert!(view.draw_if_needed());
        assert!(!view.draw_if_needed());
        view.set_size(Size::new(80.0, 80.0));
        assert!(view.draw_if_needed());
        assert_eq!(view.renderer().frames.len(), 2);
        assert_eq!(
            view.renderer().last_frame().map(|frame| frame.size),
            Some(Size::new(80.0, 80.0))
        );
    }

    #[test]
    fn render_failures_are_absorbed() {
        let mut view = view();
        view.renderer_mut().fail_next = Some(HostError::SurfaceUnavailable);
        view.draw();
        assert!(view.renderer().frames.is_empty());
        assert!(!view.needs_display());
        view.set_progress(0.3);
        view.draw();
        assert_eq!(view.renderer().frames.len(), 1);
    }

    #[test]
    fn restart_reissues_spin_only_when_spinning() {
        let mut view = view();
        view.restart_animation();
        assert!(view.animator().calls.is_empty());

        view.set_state(CircularState::StopSpinning);
        view.animator_mut().clear();
        view.restart_animation();
        assert!(view.is_spinning());
        assert!(matches!(
            view.animator().calls.as_slice(),
            [
                AnimatorCall::Remove(LayerKind::Background, AnimationKey::Rotation),
                AnimatorCall::Add(_),
            ]
        ));
    }

    #[test]
    fn lifecycle_events_restart_spin() {
        let hub = LifecycleHub::new();
        let mut view = view();
        view.attach_lifecycle(&hub);
        view.set_state(CircularState::StopSpinning);
        view.animator_mut().clear();

        hub.emit(LifecycleEvent::WillMoveToWindow);
        hub.emit(LifecycleEvent::WillEnterForeground);
        assert_eq!(view.process_lifecycle_events(), 2);
        assert_eq!(view.animator().added(AnimationKey::Rotation), 2);
        assert!(view.animator().is_running(AnimationKey::Rotation));

        view.detach_lifecycle();
        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(hub.emit(LifecycleEvent::WillEnterForeground), 0);
        assert_eq!(view.process_lifecycle_events(), 0);
    }

    #[test]
    fn dropping_view_releases_subscription() {
        let hub = LifecycleHub::new();
        {
            let mut view = view();
            view.attach_lifecycle(&hub);
            assert_eq!(hub.subscriber_count(), 1);
        }
        assert_eq!(hub.subscriber_count(), 0);
    }
}
