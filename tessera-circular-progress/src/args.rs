//! Construction arguments for [`CircularProgressView`](crate::CircularProgressView).

use derive_builder::Builder;

use crate::{color::Color, icon::IconContent, path::Size, state::CircularState};

/// Default diameter of the control.
pub const DEFAULT_DIAMETER: f32 = 40.0;
/// Default line width as a fraction of the control width.
pub const DEFAULT_LINE_WIDTH_RATIO: f32 = 0.025;
/// Line widths below this are raised to it.
pub const MIN_LINE_WIDTH: f32 = 1.0;

/// Arguments for creating a circular progress view.
///
/// Every field has a default, so `CircularProgressArgsBuilder::default()`
/// followed by the setters you need always builds.
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned", default)]
pub struct CircularProgressArgs {
    /// Bounds of the control.
    pub size: Size,
    /// Stroke width of the ring; derived from the width when omitted.
    #[builder(setter(strip_option))]
    pub line_width: Option<f32>,
    /// Color of the ring, the progress arc and the stop square.
    pub progress_color: Color,
    /// Fill color of the completion checkmark.
    pub tick_color: Color,
    /// Background of the container; the ring's fill whenever it is not
    /// completed. `None` leaves the ring unfilled.
    pub background_color: Option<Color>,
    /// Initial state, entered with its regular side effects.
    pub state: CircularState,
    /// Glyph for the icon state.
    pub icon: IconContent,
}

impl CircularProgressArgs {
    /// The line width the view starts with.
    pub fn resolved_line_width(&self) -> f32 {
        self.line_width
            .unwrap_or(self.size.width * DEFAULT_LINE_WIDTH_RATIO)
            .max(MIN_LINE_WIDTH)
    }
}

impl Default for CircularProgressArgs {
    fn default() -> Self {
        Self {
            size: Size::new(DEFAULT_DIAMETER, DEFAULT_DIAMETER),
            line_width: None,
            progress_color: Color::SYSTEM_BLUE,
            tick_color: Color::WHITE,
            background_color: Some(Color::TRANSPARENT),
            state: CircularState::Stop,
            icon: IconContent::None,
        }
    }
}
