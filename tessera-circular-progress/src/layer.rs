//! The three shape layers composited by the host.

use crate::{color::Color, path::LayerPath};

/// Identifies one of the control's layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// The ring behind everything; filled into a disc on completion.
    Background,
    /// The determinate progress arc.
    Progress,
    /// The stop square, checkmark, arrow, or custom glyph.
    Icon,
}

impl LayerKind {
    /// All layers in paint order.
    pub const ALL: [LayerKind; 3] = [LayerKind::Background, LayerKind::Progress, LayerKind::Icon];
}

/// Stroke cap style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat ends flush with the path end.
    #[default]
    Butt,
    /// Rounded ends.
    Round,
    /// Flat ends extended by half the line width.
    Square,
}

/// Fill rule used for glyph interiors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Non-zero winding.
    #[default]
    NonZero,
    /// Even-odd.
    EvenOdd,
}

/// Style and geometry of a single layer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualLayer {
    /// Stroke color.
    pub stroke_color: Color,
    /// Fill color; `None` means no fill.
    pub fill_color: Option<Color>,
    /// Stroke width.
    pub line_width: f32,
    /// Stroke cap.
    pub line_cap: LineCap,
    /// Fill rule.
    pub fill_rule: FillRule,
    /// Latest generated geometry, `None` when the layer draws nothing.
    pub path: Option<LayerPath>,
}

impl VisualLayer {
    fn new(stroke_color: Color, line_width: f32, line_cap: LineCap) -> Self {
        Self {
            stroke_color,
            fill_color: None,
            line_width,
            line_cap,
            fill_rule: FillRule::NonZero,
            path: None,
        }
    }
}

/// The control's layers.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSet {
    /// Background ring.
    pub background: VisualLayer,
    /// Progress arc.
    pub progress: VisualLayer,
    /// Icon glyph.
    pub icon: VisualLayer,
}

impl LayerSet {
    /// Creates the layers with their base styles.
    ///
    /// The progress arc is stroked twice as wide as the ring so it reads as
    /// a filled band inside it.
    pub fn new(progress_color: Color, background_fill: Option<Color>, line_width: f32) -> Self {
        let mut background = VisualLayer::new(progress_color, line_width, LineCap::Round);
        background.fill_color = background_fill;
        Self {
            background,
            progress: VisualLayer::new(progress_color, line_width * 2.0, LineCap::Square),
            icon: VisualLayer::new(progress_color, line_width, LineCap::Butt),
        }
    }

    /// Returns the layer of the given kind.
    pub fn get(&self, kind: LayerKind) -> &VisualLayer {
        match kind {
            LayerKind::Background => &self.background,
            LayerKind::Progress => &self.progress,
            LayerKind::Icon => &self.icon,
        }
    }

    /// Applies a new base line width to every layer.
    pub(crate) fn set_line_width(&mut self, line_width: f32) {
        self.background.line_width = line_width;
        self.progress.line_width = line_width * 2.0;
        self.icon.line_width = line_width;
    }

    /// Restrokes every layer with the progress color.
    pub(crate) fn set_stroke_color(&mut self, color: Color) {
        self.background.stroke_color = color;
        self.progress.stroke_color = color;
        self.icon.stroke_color = color;
    }

    /// Iterates the layers in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerKind, &VisualLayer)> {
        LayerKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
