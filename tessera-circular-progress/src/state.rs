//! Visible modes of the control and what entering each one does.

/// The control's visible mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum CircularState {
    /// Idle, showing the stop square over a full ring.
    #[default]
    Stop,
    /// Indeterminate: the gapped ring rotates.
    StopSpinning,
    /// Determinate: the progress arc fills while the stop square stays visible.
    StopProgress,
    /// Finished: a solid disc with a checkmark.
    Completed,
    /// A custom glyph replaces the stop square.
    Icon,
}

impl CircularState {
    /// Every state, in declaration order.
    pub const ALL: [CircularState; 5] = [
        CircularState::Stop,
        CircularState::StopSpinning,
        CircularState::StopProgress,
        CircularState::Completed,
        CircularState::Icon,
    ];

    /// Side effects of entering this state, whatever the previous one was.
    pub fn transition(self) -> Transition {
        TRANSITIONS[self as usize]
    }
}

/// What happens to the spin animation when a state is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinAction {
    /// Start spinning unless already spinning.
    Start,
    /// Stop spinning if spinning.
    Stop,
}

/// What happens to the completion fill animation when a state is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillAction {
    /// Cancel the fill if it is animating and restore the container background.
    Cancel,
    /// Leave the fill untouched.
    Keep,
}

/// Side effects applied when a state is entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Progress value forced on entry; `None` keeps the current value.
    pub progress: Option<f64>,
    /// Spin handling.
    pub spin: SpinAction,
    /// Fill animation handling.
    pub fill: FillAction,
}

/// Indexed by `CircularState as usize`.
const TRANSITIONS: [Transition; 5] = [
    // Stop
    Transition {
        progress: Some(0.0),
        spin: SpinAction::Stop,
        fill: FillAction::Cancel,
    },
    // StopSpinning
    Transition {
        progress: Some(0.0),
        spin: SpinAction::Start,
        fill: FillAction::Cancel,
    },
    // StopProgress
    Transition {
        progress: None,
        spin: SpinAction::Stop,
        fill: FillAction::Cancel,
    },
    // Completed
    Transition {
        progress: Some(1.0),
        spin: SpinAction::Stop,
        fill: FillAction::Keep,
    },
    // Icon
    Transition {
        progress: Some(0.0),
        spin: SpinAction::Stop,
        fill: FillAction::Cancel,
    },
];
