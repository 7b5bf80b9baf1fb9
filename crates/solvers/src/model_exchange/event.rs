/// What triggered a discrete update after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triggers {
    /// The step ended on a scheduled time event.
    pub time_event: bool,

    /// An event indicator changed sign over the step.
    pub state_event: bool,

    /// The model asked for an update when the step completed.
    pub step_event: bool,
}

impl Triggers {
    /// Returns `true` if any trigger fired.
    #[must_use]
    pub fn any(&self) -> bool {
        self.time_event || self.state_event || self.step_event
    }
}

/// Event emitted by the model-exchange loop for each accepted time point.
///
/// Step 0 is the initialized model at the start time.
/// Steps 1..N are emitted after each accepted integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial point).
    pub step: usize,

    /// Time of the accepted point.
    pub time: f64,

    /// What triggered a discrete update at this point, if anything.
    pub triggers: Triggers,

    /// Number of discrete-update rounds performed at this point.
    pub iterations: usize,
}
