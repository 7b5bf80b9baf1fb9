use super::Triggers;

/// Indicates how the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the stop time.
    Complete,

    /// The model requested termination before the stop time.
    TerminatedByModel,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Number of discrete updates triggered by each kind of event.
///
/// A single update can have several triggers, so the counts may add up to
/// more than the number of updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventCounts {
    pub time_events: usize,
    pub state_events: usize,
    pub step_events: usize,
}

impl EventCounts {
    pub(crate) fn record(&mut self, triggers: Triggers) {
        self.time_events += usize::from(triggers.time_event);
        self.state_events += usize::from(triggers.state_event);
        self.step_events += usize::from(triggers.step_event);
    }
}

/// The result of a model-exchange run.
///
/// Sampled values live in the recorder; this only summarizes the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run ended.
    pub status: Status,

    /// Model time when the run ended.
    pub time: f64,

    /// Number of accepted integration steps.
    pub steps: usize,

    /// Events handled during the run.
    pub events: EventCounts,
}
