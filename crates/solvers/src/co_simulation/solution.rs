/// Indicates how the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the stop time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a co-simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run ended.
    pub status: Status,

    /// Communication point reached when the run ended.
    pub time: f64,

    /// Number of completed communication steps.
    pub steps: usize,
}
