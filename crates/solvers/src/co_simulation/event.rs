/// Event emitted by the co-simulation loop after each communication step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number, starting at 1.
    pub step: usize,

    /// Communication point the step started from.
    pub time: f64,

    /// Communication point the step reached.
    pub next_time: f64,
}
