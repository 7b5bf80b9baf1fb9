/// Event information reported by a model instance.
///
/// The adapter refreshes this record when initialization completes and on
/// every discrete update. The simulation loops read it to schedule time
/// events and to decide when discrete states have converged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventInfo {
    /// Time of the next scheduled time event, if one is pending.
    pub next_event_time: Option<f64>,

    /// The model needs another discrete update before time can advance.
    pub discrete_states_needed: bool,

    /// The model asks the driver to end the run.
    pub terminate_requested: bool,

    /// The discrete update changed the continuous states.
    ///
    /// Informational only: the fixed-step loop reads the states back before
    /// every step whether or not this is set.
    pub values_of_continuous_states_changed: bool,

    /// The discrete update changed the nominal values of the continuous states.
    ///
    /// Informational only: forward Euler does not scale by nominals.
    pub nominals_of_continuous_states_changed: bool,
}

/// What a model reports after the driver completes an integrator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The model needs a discrete update (a step event).
    pub enter_event_mode: bool,

    /// The model asks the driver to end the run.
    pub terminate_simulation: bool,
}
