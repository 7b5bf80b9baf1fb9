use crate::{EventInfo, Protocol, Status, StepOutcome};

/// Identifies a variable within a model instance.
pub type ValueReference = u32;

/// Lifecycle and value access shared by every kind of model instance.
///
/// An adapter wraps exactly one model instance. Calls must be issued in the
/// order the calling convention prescribes; the simulation loops take the
/// adapter by `&mut` for the whole run, so calls are never interleaved or
/// reentrant.
///
/// Every call except [`release`](Self::release) reports a [`Status`], and
/// callers must inspect it. Buffers passed to getters are owned by the
/// caller and sized by it.
pub trait ModelAdapter {
    /// Creates the model instance.
    fn instantiate(&mut self) -> Status;

    /// Informs the instance of the experiment's start time.
    fn setup_experiment(&mut self, start_time: f64) -> Status;

    /// Enters initialization mode.
    fn enter_initialization_mode(&mut self) -> Status;

    /// Leaves initialization mode.
    ///
    /// Adapters for the single-shot protocol report their initial event
    /// information here; others may leave `event_info` untouched.
    fn exit_initialization_mode(&mut self, event_info: &mut EventInfo) -> Status;

    /// Ends the simulation for this instance.
    fn terminate(&mut self) -> Status;

    /// Frees the instance. No call may follow.
    fn release(&mut self);

    /// Reads real values for the given references into `values`.
    fn get_real(&mut self, references: &[ValueReference], values: &mut [f64]) -> Status;

    /// Reads integer values for the given references into `values`.
    fn get_integer(&mut self, references: &[ValueReference], values: &mut [i32]) -> Status;

    /// Reads boolean values for the given references into `values`.
    fn get_boolean(&mut self, references: &[ValueReference], values: &mut [bool]) -> Status;
}

/// A model instance whose continuous states are integrated by the driver.
pub trait ModelExchange: ModelAdapter {
    /// The discrete-update protocol this instance follows.
    fn protocol(&self) -> Protocol;

    /// Number of continuous states (`n_x`). Constant for the run.
    fn continuous_state_count(&self) -> usize;

    /// Number of event indicators (`n_z`). Constant for the run.
    fn event_indicator_count(&self) -> usize;

    /// Sets the independent variable.
    fn set_time(&mut self, time: f64) -> Status;

    /// Reads the continuous states into `states`.
    fn get_continuous_states(&mut self, states: &mut [f64]) -> Status;

    /// Writes new continuous states.
    fn set_continuous_states(&mut self, states: &[f64]) -> Status;

    /// Reads the state derivatives into `derivatives`.
    fn get_derivatives(&mut self, derivatives: &mut [f64]) -> Status;

    /// Reads the event indicators into `indicators`.
    fn get_event_indicators(&mut self, indicators: &mut [f64]) -> Status;

    /// Reports that an integrator step has completed.
    fn completed_integrator_step(&mut self, outcome: &mut StepOutcome) -> Status;

    /// Re-evaluates the discrete states and refreshes `event_info`.
    ///
    /// For [`Protocol::SingleShot`] this is the atomic event update. For
    /// [`Protocol::Iterative`] it is one round of the repeatable update.
    fn update_discrete_states(&mut self, event_info: &mut EventInfo) -> Status;

    /// Enters event mode. Only used by [`Protocol::Iterative`].
    fn enter_event_mode(&mut self) -> Status {
        Status::Ok
    }

    /// Enters continuous-time mode. Only used by [`Protocol::Iterative`].
    fn enter_continuous_time_mode(&mut self) -> Status {
        Status::Ok
    }
}

/// A model instance that advances its own state over a communication step.
pub trait CoSimulation: ModelAdapter {
    /// Advances the instance from `current_time` by `step_size`.
    fn do_step(&mut self, current_time: f64, step_size: f64) -> Status;
}
