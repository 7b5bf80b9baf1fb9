//! Scripted model instances for exercising the simulation loops.

use fmisim_core::{
    CoSimulation, EventInfo, ModelAdapter, ModelExchange, Protocol, Status, StepOutcome,
    ValueReference,
};

/// Value reference of the first continuous state, as a real output.
pub(crate) const STATE_REF: ValueReference = 0;

/// Value reference of the discrete-update counter, as an integer output.
pub(crate) const UPDATES_REF: ValueReference = 1;

/// Value reference of `x > 0`, as a boolean output.
pub(crate) const POSITIVE_REF: ValueReference = 2;

/// A model-exchange instance with linear dynamics `dx/dt = rate * x`.
///
/// Event behavior is scripted through the builder methods. Every call is
/// logged so tests can assert on the exact call sequence.
#[derive(Debug)]
pub(crate) struct MockModel {
    protocol: Protocol,
    rate: f64,
    time: f64,
    states: Vec<f64>,
    crossing: Option<f64>,
    time_events: Vec<f64>,
    time_events_stick: bool,
    reset_to: Option<f64>,
    updates_to_converge: usize,
    pending_updates: usize,
    terminate_on_update: bool,
    terminate_after: Option<f64>,
    step_events_at: Vec<f64>,
    failure: Option<(&'static str, Status)>,
    update_calls: i32,
    calls: Vec<&'static str>,
}

impl MockModel {
    /// One state decaying from 1.0 with `dx/dt = -x` and no events.
    pub(crate) fn decay(protocol: Protocol) -> Self {
        Self {
            protocol,
            rate: -1.0,
            time: 0.0,
            states: vec![1.0],
            crossing: None,
            time_events: Vec::new(),
            time_events_stick: false,
            reset_to: None,
            updates_to_converge: 1,
            pending_updates: 0,
            terminate_on_update: false,
            terminate_after: None,
            step_events_at: Vec::new(),
            failure: None,
            update_calls: 0,
            calls: Vec::new(),
        }
    }

    /// Replaces the initial states.
    pub(crate) fn with_states(mut self, states: Vec<f64>) -> Self {
        self.states = states;
        self
    }

    /// Sets the growth rate of every state.
    pub(crate) fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Adds one event indicator `x[0] - level`.
    pub(crate) fn crossing(mut self, level: f64) -> Self {
        self.crossing = Some(level);
        self
    }

    /// Schedules time events, reported one at a time in ascending order.
    pub(crate) fn time_events(mut self, mut times: Vec<f64>) -> Self {
        times.sort_by(f64::total_cmp);
        self.time_events = times;
        self
    }

    /// Keeps reporting a time event at `time` after it has been handled.
    pub(crate) fn stuck_time_event(mut self, time: f64) -> Self {
        self.time_events = vec![time];
        self.time_events_stick = true;
        self
    }

    /// Sets the first state to `value` on every discrete update.
    pub(crate) fn resetting_on_update(mut self, value: f64) -> Self {
        self.reset_to = Some(value);
        self
    }

    /// Requires `n` update calls per discrete update.
    pub(crate) fn converging_after(mut self, n: usize) -> Self {
        self.updates_to_converge = n;
        self
    }

    /// Never reports converged discrete states.
    pub(crate) fn never_converging(self) -> Self {
        self.converging_after(usize::MAX)
    }

    /// Requests termination on the first discrete update.
    pub(crate) fn terminating_on_update(mut self) -> Self {
        self.terminate_on_update = true;
        self
    }

    /// Requests termination when a step completes at or after `time`.
    pub(crate) fn terminating_after(mut self, time: f64) -> Self {
        self.terminate_after = Some(time);
        self
    }

    /// Reports a step event when a step completes at one of `times`.
    pub(crate) fn step_events_at(mut self, times: Vec<f64>) -> Self {
        self.step_events_at = times;
        self
    }

    /// Makes every call named `call` report `status`.
    pub(crate) fn failing(mut self, call: &'static str, status: Status) -> Self {
        self.failure = Some((call, status));
        self
    }

    pub(crate) fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    /// Calls issued after the last call named `marker`.
    pub(crate) fn calls_after(&self, marker: &str) -> Vec<&'static str> {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == marker)
            .map_or(0, |i| i + 1);
        self.calls[start..].to_vec()
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub(crate) fn state(&self) -> f64 {
        self.states[0]
    }

    fn log(&mut self, call: &'static str) -> Status {
        self.calls.push(call);
        match self.failure {
            Some((failing, status)) if failing == call => status,
            _ => Status::Ok,
        }
    }

    fn refresh_time_event(&self, event_info: &mut EventInfo) {
        event_info.next_event_time = self.time_events.first().copied();
    }
}

impl ModelAdapter for MockModel {
    fn instantiate(&mut self) -> Status {
        self.log("instantiate")
    }

    fn setup_experiment(&mut self, start_time: f64) -> Status {
        self.time = start_time;
        self.log("setup_experiment")
    }

    fn enter_initialization_mode(&mut self) -> Status {
        self.log("enter_initialization_mode")
    }

    fn exit_initialization_mode(&mut self, event_info: &mut EventInfo) -> Status {
        self.refresh_time_event(event_info);
        self.log("exit_initialization_mode")
    }

    fn terminate(&mut self) -> Status {
        self.log("terminate")
    }

    fn release(&mut self) {
        self.calls.push("release");
    }

    fn get_real(&mut self, references: &[ValueReference], values: &mut [f64]) -> Status {
        for (value, reference) in values.iter_mut().zip(references) {
            *value = match *reference {
                STATE_REF => self.states[0],
                _ => f64::NAN,
            };
        }
        self.log("get_real")
    }

    fn get_integer(&mut self, references: &[ValueReference], values: &mut [i32]) -> Status {
        for (value, reference) in values.iter_mut().zip(references) {
            *value = match *reference {
                UPDATES_REF => self.update_calls,
                _ => 0,
            };
        }
        self.log("get_integer")
    }

    fn get_boolean(&mut self, references: &[ValueReference], values: &mut [bool]) -> Status {
        for (value, reference) in values.iter_mut().zip(references) {
            *value = *reference == POSITIVE_REF && self.states[0] > 0.0;
        }
        self.log("get_boolean")
    }
}

impl ModelExchange for MockModel {
    fn protocol(&self) -> Protocol {
        self.protocol
    }

    fn continuous_state_count(&self) -> usize {
        self.states.len()
    }

    fn event_indicator_count(&self) -> usize {
        usize::from(self.crossing.is_some())
    }

    fn set_time(&mut self, time: f64) -> Status {
        self.time = time;
        self.log("set_time")
    }

    fn get_continuous_states(&mut self, states: &mut [f64]) -> Status {
        states.copy_from_slice(&self.states);
        self.log("get_continuous_states")
    }

    fn set_continuous_states(&mut self, states: &[f64]) -> Status {
        self.states.copy_from_slice(states);
        self.log("set_continuous_states")
    }

    fn get_derivatives(&mut self, derivatives: &mut [f64]) -> Status {
        for (dx, x) in derivatives.iter_mut().zip(&self.states) {
            *dx = self.rate * x;
        }
        self.log("get_derivatives")
    }

    fn get_event_indicators(&mut self, indicators: &mut [f64]) -> Status {
        if let Some(level) = self.crossing {
            indicators[0] = self.states[0] - level;
        }
        self.log("get_event_indicators")
    }

    fn completed_integrator_step(&mut self, outcome: &mut StepOutcome) -> Status {
        let time = self.time;
        outcome.enter_event_mode = self.step_events_at.iter().any(|t| *t == time);
        outcome.terminate_simulation = self.terminate_after.is_some_and(|t| time >= t);
        self.log("completed_integrator_step")
    }

    fn update_discrete_states(&mut self, event_info: &mut EventInfo) -> Status {
        self.update_calls += 1;

        if self.pending_updates == 0 {
            self.pending_updates = self.updates_to_converge;
        }
        self.pending_updates -= 1;

        let time = self.time;
        if !self.time_events_stick {
            self.time_events.retain(|t| *t > time);
        }
        self.refresh_time_event(event_info);

        if let Some(value) = self.reset_to {
            event_info.values_of_continuous_states_changed = self.states[0] != value;
            self.states[0] = value;
        }

        event_info.discrete_states_needed = self.pending_updates > 0;
        event_info.terminate_requested = self.terminate_on_update;
        self.log("update_discrete_states")
    }

    fn enter_event_mode(&mut self) -> Status {
        self.log("enter_event_mode")
    }

    fn enter_continuous_time_mode(&mut self) -> Status {
        self.log("enter_continuous_time_mode")
    }
}

/// A co-simulation instance that integrates `dx/dt = -x` exactly.
#[derive(Debug)]
pub(crate) struct MockSlave {
    state: f64,
    failure: Option<(&'static str, Status)>,
    pub(crate) steps: Vec<(f64, f64)>,
    calls: Vec<&'static str>,
}

impl MockSlave {
    pub(crate) fn new() -> Self {
        Self {
            state: 1.0,
            failure: None,
            steps: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub(crate) fn failing(mut self, call: &'static str, status: Status) -> Self {
        self.failure = Some((call, status));
        self
    }

    pub(crate) fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    pub(crate) fn state(&self) -> f64 {
        self.state
    }

    fn log(&mut self, call: &'static str) -> Status {
        self.calls.push(call);
        match self.failure {
            Some((failing, status)) if failing == call => status,
            _ => Status::Ok,
        }
    }
}

impl ModelAdapter for MockSlave {
    fn instantiate(&mut self) -> Status {
        self.log("instantiate")
    }

    fn setup_experiment(&mut self, _start_time: f64) -> Status {
        self.log("setup_experiment")
    }

    fn enter_initialization_mode(&mut self) -> Status {
        self.log("enter_initialization_mode")
    }

    fn exit_initialization_mode(&mut self, _event_info: &mut EventInfo) -> Status {
        self.log("exit_initialization_mode")
    }

    fn terminate(&mut self) -> Status {
        self.log("terminate")
    }

    fn release(&mut self) {
        self.calls.push("release");
    }

    fn get_real(&mut self, _references: &[ValueReference], values: &mut [f64]) -> Status {
        values.fill(self.state);
        self.log("get_real")
    }

    fn get_integer(&mut self, _references: &[ValueReference], values: &mut [i32]) -> Status {
        values.fill(0);
        self.log("get_integer")
    }

    fn get_boolean(&mut self, _references: &[ValueReference], values: &mut [bool]) -> Status {
        values.fill(false);
        self.log("get_boolean")
    }
}

impl CoSimulation for MockSlave {
    fn do_step(&mut self, current_time: f64, step_size: f64) -> Status {
        self.state *= (-step_size).exp();
        self.steps.push((current_time, step_size));
        self.log("do_step")
    }
}
