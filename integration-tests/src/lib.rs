//! A packaged decay model `dx/dt = -x` for end-to-end tests.
//!
//! Both interfaces are provided. Every lifecycle call made by any instance is
//! appended to a shared log so tests can check the sequence after a run.

use std::{cell::RefCell, rc::Rc};

use fmisim::{
    CoSimulation, EventInfo, Fmu, ModelAdapter, ModelDescription, ModelExchange, Protocol, Status,
    StepOutcome,
};
use fmisim_core::{Causality, ScalarVariable, ValueReference, VariableKind};
use thiserror::Error;

type CallLog = Rc<RefCell<Vec<&'static str>>>;

#[derive(Debug, Error)]
#[error("interface is not available")]
pub struct Unavailable;

pub struct Decay {
    pub description: ModelDescription,

    /// Creating an instance fails.
    pub unavailable: bool,

    /// `do_step` reports this status.
    pub failing_step: Option<Status>,

    /// Overrides the protocol implied by the description.
    pub instance_protocol: Option<Protocol>,

    log: CallLog,
}

impl Decay {
    /// Outputs `x` (real), `updates` (integer), and `positive` (boolean),
    /// plus a real parameter `k`.
    #[must_use]
    pub fn new(fmi_version: &str) -> Self {
        let variable = |name: &str, value_reference, causality, kind| ScalarVariable {
            name: name.to_string(),
            value_reference,
            causality,
            kind,
        };

        Self {
            description: ModelDescription {
                fmi_version: fmi_version.to_string(),
                model_name: "decay".to_string(),
                model_exchange: true,
                co_simulation: true,
                default_experiment: None,
                variables: vec![
                    variable("x", 0, Causality::Output, VariableKind::Real),
                    variable("updates", 1, Causality::Output, VariableKind::Integer),
                    variable("positive", 2, Causality::Output, VariableKind::Boolean),
                    variable("k", 3, Causality::Parameter, VariableKind::Real),
                ],
            },
            unavailable: false,
            failing_step: None,
            instance_protocol: None,
            log: CallLog::default(),
        }
    }

    /// Calls made so far by every instance of this model.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }

    fn instance(&self) -> Result<Instance, Unavailable> {
        if self.unavailable {
            return Err(Unavailable);
        }

        let protocol = self
            .instance_protocol
            .or_else(|| self.description.protocol())
            .unwrap_or(Protocol::Iterative);

        Ok(Instance {
            protocol,
            x: 1.0,
            updates: 0,
            failing_step: self.failing_step,
            log: Rc::clone(&self.log),
        })
    }
}

impl Fmu for Decay {
    type ModelExchange = Instance;
    type CoSimulation = Instance;
    type Error = Unavailable;

    fn description(&self) -> &ModelDescription {
        &self.description
    }

    fn model_exchange(&self) -> Result<Instance, Unavailable> {
        self.instance()
    }

    fn co_simulation(&self) -> Result<Instance, Unavailable> {
        self.instance()
    }
}

pub struct Instance {
    protocol: Protocol,
    x: f64,
    updates: i32,
    failing_step: Option<Status>,
    log: CallLog,
}

impl Instance {
    fn log(&self, call: &'static str) -> Status {
        self.log.borrow_mut().push(call);
        Status::Ok
    }
}

impl ModelAdapter for Instance {
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
        self.log("release");
    }

    fn get_real(&mut self, references: &[ValueReference], values: &mut [f64]) -> Status {
        for (value, vr) in values.iter_mut().zip(references) {
            *value = if *vr == 0 { self.x } else { 1.0 };
        }
        Status::Ok
    }

    fn get_integer(&mut self, _references: &[ValueReference], values: &mut [i32]) -> Status {
        values.fill(self.updates);
        Status::Ok
    }

    fn get_boolean(&mut self, _references: &[ValueReference], values: &mut [bool]) -> Status {
        values.fill(self.x > 0.0);
        Status::Ok
    }
}

impl ModelExchange for Instance {
    fn protocol(&self) -> Protocol {
        self.protocol
    }

    fn continuous_state_count(&self) -> usize {
        1
    }

    fn event_indicator_count(&self) -> usize {
        0
    }

    fn set_time(&mut self, _time: f64) -> Status {
        Status::Ok
    }

    fn get_continuous_states(&mut self, states: &mut [f64]) -> Status {
        states[0] = self.x;
        Status::Ok
    }

    fn set_continuous_states(&mut self, states: &[f64]) -> Status {
        self.x = states[0];
        Status::Ok
    }

    fn get_derivatives(&mut self, derivatives: &mut [f64]) -> Status {
        derivatives[0] = -self.x;
        Status::Ok
    }

    fn get_event_indicators(&mut self, _indicators: &mut [f64]) -> Status {
        Status::Ok
    }

    fn completed_integrator_step(&mut self, _outcome: &mut StepOutcome) -> Status {
        Status::Ok
    }

    fn update_discrete_states(&mut self, _event_info: &mut EventInfo) -> Status {
        self.updates += 1;
        self.log("update_discrete_states")
    }
}

impl CoSimulation for Instance {
    fn do_step(&mut self, _current_time: f64, step_size: f64) -> Status {
        self.log("do_step");
        if let Some(status) = self.failing_step {
            return status;
        }
        self.x *= (-step_size).exp();
        Status::Ok
    }
}
