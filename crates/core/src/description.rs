use serde::{Deserialize, Serialize};

use crate::{Protocol, ValueReference};

/// Read-only metadata describing a packaged model.
///
/// Parsing the model's own metadata format is the binding layer's job. This
/// type only carries what the simulation driver consumes, and derives serde
/// so callers can load it from any format serde supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescription {
    /// Version of the calling convention, such as `"1.0"` or `"2.0"`.
    pub fmi_version: String,

    pub model_name: String,

    /// The model provides a model-exchange interface.
    #[serde(default)]
    pub model_exchange: bool,

    /// The model provides a co-simulation interface.
    #[serde(default)]
    pub co_simulation: bool,

    #[serde(default)]
    pub default_experiment: Option<DefaultExperiment>,

    #[serde(default)]
    pub variables: Vec<ScalarVariable>,
}

impl ModelDescription {
    /// Returns the discrete-update protocol implied by the version.
    ///
    /// Returns `None` for versions this driver does not support.
    #[must_use]
    pub fn protocol(&self) -> Option<Protocol> {
        match self.fmi_version.split('.').next() {
            Some("1") => Some(Protocol::SingleShot),
            Some("2") => Some(Protocol::Iterative),
            _ => None,
        }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&ScalarVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Iterates over the variables with [`Causality::Output`].
    pub fn outputs(&self) -> impl Iterator<Item = &ScalarVariable> {
        self.variables
            .iter()
            .filter(|v| v.causality == Causality::Output)
    }
}

/// The experiment window suggested by the model author.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultExperiment {
    pub start_time: Option<f64>,
    pub stop_time: Option<f64>,
    pub step_size: Option<f64>,
}

/// A single named variable of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarVariable {
    pub name: String,
    pub value_reference: ValueReference,
    #[serde(default)]
    pub causality: Causality,
    pub kind: VariableKind,
}

/// How a variable is visible from outside the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Causality {
    Parameter,
    CalculatedParameter,
    Input,
    Output,
    #[default]
    Local,
    Independent,
}

/// The value type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableKind {
    Real,
    Integer,
    Boolean,
    String,
    Enumeration,
}
