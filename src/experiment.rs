use fmisim_core::ModelDescription;
use fmisim_solvers::{Config, ConfigError};
use serde::{Deserialize, Serialize};

use crate::Interface;

/// Settings for one simulation run.
///
/// Every field is optional. Unset times fall back to the model's default
/// experiment and then to built-in defaults, so an empty experiment is a
/// valid configuration. Loads from any serde format:
///
/// ```toml
/// stop_time = 3.0
/// interface = "model-exchange"
/// outputs = ["h", "v"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Experiment {
    pub start_time: Option<f64>,
    pub stop_time: Option<f64>,
    pub step_size: Option<f64>,

    /// Interface to simulate with; chosen automatically when unset.
    pub interface: Option<Interface>,

    /// Variables to record; every output is recorded when unset.
    pub outputs: Option<Vec<String>>,

    pub max_event_iterations: Option<usize>,
}

impl Experiment {
    /// Resolves the time window and limits against a model description.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved window or limits are invalid.
    pub fn resolve(&self, description: &ModelDescription) -> Result<Config, ConfigError> {
        let defaults = description.default_experiment.unwrap_or_default();

        let start_time = self.start_time.or(defaults.start_time).unwrap_or(0.0);
        let stop_time = self.stop_time.or(defaults.stop_time).unwrap_or(1.0);
        let step_size = self
            .step_size
            .or(defaults.step_size)
            .unwrap_or_else(|| default_step_size(start_time, stop_time));

        let config = Config::new(start_time, stop_time, step_size)?;
        match self.max_event_iterations {
            Some(n) => config.with_max_event_iterations(n),
            None => Ok(config),
        }
    }
}

/// Picks a step size about a thousandth of the window, rounded to a power
/// of ten.
fn default_step_size(start_time: f64, stop_time: f64) -> f64 {
    let span = stop_time - start_time;
    if span > 0.0 {
        10_f64.powf(span.log10().round() - 3.0)
    } else {
        1e-3
    }
}
