use std::fmt;

use fmisim_core::ModelDescription;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Which of a model's interfaces drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interface {
    /// The driver integrates the model's continuous states.
    ModelExchange,

    /// The model advances itself over communication steps.
    CoSimulation,
}

impl Interface {
    /// Chooses the interface to simulate `description` with.
    ///
    /// A requested interface is used if the model provides it. Otherwise
    /// co-simulation is preferred over model exchange.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested interface is not provided, or if the
    /// model provides neither.
    pub fn select(
        description: &ModelDescription,
        requested: Option<Interface>,
    ) -> Result<Self, Error> {
        match requested {
            Some(interface) if interface.is_provided_by(description) => Ok(interface),
            Some(interface) => Err(Error::UnsupportedInterface(interface)),
            None if description.co_simulation => Ok(Self::CoSimulation),
            None if description.model_exchange => Ok(Self::ModelExchange),
            None => Err(Error::NoInterface),
        }
    }

    fn is_provided_by(self, description: &ModelDescription) -> bool {
        match self {
            Self::ModelExchange => description.model_exchange,
            Self::CoSimulation => description.co_simulation,
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelExchange => f.write_str("model exchange"),
            Self::CoSimulation => f.write_str("co-simulation"),
        }
    }
}
