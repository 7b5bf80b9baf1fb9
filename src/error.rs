use fmisim_core::Protocol;
use fmisim_recorder::LayoutError;
use fmisim_solvers::ConfigError;
use thiserror::Error;

use crate::Interface;

/// Errors returned by [`simulate`](crate::simulate).
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported fmi version `{0}`")]
    UnsupportedVersion(String),

    #[error("model does not provide a {0} interface")]
    UnsupportedInterface(Interface),

    #[error("model provides neither model exchange nor co-simulation")]
    NoInterface,

    #[error("invalid experiment: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid output selection: {0}")]
    Layout(#[from] LayoutError),

    #[error("failed to create {interface} instance")]
    Instantiation {
        interface: Interface,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("model description implies {description:?} updates but the instance uses {instance:?}")]
    ProtocolMismatch {
        description: Protocol,
        instance: Protocol,
    },

    #[error(transparent)]
    Solver(#[from] fmisim_solvers::Error),
}
