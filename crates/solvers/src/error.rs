use std::fmt;

use fmisim_core::{SampleError, Status};
use thiserror::Error;

/// The phase of a run in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initialization,
    Stepping,
    EventHandling,
    Termination,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initialization => "initialization",
            Self::Stepping => "stepping",
            Self::EventHandling => "event handling",
            Self::Termination => "termination",
        };
        f.write_str(name)
    }
}

/// Errors that abort a simulation run.
///
/// The instance has been released by the time the caller sees one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// A model call reported a status that invalidates it.
    #[error("{call} returned {status} during {phase}")]
    Status {
        phase: Phase,
        call: &'static str,
        status: Status,
    },

    /// The model kept requesting discrete updates past the configured bound.
    #[error("discrete states did not converge during {phase} after {iterations} iterations")]
    Convergence { phase: Phase, iterations: usize },

    /// The recorder failed to sample the model.
    #[error("sampling failed during {phase}: {source}")]
    Recorder {
        phase: Phase,
        #[source]
        source: SampleError,
    },
}

impl Error {
    /// Returns the phase in which the run failed.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Status { phase, .. }
            | Self::Convergence { phase, .. }
            | Self::Recorder { phase, .. } => *phase,
        }
    }
}

/// Inspects a status, logging warnings and converting failures to errors.
pub(crate) fn check(status: Status, phase: Phase, call: &'static str) -> Result<(), Error> {
    match status {
        Status::Ok => Ok(()),
        Status::Warning => {
            tracing::warn!(%phase, call, "model reported a warning");
            Ok(())
        }
        Status::Discard | Status::Error | Status::Fatal => {
            tracing::error!(%phase, call, %status, "model call failed");
            Err(Error::Status {
                phase,
                call,
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_pass() {
        assert!(check(Status::Ok, Phase::Stepping, "set_time").is_ok());
        assert!(check(Status::Warning, Phase::Stepping, "set_time").is_ok());
    }

    #[test]
    fn failures_name_phase_and_call() {
        let error = check(Status::Discard, Phase::EventHandling, "enter_event_mode")
            .expect_err("discard is a failure");

        assert_eq!(error.phase(), Phase::EventHandling);
        assert_eq!(
            error.to_string(),
            "enter_event_mode returned discard during event handling"
        );
    }
}
