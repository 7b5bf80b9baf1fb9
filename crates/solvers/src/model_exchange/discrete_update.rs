use fmisim_core::{EventInfo, ModelExchange, Protocol};

use crate::{
    error::{Error, Phase},
    instance::Instance,
};

/// Where a discrete update starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    /// Right after initialization; the instance is already in event mode.
    Initialization,

    /// From continuous-time mode, after an integration step.
    ContinuousTime,
}

impl Entry {
    fn phase(self) -> Phase {
        match self {
            Self::Initialization => Phase::Initialization,
            Self::ContinuousTime => Phase::EventHandling,
        }
    }
}

/// Outcome of a converged discrete update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Update {
    /// Number of update calls issued.
    pub(crate) iterations: usize,

    /// The model asked to end the run; the instance was left in event mode.
    pub(crate) terminate_requested: bool,
}

/// Re-evaluates the discrete states until they converge.
///
/// On success `event_info.discrete_states_needed` is `false`, unless the
/// model requested termination. More than `max_iterations` update calls is a
/// convergence failure.
pub(crate) fn run<M>(
    instance: &mut Instance<'_, M>,
    protocol: Protocol,
    entry: Entry,
    event_info: &mut EventInfo,
    max_iterations: usize,
) -> Result<Update, Error>
where
    M: ModelExchange + ?Sized,
{
    let phase = entry.phase();

    let update = match protocol {
        Protocol::SingleShot => {
            reset_flags(event_info);
            instance.call(phase, "update_discrete_states", |m| {
                m.update_discrete_states(event_info)
            })?;

            if event_info.discrete_states_needed && !event_info.terminate_requested {
                tracing::error!(%phase, "single-shot update left discrete states unconverged");
                instance.poison();
                return Err(Error::Convergence {
                    phase,
                    iterations: 1,
                });
            }

            Update {
                iterations: 1,
                terminate_requested: event_info.terminate_requested,
            }
        }

        Protocol::Iterative => {
            if entry == Entry::ContinuousTime {
                instance.call(phase, "enter_event_mode", |m| m.enter_event_mode())?;
            }

            let mut iterations = 0;
            loop {
                if iterations == max_iterations {
                    tracing::error!(%phase, iterations, "discrete states did not converge");
                    instance.poison();
                    return Err(Error::Convergence { phase, iterations });
                }

                reset_flags(event_info);
                instance.call(phase, "update_discrete_states", |m| {
                    m.update_discrete_states(event_info)
                })?;
                iterations += 1;

                if event_info.terminate_requested || !event_info.discrete_states_needed {
                    break;
                }
            }

            if !event_info.terminate_requested {
                instance.call(phase, "enter_continuous_time_mode", |m| {
                    m.enter_continuous_time_mode()
                })?;
            }

            Update {
                iterations,
                terminate_requested: event_info.terminate_requested,
            }
        }
    };

    tracing::debug!(
        %phase,
        iterations = update.iterations,
        terminate = update.terminate_requested,
        next_event_time = ?event_info.next_event_time,
        states_changed = event_info.values_of_continuous_states_changed,
        "discrete update finished"
    );
    Ok(update)
}

/// Clears the flags each update call must report afresh.
fn reset_flags(event_info: &mut EventInfo) {
    event_info.discrete_states_needed = false;
    event_info.terminate_requested = false;
    event_info.values_of_continuous_states_changed = false;
    event_info.nominals_of_continuous_states_changed = false;
}
