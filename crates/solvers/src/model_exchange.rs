//! Fixed-step model-exchange simulation with event handling.
//!
//! The driver owns the integrator. Each step it reads the continuous states
//! and derivatives, advances them with forward Euler:
//!
//! ```text
//! x_{n+1} = x_n + dx_n * dt
//! ```
//!
//! and then asks whether the step produced an event:
//!
//! - a **time event**, scheduled in advance by the model, which the step is
//!   shortened to land on exactly
//! - a **state event**, a sign change of an event indicator over the step,
//!   placed at the end of the step (no root finding)
//! - a **step event**, requested by the model when the step completes
//!
//! Any event runs a discrete update, sequenced according to the instance's
//! [`Protocol`]. A termination request from the model stops stepping at once.
//!
//! # Observer
//!
//! The observer receives an [`Event`] for the initialized model and after
//! each accepted step, and may return [`Action::StopEarly`].
//!
//! # Example
//!
//! ```ignore
//! use fmisim_solvers::{Config, model_exchange};
//!
//! let config = Config::new(0.0, 1.0, 1e-3)?;
//! let solution = model_exchange::solve_unobserved(&mut model, &config, &mut recorder)?;
//! ```

mod action;
mod discrete_update;
mod event;
mod solution;

pub mod euler;
pub mod event_detector;
pub mod time_stepper;


pub use action::Action;
pub use event::{Event, Triggers};
pub use solution::{EventCounts, Solution, Status};

use fmisim_core::{EventInfo, ModelExchange, Observer, Protocol, Recorder, StepOutcome};

use crate::{
    Config,
    error::{Error, Phase},
    instance::Instance,
};

use discrete_update::Entry;

/// Simulates a model-exchange instance from the start to the stop time.
///
/// # Algorithm
///
/// 1. Instantiate and initialize the model.
/// 2. For [`Protocol::Iterative`], run the initial discrete update, enter
///    continuous-time mode, and sample at the start time.
/// 3. While `time < stop_time`:
///    - Read the continuous states and derivatives.
///    - Propose the next time point, landing on any pending time event.
///    - Set the time, take a forward Euler step, and write the states back.
///    - Report the completed step; stop if the model asks to terminate.
///    - Compare event indicators against the previous step.
///    - On any event, run the discrete update; stop if the model asks to
///      terminate.
///    - Sample the accepted time point and notify the observer.
/// 4. Terminate and release the instance.
///
/// The instance is released on every exit path. After a call reports
/// `Error` or `Fatal`, `terminate` is skipped.
///
/// # Errors
///
/// Returns an error if any model call reports `Discard`, `Error`, or
/// `Fatal`, if discrete states do not converge within
/// [`Config::max_event_iterations`], or if the recorder fails.
pub fn solve<M, R, Obs>(
    model: &mut M,
    config: &Config,
    mut recorder: R,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: ModelExchange + ?Sized,
    R: Recorder<M>,
    Obs: Observer<Event, Action>,
{
    let protocol = model.protocol();
    let start_time = config.start_time();
    let stop_time = config.stop_time();
    let max_iterations = config.max_event_iterations();

    let mut instance = Instance::instantiate(model)?;
    let mut event_info = EventInfo::default();
    instance.initialize(start_time, &mut event_info)?;

    let mut time = start_time;
    let mut steps = 0;
    let mut events = EventCounts::default();

    if event_info.terminate_requested {
        return finish(instance, Status::TerminatedByModel, time, steps, events);
    }

    let mut initial_iterations = 0;
    if protocol == Protocol::Iterative {
        let update = discrete_update::run(
            &mut instance,
            protocol,
            Entry::Initialization,
            &mut event_info,
            max_iterations,
        )?;
        if update.terminate_requested {
            return finish(instance, Status::TerminatedByModel, time, steps, events);
        }
        initial_iterations = update.iterations;
        instance.sample(&mut recorder, Phase::Initialization, time)?;
    }

    let n_x = instance.model().continuous_state_count();
    let n_z = instance.model().event_indicator_count();
    let mut states = vec![0.0; n_x];
    let mut derivatives = vec![0.0; n_x];
    let mut indicators = vec![0.0; n_z];
    let mut previous = vec![0.0; n_z];

    instance.call(Phase::Initialization, "get_event_indicators", |m| {
        m.get_event_indicators(&mut indicators)
    })?;

    let initial = Event {
        step: 0,
        time,
        triggers: Triggers::default(),
        iterations: initial_iterations,
    };
    if let Some(Action::StopEarly) = observer.observe(&initial) {
        return finish(instance, Status::StoppedByObserver, time, steps, events);
    }

    let mut zero_length_steps = 0;

    while time < stop_time {
        instance.call(Phase::Stepping, "get_continuous_states", |m| {
            m.get_continuous_states(&mut states)
        })?;
        instance.call(Phase::Stepping, "get_derivatives", |m| {
            m.get_derivatives(&mut derivatives)
        })?;

        let step = time_stepper::next_step(time, config.step_size(), stop_time, &event_info);

        // Only an overdue time event produces an empty step.
        if step.dt > 0.0 {
            zero_length_steps = 0;
        } else {
            zero_length_steps += 1;
            if zero_length_steps > max_iterations {
                tracing::error!(time, "time event keeps firing without advancing time");
                instance.poison();
                return Err(Error::Convergence {
                    phase: Phase::EventHandling,
                    iterations: zero_length_steps,
                });
            }
        }

        instance.call(Phase::Stepping, "set_time", |m| m.set_time(step.next_time))?;
        euler::step(&mut states, &derivatives, step.dt);
        instance.call(Phase::Stepping, "set_continuous_states", |m| {
            m.set_continuous_states(&states)
        })?;

        let mut outcome = StepOutcome::default();
        instance.call(Phase::Stepping, "completed_integrator_step", |m| {
            m.completed_integrator_step(&mut outcome)
        })?;

        time = step.next_time;
        steps += 1;

        if outcome.terminate_simulation {
            tracing::debug!(time, "model requested termination after step");
            return finish(instance, Status::TerminatedByModel, time, steps, events);
        }

        previous.copy_from_slice(&indicators);
        instance.call(Phase::Stepping, "get_event_indicators", |m| {
            m.get_event_indicators(&mut indicators)
        })?;

        let triggers = Triggers {
            time_event: step.is_time_event,
            state_event: event_detector::state_event(&previous, &indicators),
            step_event: outcome.enter_event_mode,
        };

        let mut iterations = 0;
        if triggers.any() {
            tracing::debug!(time, ?triggers, "handling event");
            events.record(triggers);

            let update = discrete_update::run(
                &mut instance,
                protocol,
                Entry::ContinuousTime,
                &mut event_info,
                max_iterations,
            )?;
            if update.terminate_requested {
                tracing::debug!(time, "model requested termination during event");
                return finish(instance, Status::TerminatedByModel, time, steps, events);
            }
            iterations = update.iterations;

            // Post-event indicators seed the next comparison.
            instance.call(Phase::EventHandling, "get_event_indicators", |m| {
                m.get_event_indicators(&mut indicators)
            })?;
        }

        instance.sample(&mut recorder, Phase::Stepping, time)?;
        tracing::trace!(time, steps, "step accepted");

        let event = Event {
            step: steps,
            time,
            triggers,
            iterations,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(instance, Status::StoppedByObserver, time, steps, events);
        }
    }

    finish(instance, Status::Complete, time, steps, events)
}

/// Simulates a model-exchange instance without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M, R>(model: &mut M, config: &Config, recorder: R) -> Result<Solution, Error>
where
    M: ModelExchange + ?Sized,
    R: Recorder<M>,
{
    solve(model, config, recorder, ())
}

/// Terminates and releases the instance, then summarizes the run.
fn finish<M: ModelExchange + ?Sized>(
    instance: Instance<'_, M>,
    status: Status,
    time: f64,
    steps: usize,
    events: EventCounts,
) -> Result<Solution, Error> {
    instance.finish()?;
    tracing::debug!(?status, time, steps, "model-exchange run finished");

    Ok(Solution {
        status,
        time,
        steps,
        events,
    })
}
