//! Fixed-step co-simulation.
//!
//! The instance integrates itself; the driver only samples outputs and asks
//! for one communication step at a time. Samples are taken before each step,
//! so the stop time itself is not sampled.
//!
//! Communication points are computed as `start_time + n * step_size` rather
//! than by repeated addition, so long runs do not accumulate rounding drift.

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use fmisim_core::{CoSimulation, EventInfo, Observer, Recorder};

use crate::{
    Config,
    error::{Error, Phase},
    instance::Instance,
};

/// Simulates a co-simulation instance from the start to the stop time.
///
/// Repeats `sample(time)`, `do_step(time, step_size)` until the next
/// communication point reaches the stop time. The instance is released on
/// every exit path.
///
/// # Errors
///
/// Returns an error if any call reports `Discard`, `Error`, or `Fatal`, or
/// if the recorder fails.
pub fn solve<M, R, Obs>(
    model: &mut M,
    config: &Config,
    mut recorder: R,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: CoSimulation + ?Sized,
    R: Recorder<M>,
    Obs: Observer<Event, Action>,
{
    let start_time = config.start_time();
    let step_size = config.step_size();

    let mut instance = Instance::instantiate(model)?;
    instance.initialize(start_time, &mut EventInfo::default())?;

    let mut time = start_time;
    let mut steps = 0;
    let mut status = Status::Complete;

    while time < config.stop_time() {
        instance.sample(&mut recorder, Phase::Stepping, time)?;
        instance.call(Phase::Stepping, "do_step", |m| m.do_step(time, step_size))?;

        steps += 1;
        #[allow(clippy::cast_precision_loss)]
        let next_time = start_time + steps as f64 * step_size;
        tracing::trace!(time, next_time, "communication step completed");

        let event = Event {
            step: steps,
            time,
            next_time,
        };
        time = next_time;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }
    }

    instance.finish()?;
    tracing::debug!(?status, time, steps, "co-simulation run finished");

    Ok(Solution {
        status,
        time,
        steps,
    })
}

/// Simulates a co-simulation instance without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M, R>(model: &mut M, config: &Config, recorder: R) -> Result<Solution, Error>
where
    M: CoSimulation + ?Sized,
    R: Recorder<M>,
{
    solve(model, config, recorder, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use fmisim_core::Status as CallStatus;

    use crate::test_utils::MockSlave;

    fn config(start: f64, stop: f64, step: f64) -> Config {
        Config::new(start, stop, step).expect("valid config")
    }

    #[test]
    fn samples_before_each_step() {
        let mut slave = MockSlave::new();
        let mut times = Vec::new();

        let solution =
            solve_unobserved(&mut slave, &config(0.0, 1.0, 0.25), &mut times).expect("should solve");

        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 4);
        assert_eq!(solution.time, 1.0);
        assert_eq!(
            slave.steps,
            vec![(0.0, 0.25), (0.25, 0.25), (0.5, 0.25), (0.75, 0.25)]
        );
        assert_relative_eq!(slave.state(), (-1.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn call_sequence() {
        let mut slave = MockSlave::new();

        solve_unobserved(&mut slave, &config(0.0, 0.5, 0.25), ()).expect("should solve");

        assert_eq!(
            slave.calls(),
            &[
                "instantiate",
                "setup_experiment",
                "enter_initialization_mode",
                "exit_initialization_mode",
                "do_step",
                "do_step",
                "terminate",
                "release",
            ]
        );
    }

    #[test]
    fn communication_points_are_step_multiples() {
        let mut slave = MockSlave::new();
        let mut times = Vec::new();

        solve_unobserved(&mut slave, &config(0.0, 1.0, 0.1), &mut times).expect("should solve");

        assert_eq!(times.len(), 10);
        for (n, time) in times.iter().enumerate() {
            assert_eq!(*time, n as f64 * 0.1);
        }
    }

    #[test]
    fn discard_aborts_and_releases() {
        let mut slave = MockSlave::new().failing("do_step", CallStatus::Discard);

        let error = solve_unobserved(&mut slave, &config(0.0, 1.0, 0.25), ()).expect_err("discard");

        assert_eq!(error.phase(), Phase::Stepping);
        assert_eq!(slave.calls()[slave.calls().len() - 2..], ["terminate", "release"]);
    }

    #[test]
    fn fatal_skips_terminate() {
        let mut slave = MockSlave::new().failing("do_step", CallStatus::Fatal);

        solve_unobserved(&mut slave, &config(0.0, 1.0, 0.25), ()).expect_err("fatal");

        assert_eq!(slave.calls()[slave.calls().len() - 2..], ["do_step", "release"]);
    }

    #[test]
    fn observer_can_stop_early() {
        let mut slave = MockSlave::new();

        let solution = solve(
            &mut slave,
            &config(0.0, 1.0, 0.25),
            (),
            |event: &Event| (event.step == 2).then_some(Action::StopEarly),
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 2);
        assert_eq!(solution.time, 0.5);
    }
}
