//! Fixed-step simulation of packaged hybrid models.
//!
//! [`simulate`] runs one [`Experiment`] against an [`Fmu`], choosing the
//! interface, resolving the time window against the model's defaults, and
//! recording the selected outputs into a [`Table`].
//!
//! The loops themselves live in [`fmisim_solvers`] and can be driven
//! directly with a custom [`Recorder`] or observer.
//!
//! # Example
//!
//! ```ignore
//! let experiment: Experiment = toml::from_str(r#"stop_time = 3.0"#)?;
//! let table = fmisim::simulate(&fmu, &experiment)?;
//! for (time, h) in table.times().zip(table.column("h").unwrap()) {
//!     println!("{time}\t{}", h.as_f64());
//! }
//! ```

mod error;
mod experiment;
mod fmu;
mod interface;

pub use error::Error;
pub use experiment::Experiment;
pub use fmu::Fmu;
pub use interface::Interface;

pub use fmisim_core::{
    CoSimulation, EventInfo, ModelAdapter, ModelDescription, ModelExchange, Protocol, Recorder,
    Status, StepOutcome,
};
pub use fmisim_recorder::{Column, ColumnKind, OutputRecorder, Row, Table, Value};
pub use fmisim_solvers::{Config, co_simulation, model_exchange};

/// Simulates `fmu` according to `experiment` and returns the recorded outputs.
///
/// The model instance is created, run, and released within this call.
///
/// # Errors
///
/// Returns an error if the model's version or interfaces are unsupported,
/// the experiment or output selection is invalid, or the binding cannot
/// create a matching instance. Failures of the simulation loop itself are
/// returned as [`Error::Solver`].
pub fn simulate<F: Fmu + ?Sized>(fmu: &F, experiment: &Experiment) -> Result<Table, Error> {
    let description = fmu.description();
    let protocol = description
        .protocol()
        .ok_or_else(|| Error::UnsupportedVersion(description.fmi_version.clone()))?;
    let interface = Interface::select(description, experiment.interface)?;
    let config = experiment.resolve(description)?;

    let mut recorder = match &experiment.outputs {
        Some(names) => OutputRecorder::with_outputs(description, names)?,
        None => OutputRecorder::new(description),
    };

    tracing::debug!(
        model = %description.model_name,
        %interface,
        ?protocol,
        start_time = config.start_time(),
        stop_time = config.stop_time(),
        step_size = config.step_size(),
        "starting simulation"
    );

    let instantiation = |source: F::Error| Error::Instantiation {
        interface,
        source: Box::new(source),
    };

    match interface {
        Interface::ModelExchange => {
            let mut model = fmu.model_exchange().map_err(instantiation)?;
            if model.protocol() != protocol {
                return Err(Error::ProtocolMismatch {
                    description: protocol,
                    instance: model.protocol(),
                });
            }
            let solution = model_exchange::solve_unobserved(&mut model, &config, &mut recorder)?;
            tracing::debug!(
                status = ?solution.status,
                time = solution.time,
                steps = solution.steps,
                events = ?solution.events,
                "simulation finished"
            );
        }
        Interface::CoSimulation => {
            let mut model = fmu.co_simulation().map_err(instantiation)?;
            let solution = co_simulation::solve_unobserved(&mut model, &config, &mut recorder)?;
            tracing::debug!(
                status = ?solution.status,
                time = solution.time,
                steps = solution.steps,
                "simulation finished"
            );
        }
    }

    Ok(recorder.into_table())
}
