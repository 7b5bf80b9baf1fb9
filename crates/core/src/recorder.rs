use thiserror::Error;

use crate::Status;

/// Errors that can occur while sampling outputs.
#[derive(Debug, Error)]
pub enum SampleError {
    /// A getter reported a status other than success.
    #[error("{call} returned {status}")]
    Status { call: &'static str, status: Status },

    /// Any other failure inside the recorder.
    #[error("recorder error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Samples output values from a model at each accepted time point.
///
/// The simulation loops call [`sample`](Self::sample) once per accepted time
/// point and lend the recorder the model for the duration of the call.
/// Sampling must only read from the model.
///
/// A built-in impl for `()` records nothing.
pub trait Recorder<M: ?Sized> {
    /// Records the outputs of `model` at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] if the model cannot provide the outputs.
    fn sample(&mut self, model: &mut M, time: f64) -> Result<(), SampleError>;
}

impl<M: ?Sized> Recorder<M> for () {
    fn sample(&mut self, _model: &mut M, _time: f64) -> Result<(), SampleError> {
        Ok(())
    }
}

/// Records only the sampled times.
impl<M: ?Sized> Recorder<M> for Vec<f64> {
    fn sample(&mut self, _model: &mut M, time: f64) -> Result<(), SampleError> {
        self.push(time);
        Ok(())
    }
}

impl<M: ?Sized, R: Recorder<M> + ?Sized> Recorder<M> for &mut R {
    fn sample(&mut self, model: &mut M, time: f64) -> Result<(), SampleError> {
        (**self).sample(model, time)
    }
}
