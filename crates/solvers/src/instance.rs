use fmisim_core::{EventInfo, ModelAdapter, Recorder, SampleError, Status};

use crate::error::{Error, Phase, check};

/// Exclusive, scoped ownership of one model instance for a run.
///
/// Every call goes through [`call`](Self::call), which inspects the status.
/// Dropping the guard without [`finish`](Self::finish) releases the instance
/// anyway: `terminate` is issued only if the instance finished initializing
/// and never reported `Error` or `Fatal`, and `release` is always issued.
pub(crate) struct Instance<'a, M: ModelAdapter + ?Sized> {
    model: &'a mut M,
    initialized: bool,
    unusable: bool,
    released: bool,
}

impl<'a, M: ModelAdapter + ?Sized> Instance<'a, M> {
    /// Instantiates the model.
    ///
    /// A failed instantiation leaves nothing to release.
    pub(crate) fn instantiate(model: &'a mut M) -> Result<Self, Error> {
        let status = model.instantiate();
        check(status, Phase::Initialization, "instantiate")?;
        tracing::debug!("model instantiated");

        Ok(Self {
            model,
            initialized: false,
            unusable: false,
            released: false,
        })
    }

    /// Runs setup and initialization mode.
    pub(crate) fn initialize(
        &mut self,
        start_time: f64,
        event_info: &mut EventInfo,
    ) -> Result<(), Error> {
        let phase = Phase::Initialization;
        self.call(phase, "setup_experiment", |m| m.setup_experiment(start_time))?;
        self.call(phase, "enter_initialization_mode", |m| {
            m.enter_initialization_mode()
        })?;
        self.call(phase, "exit_initialization_mode", |m| {
            m.exit_initialization_mode(event_info)
        })?;
        self.initialized = true;

        tracing::debug!(start_time, ?event_info, "model initialized");
        Ok(())
    }

    /// Issues one call and inspects its status.
    pub(crate) fn call<F>(&mut self, phase: Phase, call: &'static str, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut M) -> Status,
    {
        let status = f(&mut *self.model);
        if status.is_unrecoverable() {
            self.unusable = true;
        }
        check(status, phase, call)
    }

    /// Lends the instance to a recorder for one sample.
    pub(crate) fn sample<R>(&mut self, recorder: &mut R, phase: Phase, time: f64) -> Result<(), Error>
    where
        R: Recorder<M>,
    {
        match recorder.sample(&mut *self.model, time) {
            Ok(()) => Ok(()),
            Err(source) => {
                if let SampleError::Status { status, .. } = &source {
                    if status.is_unrecoverable() {
                        self.unusable = true;
                    }
                }
                tracing::error!(%phase, time, error = %source, "sampling failed");
                Err(Error::Recorder { phase, source })
            }
        }
    }

    /// Marks the instance as no longer fit for `terminate`.
    ///
    /// Used when the driver, rather than a call status, decides the model is
    /// stuck, such as discrete states that never converge.
    pub(crate) fn poison(&mut self) {
        self.unusable = true;
    }

    /// Returns the wrapped model for queries that report no status.
    pub(crate) fn model(&self) -> &M {
        &*self.model
    }

    /// Terminates and releases the instance, inspecting the terminate status.
    pub(crate) fn finish(mut self) -> Result<(), Error> {
        self.released = true;
        let status = (self.initialized && !self.unusable).then(|| self.model.terminate());
        self.model.release();
        tracing::debug!("model released");

        match status {
            Some(status) => check(status, Phase::Termination, "terminate"),
            None => Ok(()),
        }
    }
}

impl<M: ModelAdapter + ?Sized> Drop for Instance<'_, M> {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        if self.initialized && !self.unusable {
            let status = self.model.terminate();
            if !status.is_success() {
                tracing::warn!(%status, "terminate failed while aborting the run");
            }
        }
        self.model.release();
        tracing::debug!("model released after an aborted run");
    }
}
