use thiserror::Error;

/// Configuration shared by the simulation loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    start_time: f64,
    stop_time: f64,
    step_size: f64,
    max_event_iterations: usize,
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start_time must be finite")]
    StartTime,

    #[error("stop_time must be finite and not before start_time")]
    StopTime,

    #[error("step_size must be a finite positive value that advances time")]
    StepSize,

    #[error("max_event_iterations must be at least 1")]
    MaxEventIterations,
}

impl Config {
    /// Default bound on discrete-update rounds per event.
    pub const DEFAULT_MAX_EVENT_ITERATIONS: usize = 100;

    /// Creates a new config with a validated time window.
    ///
    /// # Errors
    ///
    /// Returns an error if a time is non-finite, the window is reversed, or
    /// the step size is not positive or too small to change the time.
    pub fn new(start_time: f64, stop_time: f64, step_size: f64) -> Result<Self, ConfigError> {
        if !start_time.is_finite() {
            return Err(ConfigError::StartTime);
        }
        if !stop_time.is_finite() || stop_time < start_time {
            return Err(ConfigError::StopTime);
        }
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        // Time has the largest magnitude at one end of the window.
        if start_time + step_size <= start_time || stop_time + step_size <= stop_time {
            return Err(ConfigError::StepSize);
        }

        Ok(Self {
            start_time,
            stop_time,
            step_size,
            max_event_iterations: Self::DEFAULT_MAX_EVENT_ITERATIONS,
        })
    }

    /// Sets the bound on discrete-update rounds per event.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_event_iterations` is zero.
    pub fn with_max_event_iterations(
        mut self,
        max_event_iterations: usize,
    ) -> Result<Self, ConfigError> {
        if max_event_iterations == 0 {
            return Err(ConfigError::MaxEventIterations);
        }
        self.max_event_iterations = max_event_iterations;
        Ok(self)
    }

    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    #[must_use]
    pub fn stop_time(&self) -> f64 {
        self.stop_time
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the bound on discrete-update rounds per event.
    #[must_use]
    pub fn max_event_iterations(&self) -> usize {
        self.max_event_iterations
    }
}
