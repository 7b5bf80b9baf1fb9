//! Simulation loops for hybrid model instances.
//!
//! # Loops
//!
//! - [`model_exchange`] — the driver integrates the continuous states with
//!   forward Euler and handles time, state, and step events
//! - [`co_simulation`] — the instance advances itself over fixed
//!   communication steps
//!
//! Both loops own the instance for the whole run and release it on every
//! exit path, including errors.

mod config;
mod error;
mod instance;

pub mod co_simulation;
pub mod model_exchange;

#[cfg(test)]
mod test_utils;

pub use config::{Config, ConfigError};
pub use error::{Error, Phase};
