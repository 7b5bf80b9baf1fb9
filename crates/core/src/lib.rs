//! Core traits and types for driving hybrid simulation units.
//!
//! This crate defines the shared abstractions that the simulation loops and
//! recorders build on:
//!
//! - [`ModelAdapter`] — lifecycle and value access for one model instance
//! - [`ModelExchange`] — continuous-state access for instances the driver
//!   integrates itself
//! - [`CoSimulation`] — instances that advance their own state per step
//! - [`Status`] — the signal every adapter call reports
//! - [`EventInfo`], [`StepOutcome`] — what the model reports about events
//! - [`Protocol`] — how discrete updates are sequenced
//! - [`Observer`], [`Recorder`] — consumers driven by the loops
//! - [`ModelDescription`] — read-only metadata about a model

mod adapter;
mod description;
mod event_info;
mod observer;
mod protocol;
mod recorder;
mod status;

pub use adapter::{CoSimulation, ModelAdapter, ModelExchange, ValueReference};
pub use description::{
    Causality, DefaultExperiment, ModelDescription, ScalarVariable, VariableKind,
};
pub use event_info::{EventInfo, StepOutcome};
pub use observer::Observer;
pub use protocol::Protocol;
pub use recorder::{Recorder, SampleError};
pub use status::Status;
