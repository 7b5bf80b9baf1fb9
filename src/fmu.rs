use fmisim_core::{CoSimulation, ModelDescription, ModelExchange};

/// A packaged model that can create fresh instances.
///
/// Implemented by the binding layer, which loads the shared library and
/// parses the model's metadata. Each call to [`Fmu::model_exchange`] or
/// [`Fmu::co_simulation`] returns a new, uninstantiated adapter owned by a
/// single run.
pub trait Fmu {
    type ModelExchange: ModelExchange;
    type CoSimulation: CoSimulation;
    type Error: std::error::Error + Send + Sync + 'static;

    fn description(&self) -> &ModelDescription;

    /// Creates an adapter for the model-exchange interface.
    ///
    /// # Errors
    ///
    /// Returns an error if the binding cannot provide the interface.
    fn model_exchange(&self) -> Result<Self::ModelExchange, Self::Error>;

    /// Creates an adapter for the co-simulation interface.
    ///
    /// # Errors
    ///
    /// Returns an error if the binding cannot provide the interface.
    fn co_simulation(&self) -> Result<Self::CoSimulation, Self::Error>;
}
