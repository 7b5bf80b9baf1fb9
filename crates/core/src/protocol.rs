use serde::{Deserialize, Serialize};

/// How a model-exchange instance sequences its discrete updates.
///
/// The two revisions of the calling convention differ in how event mode is
/// entered and left. The simulation loop selects its behavior by matching on
/// this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// One update call performs the whole discrete update atomically.
    ///
    /// The instance has no explicit event mode, and no sample is taken at the
    /// start time.
    SingleShot,

    /// The driver enters event mode, repeats the update call until the
    /// discrete states converge, then enters continuous-time mode.
    Iterative,
}
