//! Columnar output recording for the fmisim simulation loops.
//!
//! [`OutputRecorder`] implements [`Recorder`] for any [`ModelAdapter`]. It
//! samples a fixed set of model outputs at every accepted time point and
//! assembles them into a [`Table`] with one `time` column followed by one
//! column per output.
//!
//! [`Recorder`]: fmisim_core::Recorder
//! [`ModelAdapter`]: fmisim_core::ModelAdapter

mod error;
mod output;
mod table;

pub use error::LayoutError;
pub use output::OutputRecorder;
pub use table::{Column, ColumnKind, Row, Table, Value};
