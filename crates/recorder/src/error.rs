use thiserror::Error;

/// Errors that can occur when choosing the columns to record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no variable named `{0}`")]
    UnknownOutput(String),

    #[error("variable `{0}` is a string and cannot be recorded")]
    StringOutput(String),
}
