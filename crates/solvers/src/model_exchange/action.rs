/// Control actions supported by the model-exchange loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop stepping, then terminate and release the instance normally.
    StopEarly,
}
