/// Watches a simulation loop and may steer it.
///
/// A loop hands the observer one event per accepted time point. Returning
/// `Some(action)` asks the loop to act on it, typically to stop early;
/// returning `None` lets the run continue.
///
/// Implemented for `FnMut(&E) -> Option<A>` closures and for `()`, which
/// never intervenes. A closure passed as `&mut` keeps its captured state
/// across runs.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
