/// Reports whether any event indicator changed sign between two snapshots.
///
/// A crossing is `previous[i] * current[i] < 0`. There is no root finding:
/// the event is placed at the end of the step that observed the sign change,
/// not at the true crossing time. Callers needing tighter event times must
/// refine the step themselves.
#[must_use]
pub fn state_event(previous: &[f64], current: &[f64]) -> bool {
    debug_assert_eq!(
        previous.len(),
        current.len(),
        "indicator snapshots must have the same length"
    );

    previous
        .iter()
        .zip(current)
        .any(|(before, after)| before * after < 0.0)
}
