use fmisim_core::EventInfo;

/// The next candidate time point proposed by [`next_step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub next_time: f64,
    pub dt: f64,

    /// The step was shortened to land on a scheduled time event.
    pub is_time_event: bool,
}

/// Proposes the next time point of a fixed-step run.
///
/// The candidate is `min(time + step_size, stop_time)`. A pending time event
/// at or before the candidate pulls it back onto the event time, so events
/// are never skipped or overshot. An overdue event fires at `time` with a
/// zero-length step; `dt` is never negative.
#[must_use]
pub fn next_step(time: f64, step_size: f64, stop_time: f64, event_info: &EventInfo) -> Step {
    let mut next_time = (time + step_size).min(stop_time);
    let mut is_time_event = false;

    if let Some(event_time) = event_info.next_event_time {
        if event_time <= next_time {
            next_time = event_time.max(time);
            is_time_event = true;
        }
    }

    Step {
        next_time,
        dt: next_time - time,
        is_time_event,
    }
}
