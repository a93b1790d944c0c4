//! Delayed-start arithmetic.
//!
//! Given the current wall-clock time, a target time of day and a run
//! duration, work out how many whole hours to delay the start so the run
//! finishes at or before the target. Delays are floored to the hour, so the
//! appliance finishes early rather than late.

use crate::clock::{Duration, MINUTES_PER_DAY, MINUTES_PER_HOUR, TimeOfDay};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleRequest {
    pub now: TimeOfDay,
    pub target: TimeOfDay,
    pub run_duration: Duration,
}

impl ScheduleRequest {
    pub fn compute(&self) -> ScheduleResult {
        compute_schedule(self.now, self.target, self.run_duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    /// Minutes from `now` to the next occurrence of the target, in `(0, 1440]`.
    pub time_until_target: Duration,
    /// Unrounded delay in minutes; negative when the run cannot fit.
    pub exact_delay: i64,
    /// Whole hours to delay, clamped to zero when infeasible.
    pub delay_hours: u32,
    /// Finish time for the floored delay. Uses the unclamped hour count, so
    /// an infeasible run never reports a finish after the target.
    pub finish_time: TimeOfDay,
    pub is_feasible: bool,
}

/// Compute the hourly delay for one run.
///
/// `now` and `target` are assumed to be on the same local wall clock; a
/// target at or before `now` refers to tomorrow. An infeasible request
/// reports a zero delay.
pub fn compute_schedule(
    now: TimeOfDay,
    target: TimeOfDay,
    run_duration: Duration,
) -> ScheduleResult {
    let mut time_until_target = target.minutes() - now.minutes();
    if time_until_target <= 0 {
        time_until_target += MINUTES_PER_DAY;
    }

    let run = i64::from(run_duration.minutes());
    let exact_delay = time_until_target - run;

    // Floor, not truncation: -10 minutes must become -1 hour, never 0.
    let raw_hours = exact_delay.div_euclid(MINUTES_PER_HOUR);
    let is_feasible = raw_hours >= 0;
    let delay_hours = raw_hours.max(0);

    let finish_time = TimeOfDay::from_minutes(now.minutes() + raw_hours * MINUTES_PER_HOUR + run);

    tracing::debug!(
        %now,
        %target,
        run_minutes = run,
        time_until_target,
        exact_delay,
        delay_hours,
        %finish_time,
        is_feasible,
        "computed schedule"
    );

    ScheduleResult {
        time_until_target: Duration::from_minutes(time_until_target as u32),
        exact_delay,
        delay_hours: delay_hours as u32,
        finish_time,
        is_feasible,
    }
}
