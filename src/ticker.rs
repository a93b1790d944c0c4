//! Periodic refresh loop.
//!
//! `now` advances even when nothing else changes, so watch mode re-samples
//! the clock on a fixed interval and renders once per tick.

use crate::clock::TimeOfDay;
use anyhow::{Context, Result};
use chrono::Local;
use tokio::time::{self, MissedTickBehavior};

pub trait Clock {
    fn now(&self) -> TimeOfDay;
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_time(&Local::now())
    }
}

pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

/// Call `on_tick` immediately and then once per `interval`.
///
/// Stops after `max_ticks` ticks, on Ctrl-C, or on the first error returned
/// by `on_tick`. Ticks never overlap: a late tick is delayed, not doubled up.
pub fn run_ticker<C, F>(
    clock: &C,
    interval: std::time::Duration,
    max_ticks: Option<u64>,
    mut on_tick: F,
) -> Result<u64>
where
    C: Clock + ?Sized,
    F: FnMut(TimeOfDay) -> Result<()>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()
        .context("Failed to start refresh timer")?;

    runtime.block_on(async {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        tracing::info!(interval_secs = interval.as_secs(), "Refresh loop started");

        let mut ticks = 0u64;
        loop {
            if max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {
                    on_tick(clock.now())?;
                    ticks += 1;
                }
                _ = &mut shutdown => {
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }

        tracing::info!(ticks, "Refresh loop stopped");
        Ok::<u64, anyhow::Error>(ticks)
    })
}
