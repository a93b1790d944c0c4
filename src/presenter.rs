//! Turns a selection and the sampled clock into display-ready text.

use crate::calculator::{ScheduleRequest, ScheduleResult};
use crate::clock::TimeOfDay;
use crate::config::Config;
use crate::format::{format_clock12, format_duration};
use crate::selection::Selection;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use termtree::Tree;

pub const START_NOW_MESSAGE: &str = "Start now! Target time is too soon for a delay.";

/// Everything a display surface needs for one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    /// The number shown as the delay to dial in
    pub delay_hours: u32,
    pub message: String,
    pub details: Details,
    pub selection: Selection,
    pub request: ScheduleRequest,
    pub schedule: ScheduleResult,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Details {
    pub current_time: String,
    pub target_time: String,
    pub run_time: String,
    pub time_until_target: String,
    pub exact_delay: String,
    pub rounded_delay: String,
    pub finish_time: String,
}

fn clock12(time: TimeOfDay) -> String {
    format_clock12(time.hour(), time.minute())
}

pub fn present(selection: &Selection, config: &Config, now: TimeOfDay) -> Result<Presentation> {
    let (target, run_duration) = selection.resolve(&config.presets)?;
    let request = ScheduleRequest {
        now,
        target,
        run_duration,
    };
    let schedule = request.compute();

    let (delay_hours, message) = if schedule.is_feasible {
        (
            schedule.delay_hours,
            format!(
                "{} will finish at approximately {}",
                config.appliance,
                clock12(schedule.finish_time)
            ),
        )
    } else {
        (0, START_NOW_MESSAGE.to_string())
    };

    let details = Details {
        current_time: clock12(now),
        target_time: clock12(target),
        run_time: format_duration(run_duration.minutes()),
        time_until_target: format_duration(schedule.time_until_target.minutes()),
        exact_delay: format_duration(schedule.exact_delay.max(0) as u32),
        rounded_delay: format!("{} hours", schedule.delay_hours),
        finish_time: clock12(schedule.finish_time),
    };

    Ok(Presentation {
        delay_hours,
        message,
        details,
        selection: *selection,
        request,
        schedule,
    })
}

impl Details {
    pub fn to_tree(&self) -> Tree<String> {
        let mut tree = Tree::new("Detailed calculation".to_string());
        for (label, value) in [
            ("Current time", &self.current_time),
            ("Target time", &self.target_time),
            ("Run time", &self.run_time),
            ("Time until target", &self.time_until_target),
            ("Exact delay", &self.exact_delay),
            ("Rounded delay", &self.rounded_delay),
            ("Finish time", &self.finish_time),
        ] {
            tree.push(Tree::new(format!("{}: {}", label, value)));
        }
        tree
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Set delay: {} hours", self.delay_hours)?;
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Duration;

    #[test]
    fn test_present_feasible() {
        let config = Config::default();
        let selection = Selection::initial(&config.presets)
            .select_target_preset(&config.presets, 1)
            .unwrap()
            .select_run_preset(&config.presets, 2)
            .unwrap();

        let p = present(&selection, &config, TimeOfDay::from_hm(6, 0)).unwrap();

        assert_eq!(p.delay_hours, 3);
        assert_eq!(p.message, "Dishwasher will finish at approximately 11:20 AM");
        assert_eq!(
            p.details,
            Details {
                current_time: "6:00 AM".to_string(),
                target_time: "12:00 PM".to_string(),
                run_time: "2 hr 20 min".to_string(),
                time_until_target: "6 hr".to_string(),
                exact_delay: "3 hr 40 min".to_string(),
                rounded_delay: "3 hours".to_string(),
                finish_time: "11:20 AM".to_string(),
            }
        );
    }

    #[test]
    fn test_present_infeasible_says_start_now() {
        let config = Config::default();
        let selection = Selection::initial(&config.presets);

        let p = present(&selection, &config, TimeOfDay::from_hm(6, 0)).unwrap();

        assert_eq!(p.delay_hours, 0);
        assert_eq!(p.message, START_NOW_MESSAGE);
        assert_eq!(p.details.exact_delay, "0 min");
        assert_eq!(p.details.rounded_delay, "0 hours");
        assert!(!p.schedule.is_feasible);
    }

    #[test]
    fn test_present_uses_appliance_name() {
        let config = Config {
            appliance: "Washer".to_string(),
            ..Config::default()
        };
        let selection = Selection::initial(&config.presets)
            .select_custom_target(TimeOfDay::from_hm(7, 0))
            .select_custom_run(Duration::from_minutes(202));

        let p = present(&selection, &config, TimeOfDay::from_hm(23, 0)).unwrap();
        assert_eq!(p.message, "Washer will finish at approximately 6:22 AM");
        assert_eq!(p.to_string(), format!("Set delay: 4 hours\n{}", p.message));
    }

    #[test]
    fn test_details_tree_lists_every_field() {
        let config = Config::default();
        let selection = Selection::initial(&config.presets);
        let p = present(&selection, &config, TimeOfDay::from_hm(23, 0)).unwrap();

        let rendered = p.details.to_tree().to_string();
        assert!(rendered.starts_with("Detailed calculation"));
        assert!(rendered.contains("Time until target: 8 hr"));
        assert!(rendered.contains("Finish time: 6:50 AM"));
    }
}
