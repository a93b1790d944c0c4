pub mod calc;
pub mod config;
pub mod presets;
pub mod watch;

use crate::OutputFormat;
use crate::clock::TimeOfDay;
use crate::config::PresetsConfig;
use crate::input::{parse_run_time, parse_target};
use crate::presenter::Presentation;
use crate::selection::Selection;
use anyhow::{Context, Result};

/// Raw selection flags as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct SelectionOptions {
    pub target: Option<String>,
    pub target_preset: Option<usize>,
    pub run: Option<String>,
    pub run_preset: Option<usize>,
}

/// Apply the command-line choices on top of the configured defaults.
pub fn build_selection(options: &SelectionOptions, presets: &PresetsConfig) -> Result<Selection> {
    let mut selection = Selection::initial(presets);

    if let Some(index) = options.target_preset {
        selection = selection.select_target_preset(presets, index)?;
    }
    if let Some(raw) = &options.target {
        let time = parse_target(raw).context("Invalid --target")?;
        selection = selection.select_custom_target(time);
    }

    if let Some(index) = options.run_preset {
        selection = selection.select_run_preset(presets, index)?;
    }
    if let Some(raw) = &options.run {
        let duration = parse_run_time(raw, presets.fallback_run_duration());
        selection = selection.select_custom_run(duration);
    }

    Ok(selection)
}

pub fn parse_now(raw: Option<&str>) -> Result<Option<TimeOfDay>> {
    raw.map(|s| TimeOfDay::parse(s).context("Invalid --now"))
        .transpose()
}

pub fn render(
    presentation: &Presentation,
    format: OutputFormat,
    details: bool,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = presentation.to_string();
            if details {
                out.push_str("\n\n");
                out.push_str(presentation.details.to_tree().to_string().trim_end());
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(presentation)
            } else {
                serde_json::to_string(presentation)
            };
            json.context("Failed to serialize result")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{RunChoice, TargetChoice};

    #[test]
    fn test_no_flags_gives_initial_selection() {
        let presets = PresetsConfig::default();
        let selection = build_selection(&SelectionOptions::default(), &presets).unwrap();
        assert_eq!(selection, Selection::initial(&presets));
    }

    #[test]
    fn test_custom_flags_override() {
        let presets = PresetsConfig::default();
        let options = SelectionOptions {
            target: Some("21:15".to_string()),
            run: Some("1:05".to_string()),
            ..Default::default()
        };
        let selection = build_selection(&options, &presets).unwrap();
        assert_eq!(
            selection.target,
            TargetChoice::Custom(TimeOfDay::from_hm(21, 15))
        );
        assert_eq!(
            selection.run,
            RunChoice::Custom(crate::clock::Duration::from_minutes(65))
        );
    }

    #[test]
    fn test_invalid_custom_target_is_rejected() {
        let presets = PresetsConfig::default();
        let options = SelectionOptions {
            target: Some("25:00".to_string()),
            ..Default::default()
        };
        let err = build_selection(&options, &presets).unwrap_err();
        assert!(err.to_string().contains("Invalid --target"));
    }

    #[test]
    fn test_blank_custom_run_falls_back_to_default_preset() {
        let presets = PresetsConfig::default();
        let options = SelectionOptions {
            run: Some(String::new()),
            ..Default::default()
        };
        let selection = build_selection(&options, &presets).unwrap();
        let (_, run) = selection.resolve(&presets).unwrap();
        assert_eq!(run.minutes(), 230);
        assert!(selection.is_custom_run());
    }

    #[test]
    fn test_parse_now() {
        assert_eq!(parse_now(None).unwrap(), None);
        assert_eq!(
            parse_now(Some("06:00")).unwrap(),
            Some(TimeOfDay::from_hm(6, 0))
        );
        assert!(parse_now(Some("noon")).is_err());
    }
}
