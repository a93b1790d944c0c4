use crate::OutputFormat;
use crate::commands::{SelectionOptions, build_selection, parse_now, render};
use crate::config::Config;
use crate::presenter::present;
use crate::ticker::{Clock, FixedClock, SystemClock, run_ticker};
use anyhow::{Result, bail};
use std::time::Duration;

pub struct WatchOptions<'a> {
    pub now: Option<&'a str>,
    pub interval_secs: Option<u64>,
    pub ticks: Option<u64>,
    pub details: bool,
}

pub fn watch(
    config: &Config,
    selection_options: &SelectionOptions,
    options: WatchOptions<'_>,
    format: OutputFormat,
) -> Result<()> {
    // Resolved once: selection does not change while watching.
    let selection = build_selection(selection_options, &config.presets)?;

    let interval_secs = options.interval_secs.unwrap_or(config.refresh.interval_secs);
    if interval_secs == 0 {
        bail!("--interval-secs must be greater than zero");
    }

    let clock: Box<dyn Clock> = match parse_now(options.now)? {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };

    let mut first = true;
    run_ticker(
        clock.as_ref(),
        Duration::from_secs(interval_secs),
        options.ticks,
        |now| {
            let presentation = present(&selection, config, now)?;
            let rendered = render(&presentation, format, options.details, false)?;
            if matches!(format, OutputFormat::Text) && !first {
                println!();
            }
            first = false;
            println!("{}", rendered);
            Ok(())
        },
    )?;

    Ok(())
}
