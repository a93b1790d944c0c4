use crate::OutputFormat;
use crate::commands::{SelectionOptions, build_selection, parse_now, render};
use crate::config::Config;
use crate::presenter::present;
use crate::ticker::{Clock, SystemClock};
use anyhow::Result;

pub fn calc(
    config: &Config,
    options: &SelectionOptions,
    now: Option<&str>,
    details: bool,
    format: OutputFormat,
) -> Result<()> {
    let selection = build_selection(options, &config.presets)?;
    let now = match parse_now(now)? {
        Some(now) => now,
        None => SystemClock.now(),
    };

    let presentation = present(&selection, config, now)?;
    println!("{}", render(&presentation, format, details, true)?);
    Ok(())
}
