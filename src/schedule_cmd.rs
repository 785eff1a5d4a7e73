//! Schedule command: memorial ceremonies for a death.

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime};
use tracing::{info, info_span};

use fasli_schedule::generate_schedule;
use fasli_solar::Place;

use crate::cli::{InstantArgs, OutputFormat, ScheduleArgs};
use crate::config;
use crate::convert::ServiceStack;
use crate::output::{ScheduleView, render_schedule_text, to_json};

/// Combines `--date` and `--time`; noon when no time is given.
pub fn local_instant(args: &InstantArgs) -> NaiveDateTime {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    args.date.and_time(args.time.unwrap_or(noon))
}

/// Parses `--location`. A blank string is kept so that lookup reports it.
pub fn parse_place(location: Option<&str>) -> Option<Place> {
    location.map(Place::parse)
}

/// Run schedule generation.
pub fn run(args: ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    let instant_args = &args.instant;
    let config = config::load(instant_args.config.as_deref())?;
    let stack = ServiceStack::from_config(&config)?;
    let months = args.months.unwrap_or(config.schedule.months);

    let death = local_instant(instant_args);
    let place = parse_place(instant_args.location.as_deref());
    info!(%death, months, place = ?place.as_ref().map(ToString::to_string), "generating schedule");

    let schedule = generate_schedule(death, place.as_ref(), months, &stack.services())
        .with_context(|| format!("failed to generate schedule for death at {death}"))?;

    let rendered = match instant_args.format {
        OutputFormat::Json => to_json(&ScheduleView::from(&schedule))?,
        OutputFormat::Text => render_schedule_text(&schedule),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), events = schedule.events().len(), "schedule written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
