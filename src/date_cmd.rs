//! Date command: one Gregorian instant to its Fasli date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fasli_calendar::{DisplayStyle, format_display_string};
use fasli_schedule::convert_to_zoroastrian_date;

use crate::cli::{DateArgs, OutputFormat};
use crate::config;
use crate::convert::ServiceStack;
use crate::output::{DateView, to_json};
use crate::schedule_cmd::{local_instant, parse_place};

/// Run the date conversion.
pub fn run(args: DateArgs) -> Result<()> {
    let _cmd = info_span!("date").entered();
    let instant_args = &args.instant;
    let config = config::load(instant_args.config.as_deref())?;
    let stack = ServiceStack::from_config(&config)?;

    let instant = local_instant(instant_args);
    let place = parse_place(instant_args.location.as_deref());
    info!(%instant, place = ?place.as_ref().map(ToString::to_string), "converting");

    let z = convert_to_zoroastrian_date(instant, place.as_ref(), &stack.services())
        .with_context(|| format!("failed to convert {instant}"))?;

    let rendered = match instant_args.format {
        OutputFormat::Json => to_json(&DateView::from(&z))?,
        OutputFormat::Text => {
            let style = if args.short {
                DisplayStyle::Short
            } else {
                DisplayStyle::Full
            };
            format_display_string(&z, style)
        }
    };
    println!("{rendered}");
    Ok(())
}
