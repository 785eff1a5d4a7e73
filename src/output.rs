//! Serializable views and text rendering of command results.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use fasli_calendar::ZoroastrianDate;
use fasli_schedule::{CeremonyEvent, Schedule};

#[derive(Debug, Serialize)]
pub struct DateView {
    pub gregorian: String,
    pub year: i32,
    pub month: &'static str,
    pub day_of_month: u8,
    pub day_name: &'static str,
    pub day_offset: u16,
    pub is_gatha_day: bool,
    pub is_leap_extra_day: bool,
    pub is_esfand_month: bool,
    pub display: String,
}

impl From<&ZoroastrianDate> for DateView {
    fn from(z: &ZoroastrianDate) -> Self {
        Self {
            gregorian: z.gregorian().to_string(),
            year: z.year(),
            month: z.month_name(),
            day_of_month: z.day_of_month(),
            day_name: z.day_name(),
            day_offset: z.day_offset(),
            is_gatha_day: z.is_gatha_day(),
            is_leap_extra_day: z.is_leap_extra_day(),
            is_esfand_month: z.is_esfand_month(),
            display: z.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventView {
    pub ceremony: String,
    pub description: &'static str,
    pub prayers: &'static [&'static str],
    pub date: DateView,
}

impl From<&CeremonyEvent> for EventView {
    fn from(e: &CeremonyEvent) -> Self {
        Self {
            ceremony: e.ceremony().to_string(),
            description: e.ceremony().description(),
            prayers: e.ceremony().prayers(),
            date: DateView::from(&e.zoroastrian()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleView {
    pub death: String,
    pub effective_day: String,
    pub sunrise: Option<String>,
    pub shifted_to_previous_day: bool,
    pub death_date: DateView,
    pub events: Vec<EventView>,
    pub notes: Vec<String>,
}

impl From<&Schedule> for ScheduleView {
    fn from(s: &Schedule) -> Self {
        let effective = s.effective_day();
        Self {
            death: s.death().format("%Y-%m-%dT%H:%M:%S").to_string(),
            effective_day: effective.date.to_string(),
            sunrise: effective
                .sunrise
                .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
            shifted_to_previous_day: effective.shifted,
            death_date: DateView::from(&s.death_date()),
            events: s.events().iter().map(EventView::from).collect(),
            notes: s.notes().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Pretty JSON for any view.
pub fn to_json<T: Serialize>(view: &T) -> Result<String> {
    serde_json::to_string_pretty(view).context("failed to serialize output")
}

/// Plain-text table of a schedule.
pub fn render_schedule_text(s: &Schedule) -> String {
    let mut out = String::new();
    let effective = s.effective_day();
    let _ = writeln!(out, "Death:         {}", s.death().format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "Counted from:  {} ({})", effective.date, s.death_date());
    if let Some(sunrise) = effective.sunrise {
        let _ = writeln!(out, "Local sunrise: {}", sunrise.format("%H:%M"));
    }
    let _ = writeln!(out);

    let width = s
        .events()
        .iter()
        .map(|e| e.ceremony().to_string().len())
        .max()
        .unwrap_or(0);
    for e in s.events() {
        let _ = writeln!(
            out,
            "{:<width$}  {}  {}",
            e.ceremony().to_string(),
            e.gregorian(),
            e.zoroastrian()
        );
    }

    if !s.notes().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notes:");
        for note in s.notes() {
            let _ = writeln!(out, "- {note}");
        }
    }
    out
}
