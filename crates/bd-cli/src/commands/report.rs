//! Report command: compute and render a sprint burndown.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use bd_core::{AttributeSet, BurnDirection, BurndownReport, Selection, Series, Unit};
use chrono::NaiveDate;
use serde::Serialize;

use crate::input::Sprint;

/// How the report command runs.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Emit JSON instead of the human-readable chart.
    pub json: bool,
    /// Which series to include.
    pub selection: Selection,
    /// The date that separates real data from the not-yet-burned future.
    pub today: NaiveDate,
    /// Direction recorded on the report.
    pub burn_direction: BurnDirection,
}

/// Runs the report command.
pub fn run<W: Write>(
    writer: &mut W,
    input: &Path,
    attributes: &AttributeSet,
    options: &ReportOptions,
) -> Result<()> {
    let sprint = Sprint::load(input)?;
    let report = BurndownReport::build(
        &sprint.days,
        &sprint.items,
        attributes,
        options.burn_direction,
        options.today,
    );

    if options.json {
        writeln!(
            writer,
            "{}",
            format_report_json(&sprint.name, &report, options.selection)?
        )?;
    } else {
        write!(
            writer,
            "{}",
            format_report(&sprint.name, &report, options.selection)
        )?;
    }
    Ok(())
}

// ========== Human-Readable Output ==========

/// Ten-character bar for one value, scaled against the unit's maximum.
/// Nonzero values below half a block still get a single block.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn value_bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return "░".repeat(10);
    }
    let filled = ((value / max * 10.0).round() as usize).clamp(1, 10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Formats the human-readable burndown chart.
pub fn format_report(sprint_name: &str, report: &BurndownReport, selection: Selection) -> String {
    let mut output = String::new();

    writeln!(output, "BURNDOWN: {sprint_name}").unwrap();

    let days = report.days();
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => {
            writeln!(
                output,
                "{first} to {last} ({} days, {} with data)",
                days.len(),
                report.collected_days().len()
            )
            .unwrap();
        }
        _ => {
            writeln!(output, "No days in range.").unwrap();
            return output;
        }
    }
    writeln!(output, "Burn direction: {}", report.burn_direction()).unwrap();

    for series in report.series(selection) {
        writeln!(output).unwrap();
        writeln!(output, "{} [{}]", series.name(), series.unit()).unwrap();
        if series.is_empty() {
            writeln!(output, "  (no data yet)").unwrap();
            continue;
        }
        let unit_max = report.max(series.unit());
        for (day, value) in days.iter().zip(series.values()) {
            writeln!(
                output,
                "  {day}  {value:>7.1}  {}",
                value_bar(*value, unit_max)
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "MAX").unwrap();
    for unit in Unit::ALL {
        writeln!(output, "  {:<8}{:>7.1}", unit.as_str(), report.max(unit)).unwrap();
    }

    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    sprint: &'a str,
    burn_direction: BurnDirection,
    days: &'a [NaiveDate],
    days_with_data: usize,
    series: Vec<&'a Series>,
    max: JsonMax,
}

#[derive(Debug, Serialize)]
struct JsonMax {
    hours: f64,
    points: f64,
}

/// Formats the report as pretty JSON.
pub fn format_report_json(
    sprint_name: &str,
    report: &BurndownReport,
    selection: Selection,
) -> Result<String> {
    let json = JsonReport {
        sprint: sprint_name,
        burn_direction: report.burn_direction(),
        days: report.days(),
        days_with_data: report.collected_days().len(),
        series: report.series(selection),
        max: JsonMax {
            hours: report.max(Unit::Hours),
            points: report.max(Unit::Points),
        },
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
