//! Display dates and delimited-text export of projections

use crate::projection::CashFlowProjection;
use crate::error::Result;
use chrono::{DateTime, NaiveDate};
use std::io::Write;

pub const CSV_HEADER: [&str; 5] = ["Date", "Description", "Incoming", "Outgoing", "Balance"];

/// Human-readable date, e.g. `15 Jan 2024` or `15 Jan`
pub fn format_display_date(date: NaiveDate, include_year: bool) -> String {
    if include_year {
        date.format("%-d %b %Y").to_string()
    } else {
        date.format("%-d %b").to_string()
    }
}

/// Format a stored date string for display
///
/// Values that are not `YYYY-MM-DD` or RFC 3339 are returned unchanged.
pub fn format_raw_date(raw: &str, include_year: bool) -> String {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|ts| ts.date_naive()));

    match parsed {
        Some(date) => format_display_date(date, include_year),
        None => raw.to_string(),
    }
}

/// Write projection entries as CSV rows `[date, description, incoming, outgoing, balance]`
pub fn write_csv<W: Write>(projection: &CashFlowProjection, writer: W, include_year: bool) -> Result<()> {
    write_csv_all(std::slice::from_ref(projection), writer, include_year)
}

/// Write several projections under a single header, one after another
pub fn write_csv_all<W: Write>(projections: &[CashFlowProjection], writer: W, include_year: bool) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for entry in projections.iter().flat_map(|p| p.entries.iter()) {
        csv_writer.write_record([
            format_display_date(entry.date, include_year),
            entry.description.clone(),
            entry.incoming.to_string(),
            entry.outgoing.to_string(),
            entry.balance.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the CSV export into a string
pub fn to_csv_string(projection: &CashFlowProjection, include_year: bool) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(projection, &mut buffer, include_year)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
