use crate::error::{GcyclesError, Result};
use crate::model::CommitRecord;
use chrono::{Datelike, NaiveDate};

use super::fetch::LogSource;

const DATE_FORMAT: &str = "%Y-%m-%d";

// %Y parses greedily past four digits; dates are contracted to four-digit
// years, and the bound keeps window arithmetic inside chrono's range.
fn parse_date(token: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(token, DATE_FORMAT).ok()?;
    (0..=9999).contains(&date.year()).then_some(date)
}

pub fn parse_cutoff(input: &str) -> Result<NaiveDate> {
    parse_date(input).ok_or_else(|| {
        GcyclesError::InvalidDate(format!(
            "cannot parse cutoff '{input}', expected YYYY-MM-DD"
        ))
    })
}

// None for anything malformed: blank lines, lines without a separator,
// dates that are not a real calendar day. Only the first `|` splits, so
// subjects may contain the separator.
fn parse_line(line: &str) -> Option<CommitRecord> {
    let (token, message) = line.split_once('|')?;
    let date = parse_date(token)?;
    Some(CommitRecord {
        date,
        message: message.to_string(),
    })
}

pub fn parse_records(raw: &str, cutoff: Option<NaiveDate>) -> Vec<CommitRecord> {
    let mut records: Vec<CommitRecord> = raw
        .lines()
        .filter_map(parse_line)
        .filter(|record| cutoff.map_or(true, |c| record.date >= c))
        .collect();

    // Stable, so same-date records keep the order the log emitted them in.
    records.sort_by_key(|record| record.date);
    records
}

pub fn extract(source: &impl LogSource, cutoff: Option<NaiveDate>) -> Result<Vec<CommitRecord>> {
    let raw = source.fetch_raw_log()?;
    Ok(parse_records(&raw, cutoff))
}
