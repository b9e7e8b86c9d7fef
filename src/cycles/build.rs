use crate::model::{CommitRecord, Cycle};
use chrono::Duration;

// Windows are half-open [start, start + cycle_days), anchored at the first
// record's date; skipped empty windows never shift the anchor. Callers keep
// cycle_days in 1..=36500 and record years within four digits, so the sweep
// stays inside chrono's representable dates. Output is newest first.
pub fn build_cycles(records: Vec<CommitRecord>, cycle_days: u32) -> Vec<Cycle> {
    if records.is_empty() {
        return Vec::new();
    }

    let span = Duration::days(i64::from(cycle_days));
    let mut window_start = records[0].date;
    let mut current = Cycle {
        start_date: window_start,
        commits: Vec::new(),
    };
    let mut cycles = Vec::new();

    for record in records {
        // Advance one window at a time until the record fits, closing the
        // in-progress cycle and discarding never-populated ones along the way.
        while record.date >= window_start + span {
            if !current.commits.is_empty() {
                cycles.push(current);
            }
            window_start += span;
            current = Cycle {
                start_date: window_start,
                commits: Vec::new(),
            };
        }
        current.commits.push(record.message);
    }

    if !current.commits.is_empty() {
        cycles.push(current);
    }

    cycles.reverse();
    cycles
}
