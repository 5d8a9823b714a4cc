use crate::api::HistoryEntry;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Reverse;

/// Ordering key for a server-provided "ISO-ish" timestamp string.
/// Entries that parse sort chronologically and ahead of any that do
/// not; unparseable strings fall back to lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum TimeKey {
    Raw(String),
    Parsed(DateTime<Utc>),
}

fn time_key(time: &str) -> TimeKey {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(time) {
        return TimeKey::Parsed(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(time, format) {
            return TimeKey::Parsed(naive.and_utc());
        }
    }
    TimeKey::Raw(time.to_string())
}

/// Sorts history entries latest-first for the selected-feed view and
/// the spreadsheet export.
pub fn sort_descending(entries: &mut [HistoryEntry]) {
    entries.sort_by_cached_key(|entry| Reverse(time_key(&entry.time)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: &str, people_count: u32) -> HistoryEntry {
        HistoryEntry {
            time: time.into(),
            people_count,
        }
    }

    #[test]
    fn entries_sort_latest_first() {
        let mut entries = vec![
            entry("2026-08-23 10:00:00", 3),
            entry("2026-08-23 10:05:00", 5),
            entry("2026-08-23 09:55:00", 2),
        ];
        sort_descending(&mut entries);
        let counts: Vec<u32> = entries.iter().map(|e| e.people_count).collect();
        assert_eq!(counts, vec![5, 3, 2]);
    }

    #[test]
    fn rfc3339_timestamps_are_understood() {
        let mut entries = vec![
            entry("2026-08-23T10:00:00Z", 1),
            entry("2026-08-23T12:00:00Z", 2),
        ];
        sort_descending(&mut entries);
        assert_eq!(entries[0].people_count, 2);
    }

    #[test]
    fn unparseable_times_fall_back_to_lexicographic_order() {
        let mut entries = vec![entry("alpha", 1), entry("omega", 2)];
        sort_descending(&mut entries);
        assert_eq!(entries[0].people_count, 2);
    }
}
