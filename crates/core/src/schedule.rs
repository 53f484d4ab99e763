//! Past/upcoming classification of shows.
//!
//! Classification is never stored: it is computed against a single `now`
//! captured once per request, so every show in one response is judged by
//! the same clock reading.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::types::Timestamp;

/// Format used by show forms for the default start time.
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive formats accepted for a submitted start time, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A show is upcoming iff it starts strictly after `now`.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time > now
}

/// Anything with a start time that can be classified.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Shows of one venue or artist split into past and upcoming.
///
/// Input order is preserved inside each half.
#[derive(Debug, Clone, Serialize)]
pub struct ShowPartition<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T: Scheduled> ShowPartition<T> {
    pub fn split<I>(shows: I, now: Timestamp) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let (upcoming_shows, past_shows): (Vec<T>, Vec<T>) = shows
            .into_iter()
            .partition(|show| is_upcoming(show.start_time(), now));

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Parse a submitted show start time.
///
/// Accepts RFC 3339 (`2035-04-01T20:00:00Z`) and the naive forms in
/// `NAIVE_DATETIME_FORMATS`, which are taken as UTC.
pub fn parse_start_time(input: &str) -> Result<Timestamp, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Start time is required".to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| format!("Invalid start time '{input}'. Expected YYYY-MM-DD HH:MM:SS"))
}

/// Render a timestamp the way the show form expects it.
pub fn format_for_form(ts: Timestamp) -> String {
    ts.format(FORM_DATETIME_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    struct Gig(Timestamp);

    impl Scheduled for Gig {
        fn start_time(&self) -> Timestamp {
            self.0
        }
    }

    fn at(s: &str) -> Timestamp {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn later_start_is_upcoming() {
        let now = at("2030-01-01T00:00:00Z");
        assert!(is_upcoming(now + Duration::seconds(1), now));
    }

    #[test]
    fn earlier_start_is_past() {
        let now = at("2030-01-01T00:00:00Z");
        assert!(!is_upcoming(now - Duration::days(3), now));
    }

    #[test]
    fn start_exactly_now_is_past() {
        let now = at("2030-01-01T00:00:00Z");
        assert!(!is_upcoming(now, now));
    }

    #[test]
    fn partition_places_every_show_in_exactly_one_half() {
        let now = at("2030-06-15T12:00:00Z");
        let shows = vec![
            Gig(now - Duration::days(10)),
            Gig(now + Duration::days(1)),
            Gig(now),
            Gig(now + Duration::hours(2)),
        ];

        let partition = ShowPartition::split(shows, now);

        assert_eq!(partition.past_shows_count, 2);
        assert_eq!(partition.upcoming_shows_count, 2);
        assert_eq!(partition.past_shows.len() + partition.upcoming_shows.len(), 4);
        assert!(partition.past_shows.iter().all(|g| g.0 <= now));
        assert!(partition.upcoming_shows.iter().all(|g| g.0 > now));
    }

    #[test]
    fn partition_preserves_input_order() {
        let now = at("2030-06-15T12:00:00Z");
        let first = now + Duration::days(1);
        let second = now + Duration::days(2);
        let partition = ShowPartition::split(vec![Gig(first), Gig(second)], now);
        assert_eq!(partition.upcoming_shows[0].0, first);
        assert_eq!(partition.upcoming_shows[1].0, second);
    }

    #[test]
    fn empty_partition() {
        let partition = ShowPartition::<Gig>::split(Vec::new(), Utc::now());
        assert_eq!(partition.past_shows_count, 0);
        assert_eq!(partition.upcoming_shows_count, 0);
    }

    #[test]
    fn parses_form_format_as_utc() {
        assert_eq!(
            parse_start_time("2035-04-01 20:00:00").unwrap(),
            at("2035-04-01T20:00:00Z")
        );
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_start_time("2019-05-21T21:30:00.000Z").unwrap(),
            at("2019-05-21T21:30:00Z")
        );
        assert_eq!(
            parse_start_time("2035-04-01T22:00:00+02:00").unwrap(),
            at("2035-04-01T20:00:00Z")
        );
    }

    #[test]
    fn parses_datetime_local_input() {
        assert_eq!(
            parse_start_time("2035-04-01T20:00").unwrap(),
            at("2035-04-01T20:00:00Z")
        );
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(parse_start_time("next tuesday").is_err());
        assert!(parse_start_time("   ").is_err());
    }

    #[test]
    fn form_format_round_trips() {
        let ts = at("2035-04-08T20:00:00Z");
        assert_eq!(parse_start_time(&format_for_form(ts)).unwrap(), ts);
    }
}
