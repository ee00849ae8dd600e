//! Tolerant parsing of probe duration strings.
//!
//! Media inspection tools report durations in several shapes:
//! `01:30:05.120`, `01:30:05;12` (drop-frame timecode) or `01:30:05:12`
//! (frame count as a fourth field). Only whole seconds matter for the
//! comparisons, so every variant is reduced to hours, minutes and seconds.
//!
//! Parsing is an ordered list of strategies; the first one that yields a
//! duration wins.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Playback time at whole-second granularity.
///
/// Only produced by [`parse_duration`], so the fields always hold a valid
/// clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MediaDuration {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl MediaDuration {
    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Total length in whole seconds.
    pub fn as_secs(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for MediaDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl From<MediaDuration> for Duration {
    fn from(value: MediaDuration) -> Self {
        Duration::from_secs(value.as_secs())
    }
}

/// What a probe's duration field turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationReading {
    /// The probe did not report a duration at all.
    Absent,
    /// A duration was reported but no strategy could parse it.
    Unparseable(String),
    Parsed(MediaDuration),
}

impl DurationReading {
    pub fn duration(&self) -> Option<MediaDuration> {
        match self {
            DurationReading::Parsed(duration) => Some(*duration),
            _ => None,
        }
    }
}

type Strategy = fn(&str) -> Option<MediaDuration>;

/// Tried in order; first success wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("truncate fraction", parse_truncated),
    ("drop trailing field", parse_without_last_field),
];

/// Parses a raw duration string, returning `None` when no strategy accepts it.
pub fn parse_duration(raw: &str) -> Option<MediaDuration> {
    let raw = raw.trim();
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let parsed = strategy(raw);
        if let Some(duration) = parsed {
            log::debug!("Parsed duration '{}' as {} ({})", raw, duration, name);
        }
        parsed
    })
}

/// Reads an optional probe value, keeping "missing" apart from "garbled".
pub fn read_duration(raw: Option<&str>) -> DurationReading {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DurationReading::Absent;
    };

    match parse_duration(raw) {
        Some(duration) => DurationReading::Parsed(duration),
        None => {
            log::info!("Unknown duration: {}", raw);
            DurationReading::Unparseable(raw.to_string())
        }
    }
}

/// Strips a `.fraction` suffix, then anything after a `;`.
fn truncate_fraction(raw: &str) -> &str {
    let whole = raw.split('.').next().unwrap_or(raw);
    whole.split(';').next().unwrap_or(whole)
}

fn parse_truncated(raw: &str) -> Option<MediaDuration> {
    parse_clock(truncate_fraction(raw))
}

fn parse_without_last_field(raw: &str) -> Option<MediaDuration> {
    let truncated = truncate_fraction(raw);
    let (head, _frames) = truncated.rsplit_once(':')?;
    parse_clock(head)
}

/// Strict `HH:MM:SS` with one or two digits per field.
fn parse_clock(value: &str) -> Option<MediaDuration> {
    let mut fields = value.split(':');
    let hours = parse_field(fields.next()?, 23)?;
    let minutes = parse_field(fields.next()?, 59)?;
    let seconds = parse_field(fields.next()?, 59)?;
    if fields.next().is_some() {
        return None;
    }

    Some(MediaDuration {
        hours,
        minutes,
        seconds,
    })
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|value| *value <= max)
}
