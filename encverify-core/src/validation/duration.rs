//! Duration equivalence between an original and its re-encode

use std::path::Path;

use super::outcome::VerificationOutcome;
use crate::duration::{DurationReading, read_duration};
use crate::external::MediaProbe;

/// Probes both files and compares their durations.
///
/// Never fails: a duration the probe cannot deliver makes the outcome
/// undetermined rather than an error.
pub fn check_duration<P: MediaProbe + ?Sized>(
    probe: &P,
    original: &Path,
    candidate: &Path,
    tolerance_secs: u64,
) -> VerificationOutcome {
    let original_reading = read_duration(probe.probe_duration(original).as_deref());
    let candidate_reading = read_duration(probe.probe_duration(candidate).as_deref());

    let outcome = compare_durations(
        original,
        &original_reading,
        candidate,
        &candidate_reading,
        tolerance_secs,
    );
    outcome.log("Duration");
    outcome
}

/// Decides on two already-read durations. The paths only feed the messages.
pub fn compare_durations(
    original: &Path,
    original_reading: &DurationReading,
    candidate: &Path,
    candidate_reading: &DurationReading,
    tolerance_secs: u64,
) -> VerificationOutcome {
    let original_duration = match original_reading {
        DurationReading::Parsed(duration) => *duration,
        unreadable => return unreadable_outcome(original, unreadable),
    };
    let candidate_duration = match candidate_reading {
        DurationReading::Parsed(duration) => *duration,
        unreadable => return unreadable_outcome(candidate, unreadable),
    };

    let diff = original_duration.as_secs().abs_diff(candidate_duration.as_secs());
    if diff > tolerance_secs {
        VerificationOutcome::needs_review(format!(
            "Length differs by {} seconds ({} vs {}), more than the allowed {} seconds.",
            diff, original_duration, candidate_duration, tolerance_secs
        ))
    } else {
        VerificationOutcome::pass(format!(
            "Length matches within {} seconds ({} vs {}).",
            tolerance_secs, original_duration, candidate_duration
        ))
    }
}

fn unreadable_outcome(path: &Path, reading: &DurationReading) -> VerificationOutcome {
    match reading {
        DurationReading::Unparseable(raw) => VerificationOutcome::undetermined(format!(
            "Unknown time format '{}' for {}, compare them by hand.",
            raw,
            path.display()
        )),
        _ => VerificationOutcome::undetermined(format!(
            "Could not find duration for {}, compare them by hand.",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::parse_duration;
    use crate::external::MockProbe;

    fn parsed(raw: &str) -> DurationReading {
        DurationReading::Parsed(parse_duration(raw).unwrap())
    }

    #[test]
    fn test_within_tolerance_passes() {
        let a = Path::new("a.mkv");
        let b = Path::new("b.mkv");
        for (original, candidate) in [
            ("00:10:00", "00:10:00"),
            ("00:10:00", "00:10:01"),
            ("00:10:01", "00:10:00"),
        ] {
            let outcome = compare_durations(a, &parsed(original), b, &parsed(candidate), 1);
            assert!(outcome.passed(), "{} vs {}", original, candidate);
        }
    }

    #[test]
    fn test_beyond_tolerance_needs_review() {
        let outcome = compare_durations(
            Path::new("a.mkv"),
            &parsed("00:10:00"),
            Path::new("b.mkv"),
            &parsed("00:10:03"),
            1,
        );
        assert_eq!(outcome.flags(), (false, true));
        assert!(outcome.message().contains("3 seconds"));
    }

    #[test]
    fn test_larger_tolerance_accepts_gap() {
        let outcome = compare_durations(
            Path::new("a.mkv"),
            &parsed("00:10:00"),
            Path::new("b.mkv"),
            &parsed("00:10:03"),
            3,
        );
        assert!(outcome.passed());
    }

    #[test]
    fn test_unreadable_durations_are_undetermined() {
        let a = Path::new("a.mkv");
        let b = Path::new("b.mkv");

        let absent = compare_durations(a, &parsed("00:10:00"), b, &DurationReading::Absent, 1);
        assert_eq!(absent.flags(), (false, false));
        assert!(absent.message().contains("Could not find duration for b.mkv"));

        let garbled = compare_durations(
            a,
            &DurationReading::Unparseable("ten minutes".to_string()),
            b,
            &parsed("00:10:00"),
            1,
        );
        assert!(garbled.is_undetermined());
        assert!(garbled.message().contains("Unknown time format 'ten minutes' for a.mkv"));
    }

    #[test]
    fn test_check_duration_mixed_formats() {
        let probe = MockProbe::new()
            .with_duration("orig.mkv", "01:30:05.120")
            .with_duration("new.mkv", "01:30:05;12");
        let outcome = check_duration(&probe, Path::new("orig.mkv"), Path::new("new.mkv"), 1);
        assert!(outcome.passed());
    }

    #[test]
    fn test_check_duration_missing_candidate() {
        let probe = MockProbe::new().with_duration("orig.mkv", "00:45:00.000");
        let outcome = check_duration(&probe, Path::new("orig.mkv"), Path::new("new.mkv"), 1);
        assert!(outcome.is_undetermined());
        assert!(!outcome.needs_manual_review());
    }
}
