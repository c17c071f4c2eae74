// SPDX-License-Identifier: MPL-2.0
//! Elapsed-time arithmetic for the anniversary counter.
//!
//! The breakdown is recomputed from scratch on every tick, so there is no
//! accumulated drift: each value depends only on the anchor and the instant
//! passed in.

use chrono::NaiveDateTime;

/// Seconds per unit, used to split a raw second count into display fields.
const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Elapsed time since the anchor instant, split into display fields.
///
/// For an anchor in the past, `hours` is in `[0, 24)` and `minutes`/`seconds`
/// are in `[0, 60)`. An anchor in the future yields negative fields; the
/// counter surfaces them as-is rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    /// Computes the breakdown of `now - anchor`.
    #[must_use]
    pub fn between(anchor: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self::from_seconds((now - anchor).num_seconds())
    }

    /// Splits a signed second count into days/hours/minutes/seconds.
    ///
    /// Division truncates toward zero, so a negative total produces fields
    /// that are all zero or negative and still reconstruct exactly.
    #[must_use]
    pub fn from_seconds(total: i64) -> Self {
        Self {
            days: total / SECS_PER_DAY,
            hours: (total / SECS_PER_HOUR) % 24,
            minutes: (total / SECS_PER_MINUTE) % 60,
            seconds: total % 60,
        }
    }

    /// Reconstructs the total second count this breakdown was derived from.
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

/// Parses the configured anchor instant (ISO-8601 local date-time).
///
/// Returns `None` when the string is malformed; the caller disables the
/// counter in that case.
#[must_use]
pub fn parse_anchor(value: &str) -> Option<NaiveDateTime> {
    value.parse::<NaiveDateTime>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> NaiveDateTime {
        value.parse().expect("valid test date-time")
    }

    #[test]
    fn one_day_one_hour_two_minutes_three_seconds() {
        let anchor = at("2023-12-10T00:00:00");
        let now = at("2023-12-11T01:02:03");

        let breakdown = Breakdown::between(anchor, now);

        assert_eq!(
            breakdown,
            Breakdown {
                days: 1,
                hours: 1,
                minutes: 2,
                seconds: 3,
            }
        );
    }

    #[test]
    fn identical_instants_produce_zero_breakdown() {
        let anchor = at("2023-12-10T00:00:00");
        let breakdown = Breakdown::between(anchor, anchor);
        assert_eq!(breakdown, Breakdown::default());
    }

    #[test]
    fn fields_stay_in_range_for_past_anchors() {
        // A spread of totals across unit boundaries.
        for total in [0, 1, 59, 60, 61, 3599, 3600, 86399, 86400, 86401, 10_000_000] {
            let breakdown = Breakdown::from_seconds(total);
            assert!((0..24).contains(&breakdown.hours), "hours for {total}");
            assert!((0..60).contains(&breakdown.minutes), "minutes for {total}");
            assert!((0..60).contains(&breakdown.seconds), "seconds for {total}");
            assert!(breakdown.days >= 0, "days for {total}");
        }
    }

    #[test]
    fn breakdown_reconstructs_total_seconds() {
        for total in [0, 1, 59, 3600, 86399, 86400, 123_456_789, -1, -86401] {
            let breakdown = Breakdown::from_seconds(total);
            assert_eq!(breakdown.total_seconds(), total);
        }
    }

    #[test]
    fn future_anchor_surfaces_negative_fields() {
        let anchor = at("2024-01-02T00:00:10");
        let now = at("2024-01-01T00:00:00");

        let breakdown = Breakdown::between(anchor, now);

        assert_eq!(breakdown.days, -1);
        assert_eq!(breakdown.seconds, -10);
        assert!(breakdown.total_seconds() < 0);
    }

    #[test]
    fn multi_year_anchor_accumulates_days_only() {
        let anchor = at("2023-12-10T00:00:00");
        let now = at("2026-08-05T12:30:45");

        let breakdown = Breakdown::between(anchor, now);

        assert!(breakdown.days > 900);
        assert_eq!(breakdown.hours, 12);
        assert_eq!(breakdown.minutes, 30);
        assert_eq!(breakdown.seconds, 45);
    }

    #[test]
    fn parse_anchor_accepts_iso_local_date_time() {
        assert!(parse_anchor("2023-12-10T00:00:00").is_some());
    }

    #[test]
    fn parse_anchor_rejects_garbage() {
        assert!(parse_anchor("not-a-date").is_none());
        assert!(parse_anchor("").is_none());
        assert!(parse_anchor("2023-13-40T99:99:99").is_none());
    }
}
