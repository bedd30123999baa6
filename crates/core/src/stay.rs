//! Stay intervals and the room availability rule.
//!
//! A stay covers the half-open range `[check_in, check_out)`: the guest
//! occupies the room on the night of `check_in` and leaves on the morning of
//! `check_out`. Two stays on the same room collide iff
//! `a.check_in < b.check_out && b.check_in < a.check_out`, so a guest may check
//! in on the day the previous guest checks out.
//!
//! The database layer runs the same predicate in SQL inside the booking
//! transaction; [`is_available`] is the in-memory form used for previews and
//! tests.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::status::ReservationStatus;
use crate::types::{DbId, StayDate};

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// A validated, non-empty stay. `check_out` is always strictly after `check_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayInterval {
    check_in: StayDate,
    check_out: StayDate,
}

impl StayInterval {
    /// Build an interval, rejecting empty or inverted ranges.
    pub fn new(check_in: StayDate, check_out: StayDate) -> Result<Self, CoreError> {
        if check_out <= check_in {
            return Err(CoreError::Validation(format!(
                "check_out ({check_out}) must be after check_in ({check_in})"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> StayDate {
        self.check_in
    }

    pub fn check_out(&self) -> StayDate {
        self.check_out
    }

    /// Number of nights billed for the stay. Always at least 1.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open intersection test.
    pub fn overlaps(&self, other: &StayInterval) -> bool {
        other.check_out > self.check_in && other.check_in < self.check_out
    }

    /// Whether the guest sleeps in the room on the night of `date`.
    pub fn covers_night(&self, date: StayDate) -> bool {
        self.check_in <= date && date < self.check_out
    }
}

impl fmt::Display for StayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// The slice of a stored reservation that the availability rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedStay {
    pub reservation_id: DbId,
    pub room_id: DbId,
    pub status: ReservationStatus,
    pub interval: StayInterval,
}

impl BookedStay {
    /// Whether this booking prevents `interval` from being booked on `room_id`.
    ///
    /// `exclude` lets an update ignore the reservation being edited.
    pub fn conflicts_with(
        &self,
        room_id: DbId,
        interval: &StayInterval,
        exclude: Option<DbId>,
    ) -> bool {
        self.room_id == room_id
            && Some(self.reservation_id) != exclude
            && self.status.blocks_availability()
            && self.interval.overlaps(interval)
    }
}

/// Returns `true` when no blocking booking for `room_id` overlaps `interval`.
///
/// Pure; calling it twice over the same bookings gives the same answer.
pub fn is_available<'a>(
    bookings: impl IntoIterator<Item = &'a BookedStay>,
    room_id: DbId,
    interval: &StayInterval,
    exclude_reservation_id: Option<DbId>,
) -> bool {
    !bookings
        .into_iter()
        .any(|b| b.conflicts_with(room_id, interval, exclude_reservation_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> StayDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay(from: (u32, u32), to: (u32, u32)) -> StayInterval {
        StayInterval::new(date(2024, from.0, from.1), date(2024, to.0, to.1)).unwrap()
    }

    fn booking(id: DbId, room_id: DbId, status: ReservationStatus, interval: StayInterval) -> BookedStay {
        BookedStay {
            reservation_id: id,
            room_id,
            status,
            interval,
        }
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert_matches!(
            StayInterval::new(date(2024, 1, 4), date(2024, 1, 4)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            StayInterval::new(date(2024, 1, 4), date(2024, 1, 1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn counts_calendar_nights() {
        assert_eq!(stay((1, 1), (1, 4)).nights(), 3);
        assert_eq!(stay((1, 1), (1, 2)).nights(), 1);
        // Across a leap day.
        assert_eq!(stay((2, 28), (3, 1)).nights(), 2);
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        let first = stay((3, 1), (3, 5));
        let second = stay((3, 5), (3, 8));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn partial_and_nested_stays_overlap() {
        let base = stay((3, 1), (3, 5));
        assert!(base.overlaps(&stay((3, 4), (3, 6))));
        assert!(base.overlaps(&stay((2, 27), (3, 2))));
        assert!(base.overlaps(&stay((3, 2), (3, 3))));
        assert!(base.overlaps(&stay((2, 1), (4, 1))));
    }

    #[test]
    fn covers_night_excludes_checkout_day() {
        let s = stay((3, 1), (3, 3));
        assert!(s.covers_night(date(2024, 3, 1)));
        assert!(s.covers_night(date(2024, 3, 2)));
        assert!(!s.covers_night(date(2024, 3, 3)));
    }

    #[test]
    fn empty_room_is_available() {
        let none: [BookedStay; 0] = [];
        assert!(is_available(&none, 5, &stay((3, 1), (3, 5)), None));
    }

    #[test]
    fn self_exclusion_on_update() {
        let r1 = booking(1, 5, ReservationStatus::Active, stay((3, 1), (3, 5)));
        let query = stay((3, 1), (3, 5));

        assert!(!is_available(&[r1], 5, &query, None));
        assert!(is_available(&[r1], 5, &query, Some(1)));
    }

    #[test]
    fn exclusion_only_skips_the_named_reservation() {
        let r1 = booking(1, 5, ReservationStatus::Active, stay((3, 1), (3, 5)));
        let r2 = booking(2, 5, ReservationStatus::Pending, stay((3, 3), (3, 7)));
        assert!(!is_available(&[r1, r2], 5, &stay((3, 1), (3, 5)), Some(1)));
    }

    #[test]
    fn cancelled_and_completed_do_not_block() {
        let bookings = [
            booking(1, 5, ReservationStatus::Cancelled, stay((3, 1), (3, 5))),
            booking(2, 5, ReservationStatus::Completed, stay((3, 1), (3, 5))),
        ];
        assert!(is_available(&bookings, 5, &stay((3, 2), (3, 4)), None));
    }

    #[test]
    fn other_rooms_are_ignored() {
        let r1 = booking(1, 6, ReservationStatus::Active, stay((3, 1), (3, 5)));
        assert!(is_available(&[r1], 5, &stay((3, 1), (3, 5)), None));
    }

    #[test]
    fn repeated_checks_agree() {
        let bookings = [booking(1, 5, ReservationStatus::Active, stay((3, 1), (3, 5)))];
        let query = stay((3, 4), (3, 9));
        let first = is_available(&bookings, 5, &query, None);
        let second = is_available(&bookings, 5, &query, None);
        assert_eq!(first, second);
        assert!(!first);
    }

    #[test]
    fn display_uses_half_open_notation() {
        assert_eq!(stay((3, 1), (3, 5)).to_string(), "[2024-03-01, 2024-03-05)");
    }
}
