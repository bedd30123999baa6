//! Charge and balance arithmetic.
//!
//! Amounts are `f64` and mirror `DOUBLE PRECISION` columns. Rounding is only
//! applied to derived presentation values (averages, rates), never to stored
//! charges.

use crate::stay::StayInterval;
use crate::types::StayDate;

/// Total charge for a stay: nightly rate times calendar nights.
///
/// Callers validate `check_out > check_in` first (see [`StayInterval::new`]);
/// an inverted range yields a non-positive result rather than a panic.
pub fn compute_total_charge(nightly_rate: f64, check_in: StayDate, check_out: StayDate) -> f64 {
    nightly_rate * (check_out - check_in).num_days() as f64
}

/// [`compute_total_charge`] over an already validated interval.
pub fn stay_charge(nightly_rate: f64, interval: &StayInterval) -> f64 {
    compute_total_charge(nightly_rate, interval.check_in(), interval.check_out())
}

/// Price of an extra-service line: unit price times quantity.
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    unit_price * f64::from(quantity)
}

/// Amount still owed on a reservation. Never negative; overpayment reads as zero.
pub fn outstanding_balance(total_charge: f64, paid: f64) -> f64 {
    (total_charge - paid).max(0.0)
}

/// Occupied rooms as a percentage of all rooms, rounded to one decimal.
pub fn occupancy_rate(occupied: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    round_to(occupied as f64 / total as f64 * 100.0, 1)
}

/// Mean of the given ratings rounded to two decimals; `None` when empty.
pub fn average_rating(ratings: &[i16]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: f64 = ratings.iter().map(|r| f64::from(*r)).sum();
    Some(round_to(sum / ratings.len() as f64, 2))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> StayDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_nights_at_one_hundred() {
        assert_eq!(
            compute_total_charge(100.0, date(2024, 1, 1), date(2024, 1, 4)),
            300.0
        );
    }

    #[test]
    fn single_night() {
        assert_eq!(
            compute_total_charge(100.0, date(2024, 1, 1), date(2024, 1, 2)),
            100.0
        );
    }

    #[test]
    fn spans_month_and_year_boundaries() {
        assert_eq!(
            compute_total_charge(80.0, date(2023, 12, 30), date(2024, 1, 2)),
            240.0
        );
    }

    #[test]
    fn stay_charge_matches_free_function() {
        let interval = StayInterval::new(date(2024, 3, 1), date(2024, 3, 5)).unwrap();
        assert_eq!(stay_charge(125.5, &interval), 502.0);
    }

    #[test]
    fn line_total_multiplies() {
        assert_eq!(line_total(12.5, 4), 50.0);
    }

    #[test]
    fn balance_is_clamped_at_zero() {
        assert_eq!(outstanding_balance(300.0, 120.0), 180.0);
        assert_eq!(outstanding_balance(300.0, 450.0), 0.0);
    }

    #[test]
    fn occupancy_rate_rounds_to_one_decimal() {
        assert_eq!(occupancy_rate(1, 3), 33.3);
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(4, 4), 100.0);
    }

    #[test]
    fn average_rating_rounds_to_two_decimals() {
        assert_eq!(average_rating(&[5, 4, 4]), Some(4.33));
        assert_eq!(average_rating(&[]), None);
    }
}
