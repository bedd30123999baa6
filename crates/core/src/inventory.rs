//! Stock level adjustments.

use crate::error::CoreError;

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    Increase,
    Decrease,
}

/// Reject zero or negative adjustment amounts.
pub fn validate_adjustment_amount(amount: i32) -> Result<(), CoreError> {
    if amount <= 0 {
        return Err(CoreError::Validation(format!(
            "Adjustment amount must be positive, got {amount}"
        )));
    }
    Ok(())
}

/// Compute the new stock level, refusing to go below zero.
pub fn apply_adjustment(
    current: i32,
    adjustment: StockAdjustment,
    amount: i32,
) -> Result<i32, CoreError> {
    validate_adjustment_amount(amount)?;
    match adjustment {
        StockAdjustment::Increase => current
            .checked_add(amount)
            .ok_or_else(|| CoreError::Validation("Stock level overflow".into())),
        StockAdjustment::Decrease if amount > current => Err(CoreError::Validation(format!(
            "Insufficient stock: {current} on hand, {amount} requested"
        ))),
        StockAdjustment::Decrease => Ok(current - amount),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn increase_adds() {
        assert_eq!(apply_adjustment(3, StockAdjustment::Increase, 7).unwrap(), 10);
    }

    #[test]
    fn decrease_to_exactly_zero_is_allowed() {
        assert_eq!(apply_adjustment(4, StockAdjustment::Decrease, 4).unwrap(), 0);
    }

    #[test]
    fn decrease_below_zero_is_rejected() {
        assert_matches!(
            apply_adjustment(2, StockAdjustment::Decrease, 3),
            Err(CoreError::Validation(msg)) if msg.contains("Insufficient stock")
        );
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert_matches!(
            apply_adjustment(2, StockAdjustment::Increase, 0),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            apply_adjustment(2, StockAdjustment::Decrease, -1),
            Err(CoreError::Validation(_))
        );
    }
}
