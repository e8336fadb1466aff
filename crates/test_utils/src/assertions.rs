//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use domain_rental::Rating;
use infra_db::repositories::analytics::MonthlyProfit;
use rust_decimal::Decimal;

/// Asserts that two Decimal values are approximately equal within a tolerance
///
/// Useful for averaged ratings and profit figures where SQL rounding makes
/// exact comparison brittle.
///
/// # Panics
///
/// Panics if the values differ by more than the tolerance.
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a predicted rating lies within the valid rating range
pub fn assert_predicted_rating_in_range(predicted: Decimal) {
    let min = Decimal::from(Rating::MIN);
    let max = Decimal::from(Rating::MAX);
    assert!(
        predicted >= min && predicted <= max,
        "Predicted rating {} outside the valid range {}..={}",
        predicted,
        min,
        max
    );
}

/// Asserts that a monthly profit report covers exactly January through
/// December, in order
pub fn assert_full_year(profits: &[MonthlyProfit]) {
    assert_eq!(
        profits.len(),
        12,
        "Expected 12 monthly entries, got {}",
        profits.len()
    );
    for (index, entry) in profits.iter().enumerate() {
        assert_eq!(
            entry.month,
            index as i32 + 1,
            "Month at position {} is {}",
            index,
            entry.month
        );
        assert!(
            entry.profit >= Decimal::ZERO,
            "Negative profit {} in month {}",
            entry.profit,
            entry.month
        );
    }
}
