//! Mechanic rating running average.
//!
//! A mechanic's rating is always the arithmetic mean of every review
//! rating received, stored to 2 decimal places alongside the count of
//! contributing reviews. Folding a new review in only needs the current
//! mean and count, so review submission never rescans review history.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::money::round2;

/// Lowest rating a review may carry (strict mode only).
pub const MIN_RATING: i32 = 1;
/// Highest rating a review may carry (strict mode only).
pub const MAX_RATING: i32 = 5;

/// Fold one new review rating into a running average.
///
/// Returns the new mean rounded to 2 decimal places. The stored mean is
/// itself already rounded, so long review histories accumulate a small
/// bias; that matches how the service has always computed it.
pub fn fold_review(current: Decimal, review_count: i32, new_rating: i32) -> Decimal {
    let count = Decimal::from(review_count);
    let total = current * count + Decimal::from(new_rating);
    round2(total / (count + Decimal::ONE))
}

/// Reject ratings outside 1..=5. Only consulted in strict mode; the
/// permissive default accepts any integer, as the service always has.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Review rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}
