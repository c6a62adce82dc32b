//! Currency arithmetic for booking totals.
//!
//! All monetary amounts are [`rust_decimal::Decimal`] end to end; floats
//! only appear at the outermost view-serialization edge (see the store
//! crate's `views` module). The platform keeps 20% of a booking's total
//! and pays the mechanic the remaining 80%.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Share of a booking total retained by the platform.
pub const PLATFORM_FEE_RATE: Decimal = dec!(0.20);

/// Share of a booking total paid out to the mechanic.
pub const MECHANIC_PAYOUT_RATE: Decimal = dec!(0.80);

/// A booking total split into the platform's and the mechanic's share.
///
/// Both legs are rounded to 2 decimal places *independently*, so for some
/// totals `platform_fee + mechanic_payout` differs from the total by one
/// cent. That matches the upstream billing behaviour and is deliberately
/// not corrected here; [`FeeSplit::drifts_from`] lets callers detect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub platform_fee: Decimal,
    pub mechanic_payout: Decimal,
}

impl FeeSplit {
    /// Compute the 20/80 split of a booking total.
    pub fn of_total(total: Decimal) -> Self {
        Self {
            platform_fee: round2(total * PLATFORM_FEE_RATE),
            mechanic_payout: round2(total * MECHANIC_PAYOUT_RATE),
        }
    }

    /// True when independent rounding made the two legs disagree with
    /// the original total.
    pub fn drifts_from(&self, total: Decimal) -> bool {
        self.platform_fee + self.mechanic_payout != round2(total)
    }
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_of_75_is_15_and_60() {
        let split = FeeSplit::of_total(dec!(75.00));
        assert_eq!(split.platform_fee, dec!(15.00));
        assert_eq!(split.mechanic_payout, dec!(60.00));
        assert!(!split.drifts_from(dec!(75.00)));
    }

    #[test]
    fn split_of_250_is_50_and_200() {
        let split = FeeSplit::of_total(dec!(250.00));
        assert_eq!(split.platform_fee, dec!(50.00));
        assert_eq!(split.mechanic_payout, dec!(200.00));
    }

    #[test]
    fn split_handles_sub_cent_totals() {
        let split = FeeSplit::of_total(dec!(99.99));
        assert_eq!(split.platform_fee, dec!(20.00));
        assert_eq!(split.mechanic_payout, dec!(79.99));
        assert!(!split.drifts_from(dec!(99.99)));
    }

    // For totals with exactly 2 decimal places the two rounding errors
    // always cancel, but sub-cent totals can lose a cent across the two
    // independently rounded legs. Upstream billing behaves this way, so
    // the split does too.
    #[test]
    fn split_preserves_upstream_rounding_drift() {
        // 0.20 * 10.005 = 2.001 -> 2.00, 0.80 * 10.005 = 8.004 -> 8.00,
        // while the total itself rounds to 10.01.
        let split = FeeSplit::of_total(dec!(10.005));
        assert_eq!(split.platform_fee, dec!(2.00));
        assert_eq!(split.mechanic_payout, dec!(8.00));
        assert!(split.drifts_from(dec!(10.005)));
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(dec!(2.005)), dec!(2.01));
        assert_eq!(round2(dec!(-2.005)), dec!(-2.01));
        assert_eq!(round2(dec!(2.004)), dec!(2.00));
    }
}
