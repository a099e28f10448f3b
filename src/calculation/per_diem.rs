//! Per-diem ("diet") allowance calculation.
//!
//! The allowance is a fixed amount selected by the planned length of the
//! shift. Shifts shorter than five hours, and shifts not flagged as eligible,
//! receive nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DietRates;

/// Minimum planned span, in hours, that earns a per-diem.
pub const DIET_MIN_HOURS: i64 = 5;

/// Planned span, in hours, at which the second tier starts.
pub const DIET_TIER_2_HOURS: i64 = 12;

/// Planned span, in hours, at which the third tier starts.
pub const DIET_TIER_3_HOURS: i64 = 18;

/// The per-diem tier a shift falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietTier {
    /// Not eligible, or shorter than five hours.
    None,
    /// Five to twelve hours.
    FiveToTwelve,
    /// Twelve to eighteen hours.
    TwelveToEighteen,
    /// Eighteen hours or more.
    EighteenPlus,
}

impl DietTier {
    /// Selects the tier for a planned span.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_ledger::calculation::DietTier;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DietTier::for_duration(Decimal::from(12), true), DietTier::TwelveToEighteen);
    /// assert_eq!(DietTier::for_duration(Decimal::from(12), false), DietTier::None);
    /// ```
    pub fn for_duration(duration_hours: Decimal, eligible: bool) -> Self {
        if !eligible || duration_hours < Decimal::from(DIET_MIN_HOURS) {
            DietTier::None
        } else if duration_hours < Decimal::from(DIET_TIER_2_HOURS) {
            DietTier::FiveToTwelve
        } else if duration_hours < Decimal::from(DIET_TIER_3_HOURS) {
            DietTier::TwelveToEighteen
        } else {
            DietTier::EighteenPlus
        }
    }

    /// Returns the amount paid for this tier under `rates`.
    pub fn amount(&self, rates: &DietRates) -> Decimal {
        match self {
            DietTier::None => Decimal::ZERO,
            DietTier::FiveToTwelve => rates.five_to_twelve,
            DietTier::TwelveToEighteen => rates.twelve_to_eighteen,
            DietTier::EighteenPlus => rates.eighteen_plus,
        }
    }
}

/// Calculates the per-diem allowance for a shift.
///
/// # Arguments
///
/// * `duration_hours` - The planned span of the shift in hours
/// * `eligible` - Whether the shift qualifies for a per-diem at all
/// * `rates` - The rate table to take tier amounts from
///
/// # Examples
///
/// ```
/// use attendance_ledger::calculation::calculate_diet;
/// use attendance_ledger::config::DietRates;
/// use rust_decimal::Decimal;
///
/// let rates = DietRates::default();
/// assert_eq!(calculate_diet(Decimal::from(8), true, &rates), Decimal::from(166));
/// assert_eq!(calculate_diet(Decimal::from(4), true, &rates), Decimal::ZERO);
/// ```
pub fn calculate_diet(duration_hours: Decimal, eligible: bool, rates: &DietRates) -> Decimal {
    DietTier::for_duration(duration_hours, eligible).amount(rates)
}
