//! Adjusted threshold calculation.
//!
//! This module combines the base threshold row for a household with the bonuses
//! for additional children and marriage.

use rust_decimal::Decimal;

use crate::config::{BonusType, EligibilityConfig, ThresholdRow};
use crate::error::EngineResult;
use crate::models::{AdjustedLimits, ChildBonus, HouseholdProfile, IncomeLimits};

/// The components that make up a household's adjusted limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitBreakdown {
    /// The base row selected by household shape.
    pub base: ThresholdRow,
    /// The bonus rates applied to the thresholds.
    pub bonus_type: BonusType,
    /// The increase from children beyond the first, at `bonus_type` rates.
    pub child_increase: IncomeLimits,
    /// The amount added to both gross thresholds for married households.
    pub marriage_bonus: Decimal,
    /// Base plus bonuses.
    pub adjusted: AdjustedLimits,
}

/// Computes the adjusted limits and the components they were built from.
///
/// # Algorithm
///
/// 1. Select the base row by children present, adult count and retirement.
/// 2. If there are children, add the household's per-child rates times the
///    number of children beyond the first.
/// 3. If married, add the marriage bonus to both gross thresholds. Net
///    thresholds never depend on marital status.
///
/// # Errors
///
/// Returns `InvalidHouseholdShape` if the adult count has no threshold row.
pub fn compute_limit_breakdown(
    profile: &HouseholdProfile,
    config: &EligibilityConfig,
) -> EngineResult<LimitBreakdown> {
    let has_children = profile.has_children();
    let base = config.thresholds().base_thresholds(
        profile.adult_count,
        has_children,
        profile.is_retired,
    )?;

    let bonus_type = BonusType::for_adult_count(profile.adult_count);
    let child_increase = if has_children {
        config
            .bonuses()
            .child_bonus(bonus_type)
            .for_children(profile.additional_children())
    } else {
        IncomeLimits::ZERO
    };

    let marriage_bonus = if profile.is_married {
        config.bonuses().marriage_bonus()
    } else {
        Decimal::ZERO
    };

    let adjusted = (base.as_limits() + child_increase).with_gross_increase(marriage_bonus);

    Ok(LimitBreakdown {
        base,
        bonus_type,
        child_increase,
        marriage_bonus,
        adjusted,
    })
}

/// Computes the adjusted limits for a household.
///
/// # Examples
///
/// ```
/// use housing_eligibility::calculation::compute_adjusted_limits;
/// use housing_eligibility::config::EligibilityConfig;
/// use housing_eligibility::models::HouseholdProfile;
/// use rust_decimal::Decimal;
///
/// let profile = HouseholdProfile {
///     adult_count: 1,
///     child_count: 2,
///     is_married: true,
///     is_retired: false,
///     is_disabled: false,
///     gross_income: Decimal::from(64668),
///     net_income: Decimal::from(36600),
/// };
/// let limits = compute_adjusted_limits(&profile, EligibilityConfig::standard()).unwrap();
/// assert_eq!(limits.gross_a, Decimal::from(64668));
/// assert_eq!(limits.net_a, Decimal::from(36600));
/// ```
pub fn compute_adjusted_limits(
    profile: &HouseholdProfile,
    config: &EligibilityConfig,
) -> EngineResult<AdjustedLimits> {
    Ok(compute_limit_breakdown(profile, config)?.adjusted)
}

/// Computes the child bonus figure reported alongside a classification.
///
/// Zero for households without children. Otherwise the rates follow the
/// configured [`ChildBonusReporting`](crate::config::ChildBonusReporting) mode.
pub fn compute_child_bonus(profile: &HouseholdProfile, config: &EligibilityConfig) -> ChildBonus {
    if !profile.has_children() {
        return IncomeLimits::ZERO;
    }

    let bonus_type = config
        .child_bonus_reporting()
        .reporting_type(BonusType::for_adult_count(profile.adult_count));

    config
        .bonuses()
        .child_bonus(bonus_type)
        .for_children(profile.additional_children())
}
