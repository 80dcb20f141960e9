//! Eligibility classification.
//!
//! This module applies a household's adjusted limits to its reported income
//! and produces an [`EligibilityResult`].

use crate::models::{
    AdjustedLimits, ChildBonus, EligibilityGroup, EligibilityResult, HouseholdProfile, ReasonCode,
};

/// How a household's incomes compare against its adjusted limits.
///
/// Group A boundaries are inclusive: income equal to the limit qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeComparison {
    /// Gross income at or below the Group A gross limit.
    pub gross_within_a: bool,
    /// Net income at or below the Group A net limit.
    pub net_within_a: bool,
    /// Gross income strictly above the Group B gross ceiling.
    pub gross_exceeds_b: bool,
    /// Net income strictly above the Group B net ceiling.
    pub net_exceeds_b: bool,
}

impl IncomeComparison {
    /// Compares the profile's incomes against `limits`.
    pub fn new(profile: &HouseholdProfile, limits: &AdjustedLimits) -> Self {
        Self {
            gross_within_a: profile.gross_income <= limits.gross_a,
            net_within_a: profile.net_income <= limits.net_a,
            gross_exceeds_b: profile.gross_income > limits.gross_b,
            net_exceeds_b: profile.net_income > limits.net_b,
        }
    }

    /// Returns true if both incomes are within Group A.
    pub fn within_a(&self) -> bool {
        self.gross_within_a && self.net_within_a
    }

    /// Returns the reason code for exceeding a Group B ceiling, if any.
    pub fn group_b_excess(&self) -> Option<ReasonCode> {
        match (self.gross_exceeds_b, self.net_exceeds_b) {
            (true, true) => Some(ReasonCode::BothExceedB),
            (true, false) => Some(ReasonCode::GrossExceedsB),
            (false, true) => Some(ReasonCode::NetExceedsB),
            (false, false) => None,
        }
    }
}

/// Classifies a household against its adjusted limits.
///
/// The decision is a single pass:
///
/// 1. Adult count outside {1, 2} or a negative child count: `invalid-input`.
/// 2. Gross or net income not positive: `invalid-income`.
/// 3. Both incomes within Group A: `GroupA`.
/// 4. Either income above its Group B ceiling: `Ineligible`, with the reason
///    naming which dimension exceeded.
/// 5. Otherwise: `GroupB`.
///
/// For the first two outcomes `limits` and `child_bonus` are discarded and the
/// result carries zeros.
///
/// # Examples
///
/// ```
/// use housing_eligibility::calculation::classify;
/// use housing_eligibility::models::{EligibilityGroup, HouseholdProfile, IncomeLimits, ReasonCode};
/// use rust_decimal::Decimal;
///
/// let profile = HouseholdProfile {
///     adult_count: 1,
///     child_count: 0,
///     is_married: false,
///     is_retired: false,
///     is_disabled: false,
///     gross_income: Decimal::from(52725),
///     net_income: Decimal::from(32956),
/// };
/// let limits = IncomeLimits::new(
///     Decimal::from(38011),
///     Decimal::from(23540),
///     Decimal::from(52724),
///     Decimal::from(32956),
/// );
/// let result = classify(&profile, &limits, &IncomeLimits::ZERO);
/// assert_eq!(result.group, EligibilityGroup::Ineligible);
/// assert_eq!(result.reason_code, ReasonCode::GrossExceedsB);
/// ```
pub fn classify(
    profile: &HouseholdProfile,
    limits: &AdjustedLimits,
    child_bonus: &ChildBonus,
) -> EligibilityResult {
    if !profile.has_valid_shape() {
        return EligibilityResult::rejected(ReasonCode::InvalidInput);
    }
    if !profile.has_valid_income() {
        return EligibilityResult::rejected(ReasonCode::InvalidIncome);
    }

    let comparison = IncomeComparison::new(profile, limits);

    let (group, reason_code) = if comparison.within_a() {
        (EligibilityGroup::GroupA, ReasonCode::GroupAQualified)
    } else if let Some(reason) = comparison.group_b_excess() {
        (EligibilityGroup::Ineligible, reason)
    } else {
        (EligibilityGroup::GroupB, ReasonCode::GroupBQualified)
    };

    EligibilityResult::new(group, reason_code, *limits, *child_bonus)
}
