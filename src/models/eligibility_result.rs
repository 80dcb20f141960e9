//! Eligibility result models.
//!
//! This module contains the [`EligibilityResult`] returned by every evaluation,
//! together with the tier and reason code enums it carries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::IncomeLimits;

/// The eligibility tier a household was classified into.
///
/// # Example
///
/// ```
/// use housing_eligibility::models::EligibilityGroup;
///
/// assert_eq!(serde_json::to_string(&EligibilityGroup::GroupA).unwrap(), "\"GroupA\"");
/// assert!(EligibilityGroup::GroupB.is_eligible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EligibilityGroup {
    /// The stricter, lower-income tier.
    GroupA,
    /// The looser tier above Group A.
    GroupB,
    /// Not eligible for either tier.
    Ineligible,
}

impl EligibilityGroup {
    /// Returns true for Group A and Group B.
    pub fn is_eligible(self) -> bool {
        !matches!(self, EligibilityGroup::Ineligible)
    }
}

/// Stable, machine-readable reason for a classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    /// Adult count outside {1, 2} or a negative child count.
    #[serde(rename = "invalid-input")]
    InvalidInput,
    /// Gross or net income was zero or negative.
    #[serde(rename = "invalid-income")]
    InvalidIncome,
    /// Both incomes within the Group A limits.
    #[serde(rename = "group-a-qualified")]
    GroupAQualified,
    /// Both incomes above the Group B ceilings.
    #[serde(rename = "both-exceed-b")]
    BothExceedB,
    /// Only gross income above the Group B ceiling.
    #[serde(rename = "gross-exceeds-b")]
    GrossExceedsB,
    /// Only net income above the Group B ceiling.
    #[serde(rename = "net-exceeds-b")]
    NetExceedsB,
    /// Outside Group A but within both Group B ceilings.
    #[serde(rename = "group-b-qualified")]
    GroupBQualified,
}

impl ReasonCode {
    /// Returns the wire representation of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::InvalidInput => "invalid-input",
            ReasonCode::InvalidIncome => "invalid-income",
            ReasonCode::GroupAQualified => "group-a-qualified",
            ReasonCode::BothExceedB => "both-exceed-b",
            ReasonCode::GrossExceedsB => "gross-exceeds-b",
            ReasonCode::NetExceedsB => "net-exceeds-b",
            ReasonCode::GroupBQualified => "group-b-qualified",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one eligibility evaluation.
///
/// An ineligible household is a valid answer, not an error. `child_bonus` is
/// reported for every outcome; it is zero only when limits were never computed
/// or the household has at most one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    /// Whether the household qualifies for either tier.
    pub eligible: bool,
    /// The tier the household was classified into.
    pub group: EligibilityGroup,
    /// Why the household landed in `group`.
    pub reason_code: ReasonCode,
    /// The thresholds the incomes were compared against.
    pub adjusted_limits: IncomeLimits,
    /// The bonus attributable to additional children.
    pub child_bonus: IncomeLimits,
}

impl EligibilityResult {
    /// Creates a result for the given group; `eligible` follows from the group.
    pub fn new(
        group: EligibilityGroup,
        reason_code: ReasonCode,
        adjusted_limits: IncomeLimits,
        child_bonus: IncomeLimits,
    ) -> Self {
        Self {
            eligible: group.is_eligible(),
            group,
            reason_code,
            adjusted_limits,
            child_bonus,
        }
    }

    /// Creates an ineligible result for input that was rejected before any
    /// limits were computed. All figures are zero.
    pub fn rejected(reason_code: ReasonCode) -> Self {
        Self::new(
            EligibilityGroup::Ineligible,
            reason_code,
            IncomeLimits::ZERO,
            IncomeLimits::ZERO,
        )
    }
}
