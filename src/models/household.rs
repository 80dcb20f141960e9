//! Household profile model.
//!
//! This module defines the [`HouseholdProfile`] submitted for an eligibility check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The household composition and income submitted for one evaluation.
///
/// Counts are signed so that out-of-domain input survives decoding and can be
/// classified as `invalid-input` instead of failing at the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdProfile {
    /// Number of adults in the household. Valid values are 1 and 2.
    pub adult_count: i64,
    /// Number of children in the household.
    pub child_count: i64,
    /// Whether the adults are married.
    pub is_married: bool,
    /// Whether the household is retired.
    pub is_retired: bool,
    /// Whether a household member is disabled. Not used by the threshold rules.
    pub is_disabled: bool,
    /// Annual gross (pre-tax) household income.
    pub gross_income: Decimal,
    /// Annual net (post-tax) household income.
    pub net_income: Decimal,
}

impl HouseholdProfile {
    /// Returns true if the household has at least one child.
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }

    /// Returns the number of children beyond the first.
    ///
    /// The first child is priced into the base threshold row, so only these
    /// accrue a per-child bonus.
    ///
    /// # Examples
    ///
    /// ```
    /// use housing_eligibility::models::HouseholdProfile;
    /// use rust_decimal::Decimal;
    ///
    /// let profile = HouseholdProfile {
    ///     adult_count: 2,
    ///     child_count: 3,
    ///     is_married: true,
    ///     is_retired: false,
    ///     is_disabled: false,
    ///     gross_income: Decimal::from(50_000),
    ///     net_income: Decimal::from(30_000),
    /// };
    /// assert_eq!(profile.additional_children(), 2);
    /// ```
    pub fn additional_children(&self) -> u32 {
        let extra = self.child_count.saturating_sub(1).max(0);
        u32::try_from(extra).unwrap_or(u32::MAX)
    }

    /// Returns true if the adult and child counts are within the supported domain.
    pub fn has_valid_shape(&self) -> bool {
        matches!(self.adult_count, 1 | 2) && self.child_count >= 0
    }

    /// Returns true if both reported incomes are strictly positive.
    pub fn has_valid_income(&self) -> bool {
        self.gross_income > Decimal::ZERO && self.net_income > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_profile(adult_count: i64, child_count: i64) -> HouseholdProfile {
        HouseholdProfile {
            adult_count,
            child_count,
            is_married: false,
            is_retired: false,
            is_disabled: false,
            gross_income: Decimal::from(40_000),
            net_income: Decimal::from(25_000),
        }
    }

    #[test]
    fn test_deserialize_camel_case_profile() {
        let json = r#"{
            "adultCount": 1,
            "childCount": 2,
            "isDisabled": false,
            "isMarried": true,
            "isRetired": false,
            "grossIncome": 64668,
            "netIncome": "36600.50"
        }"#;

        let profile: HouseholdProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.adult_count, 1);
        assert_eq!(profile.child_count, 2);
        assert!(profile.is_married);
        assert_eq!(profile.gross_income, Decimal::from(64_668));
        assert_eq!(profile.net_income, Decimal::from_str("36600.50").unwrap());
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{
            "adultCount": 1,
            "childCount": 0,
            "isMarried": false,
            "isRetired": false,
            "grossIncome": 1000,
            "netIncome": 1000
        }"#;

        let result: Result<HouseholdProfile, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_domain_counts_still_decode() {
        let json = r#"{
            "adultCount": 3,
            "childCount": -1,
            "isDisabled": false,
            "isMarried": false,
            "isRetired": false,
            "grossIncome": 10000,
            "netIncome": 10000
        }"#;

        let profile: HouseholdProfile = serde_json::from_str(json).unwrap();
        assert!(!profile.has_valid_shape());
    }

    #[test]
    fn test_additional_children() {
        assert_eq!(create_test_profile(1, 0).additional_children(), 0);
        assert_eq!(create_test_profile(1, 1).additional_children(), 0);
        assert_eq!(create_test_profile(1, 2).additional_children(), 1);
        assert_eq!(create_test_profile(2, 5).additional_children(), 4);
        assert_eq!(create_test_profile(2, -4).additional_children(), 0);
        assert_eq!(create_test_profile(2, i64::MIN).additional_children(), 0);
        assert_eq!(create_test_profile(2, i64::MAX).additional_children(), u32::MAX);
    }

    #[test]
    fn test_valid_shape() {
        assert!(create_test_profile(1, 0).has_valid_shape());
        assert!(create_test_profile(2, 7).has_valid_shape());
        assert!(!create_test_profile(0, 0).has_valid_shape());
        assert!(!create_test_profile(3, 0).has_valid_shape());
        assert!(!create_test_profile(1, -1).has_valid_shape());
    }

    #[test]
    fn test_valid_income_requires_both_positive() {
        let mut profile = create_test_profile(1, 0);
        assert!(profile.has_valid_income());

        profile.gross_income = Decimal::ZERO;
        assert!(!profile.has_valid_income());

        profile.gross_income = Decimal::from(1);
        profile.net_income = Decimal::from(-1);
        assert!(!profile.has_valid_income());
    }
}
