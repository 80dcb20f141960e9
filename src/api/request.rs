//! Request types for the eligibility API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HouseholdProfile;

/// Request body for the `/api/check-eligibility` endpoint.
///
/// All seven fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    /// Number of adults in the household.
    pub adult_count: i64,
    /// Number of children in the household.
    pub child_count: i64,
    /// Whether a household member is disabled.
    pub is_disabled: bool,
    /// Whether the adults are married.
    pub is_married: bool,
    /// Whether the household is retired.
    pub is_retired: bool,
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Annual net income.
    pub net_income: Decimal,
}

impl From<EligibilityRequest> for HouseholdProfile {
    fn from(req: EligibilityRequest) -> Self {
        HouseholdProfile {
            adult_count: req.adult_count,
            child_count: req.child_count,
            is_married: req.is_married,
            is_retired: req.is_retired,
            is_disabled: req.is_disabled,
            gross_income: req.gross_income,
            net_income: req.net_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request_with_numeric_incomes() {
        let json = r#"{
            "adultCount": 2,
            "childCount": 1,
            "isDisabled": true,
            "isMarried": true,
            "isRetired": false,
            "grossIncome": 51000.5,
            "netIncome": 30000
        }"#;

        let request: EligibilityRequest = serde_json::from_str(json).unwrap();
        let profile: HouseholdProfile = request.into();
        assert_eq!(profile.adult_count, 2);
        assert!(profile.is_disabled);
        assert_eq!(profile.gross_income, Decimal::new(510005, 1));
        assert_eq!(profile.net_income, Decimal::from(30000));
    }

    #[test]
    fn test_missing_is_disabled_is_rejected() {
        let json = r#"{
            "adultCount": 2,
            "childCount": 1,
            "isMarried": true,
            "isRetired": false,
            "grossIncome": 51000,
            "netIncome": 30000
        }"#;

        let result: Result<EligibilityRequest, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("isDisabled"));
    }
}
