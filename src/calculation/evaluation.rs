//! End-to-end evaluation of a household profile.
//!
//! [`evaluate`] validates the profile, derives limits only for valid input,
//! classifies, and records each rule it applied in an [`AuditTrace`].

use serde_json::json;

use crate::config::EligibilityConfig;
use crate::error::EngineResult;
use crate::models::{AuditTrace, EligibilityResult, HouseholdProfile, IncomeLimits, ReasonCode};

use super::adjusted_limits::{compute_child_bonus, compute_limit_breakdown};
use super::classifier::{IncomeComparison, classify};

/// The result of an evaluation together with its decision trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The classification outcome.
    pub result: EligibilityResult,
    /// The rules applied, in order.
    pub audit_trace: AuditTrace,
}

/// Evaluates a household against the configured tables.
///
/// Identical input always yields an identical `Evaluation`; nothing here
/// reads clocks, randomness, or shared mutable state.
///
/// # Errors
///
/// Only configuration errors are returned. Out-of-domain input is classified
/// as `Ineligible` with an `invalid-input` or `invalid-income` reason.
///
/// # Examples
///
/// ```
/// use housing_eligibility::calculation::evaluate;
/// use housing_eligibility::config::EligibilityConfig;
/// use housing_eligibility::models::{EligibilityGroup, HouseholdProfile};
/// use rust_decimal::Decimal;
///
/// let profile = HouseholdProfile {
///     adult_count: 1,
///     child_count: 0,
///     is_married: false,
///     is_retired: false,
///     is_disabled: false,
///     gross_income: Decimal::from(38011),
///     net_income: Decimal::from(23540),
/// };
/// let evaluation = evaluate(&profile, EligibilityConfig::standard()).unwrap();
/// assert_eq!(evaluation.result.group, EligibilityGroup::GroupA);
/// ```
pub fn evaluate(
    profile: &HouseholdProfile,
    config: &EligibilityConfig,
) -> EngineResult<Evaluation> {
    let mut audit_trace = AuditTrace::default();

    let rejection = if !profile.has_valid_shape() {
        Some(ReasonCode::InvalidInput)
    } else if !profile.has_valid_income() {
        Some(ReasonCode::InvalidIncome)
    } else {
        None
    };

    audit_trace.record(
        "input_validation",
        "Input Validation",
        json!({
            "adult_count": profile.adult_count,
            "child_count": profile.child_count,
            "gross_income": profile.gross_income.to_string(),
            "net_income": profile.net_income.to_string()
        }),
        json!({
            "valid": rejection.is_none(),
            "reason_code": rejection.map(ReasonCode::as_str)
        }),
        match rejection {
            Some(ReasonCode::InvalidInput) => format!(
                "Household of {} adults and {} children is outside the supported shapes",
                profile.adult_count, profile.child_count
            ),
            Some(_) => "Gross and net income must both be greater than zero".to_string(),
            None => "Household shape and income are valid".to_string(),
        },
    );

    if rejection.is_some() {
        let result = classify(profile, &IncomeLimits::ZERO, &IncomeLimits::ZERO);
        return Ok(Evaluation {
            result,
            audit_trace,
        });
    }

    let breakdown = compute_limit_breakdown(profile, config)?;
    let limits = breakdown.adjusted;
    audit_trace.record(
        "adjusted_limits",
        "Adjusted Limits",
        json!({
            "adult_count": profile.adult_count,
            "has_children": profile.has_children(),
            "is_retired": profile.is_retired,
            "is_married": profile.is_married,
            "additional_children": profile.additional_children(),
            "bonus_type": breakdown.bonus_type
        }),
        json!({
            "base": limits_json(&breakdown.base.as_limits()),
            "child_increase": limits_json(&breakdown.child_increase),
            "marriage_bonus": breakdown.marriage_bonus.to_string(),
            "adjusted": limits_json(&limits)
        }),
        format!(
            "Group A limits gross {} / net {}, Group B limits gross {} / net {}",
            limits.gross_a, limits.net_a, limits.gross_b, limits.net_b
        ),
    );

    let child_bonus = compute_child_bonus(profile, config);
    let comparison = IncomeComparison::new(profile, &limits);

    audit_trace.record(
        "group_a_test",
        "Group A Test",
        json!({
            "gross_income": profile.gross_income.to_string(),
            "net_income": profile.net_income.to_string(),
            "gross_limit": limits.gross_a.to_string(),
            "net_limit": limits.net_a.to_string()
        }),
        json!({
            "gross_within": comparison.gross_within_a,
            "net_within": comparison.net_within_a
        }),
        if comparison.within_a() {
            "Both incomes are within the Group A limits".to_string()
        } else {
            "Income exceeds the Group A limits".to_string()
        },
    );

    if !comparison.within_a() {
        let excess = comparison.group_b_excess();
        audit_trace.record(
            "group_b_ceiling_test",
            "Group B Ceiling Test",
            json!({
                "gross_income": profile.gross_income.to_string(),
                "net_income": profile.net_income.to_string(),
                "gross_ceiling": limits.gross_b.to_string(),
                "net_ceiling": limits.net_b.to_string()
            }),
            json!({
                "gross_exceeds": comparison.gross_exceeds_b,
                "net_exceeds": comparison.net_exceeds_b
            }),
            match excess {
                Some(reason) => format!("Income exceeds the Group B ceiling ({})", reason),
                None => "Both incomes are within the Group B ceilings".to_string(),
            },
        );
    }

    Ok(Evaluation {
        result: classify(profile, &limits, &child_bonus),
        audit_trace,
    })
}

fn limits_json(limits: &IncomeLimits) -> serde_json::Value {
    json!({
        "gross_a": limits.gross_a.to_string(),
        "net_a": limits.net_a.to_string(),
        "gross_b": limits.gross_b.to_string(),
        "net_b": limits.net_b.to_string()
    })
}
