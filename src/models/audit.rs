//! Decision trace models.
//!
//! Each evaluation records the rules it applied, in order, so that a decision
//! can be explained after the fact.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered list of rules applied during one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The steps in the order they were applied.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Appends a step, numbering it after the steps already recorded.
    pub fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    /// Returns the rule ids in the order they were applied.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.rule_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_numbers_steps_sequentially() {
        let mut trace = AuditTrace::default();
        trace.record("a", "A", json!({}), json!({}), "first".to_string());
        trace.record("b", "B", json!({}), json!({}), "second".to_string());

        assert_eq!(trace.steps[0].step_number, 1);
        assert_eq!(trace.steps[1].step_number, 2);
        assert_eq!(trace.rule_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let mut trace = AuditTrace::default();
        trace.record(
            "input_validation",
            "Input Validation",
            json!({"adult_count": 1}),
            json!({"valid": true}),
            "ok".to_string(),
        );
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["steps"][0]["ruleId"], "input_validation");
        assert_eq!(json["steps"][0]["stepNumber"], 1);
    }
}
