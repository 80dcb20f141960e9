//! User-facing texts for classification outcomes.
//!
//! The engine only produces reason codes; the German texts shown to applicants
//! are derived here.

use crate::models::{EligibilityGroup, ReasonCode};

/// Returns the applicant-facing explanation for a reason code.
pub fn localized_reason(reason_code: ReasonCode) -> &'static str {
    match reason_code {
        ReasonCode::InvalidInput => "Ungültige Eingabedaten. Bitte überprüfen Sie Ihre Angaben.",
        ReasonCode::InvalidIncome => "Das Einkommen muss größer als 0 sein.",
        ReasonCode::GroupAQualified => "Sie erfüllen die Voraussetzungen für Gruppe A.",
        ReasonCode::BothExceedB => {
            "Ihr Brutto- und Nettoeinkommen liegen über den zulässigen Grenzen."
        }
        ReasonCode::GrossExceedsB => "Ihr Bruttoeinkommen liegt über der zulässigen Grenze.",
        ReasonCode::NetExceedsB => "Ihr Nettoeinkommen liegt über der zulässigen Grenze.",
        ReasonCode::GroupBQualified => "Sie erfüllen die Voraussetzungen für Gruppe B.",
    }
}

/// Returns the applicant-facing name of a group.
pub fn group_label(group: EligibilityGroup) -> &'static str {
    match group {
        EligibilityGroup::GroupA => "Gruppe A",
        EligibilityGroup::GroupB => "Gruppe B",
        EligibilityGroup::Ineligible => "Nicht Förderungsfähig",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceed_reasons_are_distinct() {
        let texts = [
            localized_reason(ReasonCode::BothExceedB),
            localized_reason(ReasonCode::GrossExceedsB),
            localized_reason(ReasonCode::NetExceedsB),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(group_label(EligibilityGroup::GroupA), "Gruppe A");
        assert_eq!(group_label(EligibilityGroup::Ineligible), "Nicht Förderungsfähig");
    }
}
