//! Configuration types for eligibility determination.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML files, and the aggregate [`EligibilityConfig`].

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::bonuses::{BonusTable, BonusType};
use super::thresholds::ThresholdTable;

/// Metadata about the subsidy program the tables belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMetadata {
    /// Short identifier of the program table set.
    pub code: String,
    /// The human-readable name of the program.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
}

/// Which rates the reported `child_bonus` figure is computed with.
///
/// The adjusted thresholds always use the household's own bonus type. The
/// reported figure has historically used single-parent rates for every
/// household; `HouseholdRates` reports the same rates the thresholds use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildBonusReporting {
    /// Report with single-parent rates regardless of adult count.
    #[default]
    SingleRates,
    /// Report with the rates selected by adult count.
    HouseholdRates,
}

impl ChildBonusReporting {
    /// Returns the bonus type used for reporting, given the household's own type.
    pub fn reporting_type(self, household: BonusType) -> BonusType {
        match self {
            ChildBonusReporting::SingleRates => BonusType::Single,
            ChildBonusReporting::HouseholdRates => household,
        }
    }
}

/// Contents of `program.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Program metadata.
    pub program: ProgramMetadata,
    /// Reporting mode for the child bonus figure.
    #[serde(default)]
    pub child_bonus_reporting: ChildBonusReporting,
}

/// The complete eligibility configuration.
///
/// Assembled once at startup and never mutated; every evaluation reads it
/// through the typed lookups of [`ThresholdTable`] and [`BonusTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityConfig {
    metadata: ProgramMetadata,
    thresholds: ThresholdTable,
    bonuses: BonusTable,
    child_bonus_reporting: ChildBonusReporting,
}

static STANDARD: LazyLock<EligibilityConfig> = LazyLock::new(|| {
    EligibilityConfig::new(
        ProgramMetadata {
            code: "default".to_string(),
            name: "Subsidized housing income limits".to_string(),
            version: "1".to_string(),
        },
        ThresholdTable::standard(),
        BonusTable::standard(),
        ChildBonusReporting::default(),
    )
});

impl EligibilityConfig {
    /// Creates a new EligibilityConfig from its component parts.
    pub fn new(
        metadata: ProgramMetadata,
        thresholds: ThresholdTable,
        bonuses: BonusTable,
        child_bonus_reporting: ChildBonusReporting,
    ) -> Self {
        Self {
            metadata,
            thresholds,
            bonuses,
            child_bonus_reporting,
        }
    }

    /// Returns the built-in configuration, built on first use.
    pub fn standard() -> &'static EligibilityConfig {
        &STANDARD
    }

    /// Returns a copy with a different child bonus reporting mode.
    pub fn with_child_bonus_reporting(mut self, mode: ChildBonusReporting) -> Self {
        self.child_bonus_reporting = mode;
        self
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the threshold table.
    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Returns the bonus table.
    pub fn bonuses(&self) -> &BonusTable {
        &self.bonuses
    }

    /// Returns the child bonus reporting mode.
    pub fn child_bonus_reporting(&self) -> ChildBonusReporting {
        self.child_bonus_reporting
    }
}
