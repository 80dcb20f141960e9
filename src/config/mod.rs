//! Configuration loading and management for the eligibility engine.
//!
//! This module provides the threshold and bonus tables, either built in or
//! loaded from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use housing_eligibility::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded program: {}", config.program().name);
//! ```

mod bonuses;
mod loader;
mod thresholds;
mod types;

pub use bonuses::{BonusRow, BonusTable, BonusType};
pub use loader::ConfigLoader;
pub use thresholds::{ThresholdRow, ThresholdTable};
pub use types::{ChildBonusReporting, EligibilityConfig, ProgramConfig, ProgramMetadata};
