//! Core data models for the eligibility engine.
//!
//! Every model here is created per evaluation, consumed once and discarded.

mod audit;
mod eligibility_result;
mod household;
mod limits;

pub use audit::{AuditStep, AuditTrace};
pub use eligibility_result::{EligibilityGroup, EligibilityResult, ReasonCode};
pub use household::HouseholdProfile;
pub use limits::{AdjustedLimits, ChildBonus, IncomeLimits};
