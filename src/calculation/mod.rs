//! Eligibility determination logic.
//!
//! This module derives a household's adjusted income limits from the threshold
//! and bonus tables, and classifies the household into Group A, Group B, or
//! ineligible. Every function here is pure over its inputs and the immutable
//! configuration.

mod adjusted_limits;
mod classifier;
mod evaluation;

pub use adjusted_limits::{
    LimitBreakdown, compute_adjusted_limits, compute_child_bonus, compute_limit_breakdown,
};
pub use classifier::{IncomeComparison, classify};
pub use evaluation::{Evaluation, evaluate};
