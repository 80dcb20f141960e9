//! Income limit figures.
//!
//! [`IncomeLimits`] carries the four figures that every threshold-related value
//! in the engine shares: gross and net limits for Group A and Group B.

use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross and net income figures for both eligibility tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeLimits {
    /// Group A gross income figure.
    pub gross_a: Decimal,
    /// Group A net income figure.
    pub net_a: Decimal,
    /// Group B gross income figure.
    pub gross_b: Decimal,
    /// Group B net income figure.
    pub net_b: Decimal,
}

/// Base thresholds plus child and marriage bonuses for one household.
pub type AdjustedLimits = IncomeLimits;

/// Per-dimension increase attributable to additional children.
pub type ChildBonus = IncomeLimits;

impl IncomeLimits {
    /// All four figures set to zero.
    pub const ZERO: Self = Self {
        gross_a: Decimal::ZERO,
        net_a: Decimal::ZERO,
        gross_b: Decimal::ZERO,
        net_b: Decimal::ZERO,
    };

    /// Creates a new set of limits.
    pub fn new(gross_a: Decimal, net_a: Decimal, gross_b: Decimal, net_b: Decimal) -> Self {
        Self {
            gross_a,
            net_a,
            gross_b,
            net_b,
        }
    }

    /// Multiplies every figure by `factor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use housing_eligibility::models::IncomeLimits;
    /// use rust_decimal::Decimal;
    ///
    /// let per_child = IncomeLimits::new(
    ///     Decimal::from(5297),
    ///     Decimal::from(7390),
    ///     Decimal::from(9916),
    ///     Decimal::from(10346),
    /// );
    /// assert_eq!(per_child.scaled(2).gross_a, Decimal::from(10594));
    /// assert_eq!(per_child.scaled(0), IncomeLimits::ZERO);
    /// ```
    pub fn scaled(&self, factor: u32) -> Self {
        let factor = Decimal::from(factor);
        Self {
            gross_a: self.gross_a * factor,
            net_a: self.net_a * factor,
            gross_b: self.gross_b * factor,
            net_b: self.net_b * factor,
        }
    }

    /// Adds `amount` to both gross figures, leaving the net figures untouched.
    pub fn with_gross_increase(&self, amount: Decimal) -> Self {
        Self {
            gross_a: self.gross_a + amount,
            gross_b: self.gross_b + amount,
            ..*self
        }
    }

    /// Returns true if every figure is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for IncomeLimits {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            gross_a: self.gross_a + rhs.gross_a,
            net_a: self.net_a + rhs.net_a,
            gross_b: self.gross_b + rhs.gross_b,
            net_b: self.net_b + rhs.net_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(gross_a: i64, net_a: i64, gross_b: i64, net_b: i64) -> IncomeLimits {
        IncomeLimits::new(
            Decimal::from(gross_a),
            Decimal::from(net_a),
            Decimal::from(gross_b),
            Decimal::from(net_b),
        )
    }

    #[test]
    fn test_add_is_component_wise() {
        let sum = limits(1, 2, 3, 4) + limits(10, 20, 30, 40);
        assert_eq!(sum, limits(11, 22, 33, 44));
    }

    #[test]
    fn test_gross_increase_leaves_net_untouched() {
        let raised = limits(100, 50, 200, 80).with_gross_increase(Decimal::from(6250));
        assert_eq!(raised, limits(6350, 50, 6450, 80));
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(IncomeLimits::default(), IncomeLimits::ZERO);
        assert!(IncomeLimits::ZERO.is_zero());
        assert!(!limits(0, 0, 0, 1).is_zero());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(limits(1, 2, 3, 4)).unwrap();
        assert_eq!(json["grossA"], "1");
        assert_eq!(json["netA"], "2");
        assert_eq!(json["grossB"], "3");
        assert_eq!(json["netB"], "4");
    }
}
