//! Child and marriage bonus amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::IncomeLimits;

/// Which child-bonus rates apply to a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusType {
    /// One adult.
    Single,
    /// Two adults.
    Couple,
}

impl BonusType {
    /// Selects the bonus type for an adult count: one adult is `Single`,
    /// anything else is `Couple`.
    pub fn for_adult_count(adult_count: i64) -> Self {
        if adult_count == 1 {
            BonusType::Single
        } else {
            BonusType::Couple
        }
    }
}

/// Threshold increase per additional child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BonusRow {
    /// Group A gross increase per additional child.
    pub gross_a: Decimal,
    /// Group A net increase per additional child.
    pub net_a: Decimal,
    /// Group B gross increase per additional child.
    pub gross_b: Decimal,
    /// Group B net increase per additional child.
    pub net_b: Decimal,
}

impl BonusRow {
    /// Creates a row from whole currency amounts.
    pub fn from_amounts(gross_a: i64, net_a: i64, gross_b: i64, net_b: i64) -> Self {
        Self {
            gross_a: Decimal::from(gross_a),
            net_a: Decimal::from(net_a),
            gross_b: Decimal::from(gross_b),
            net_b: Decimal::from(net_b),
        }
    }

    /// Returns the total increase for `additional_children` children.
    pub fn for_children(&self, additional_children: u32) -> IncomeLimits {
        IncomeLimits::new(self.gross_a, self.net_a, self.gross_b, self.net_b)
            .scaled(additional_children)
    }

    fn is_non_negative(&self) -> bool {
        [self.gross_a, self.net_a, self.gross_b, self.net_b]
            .iter()
            .all(|v| *v >= Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ChildBonusRates {
    single: BonusRow,
    couple: BonusRow,
}

/// Immutable lookup of the per-child bonus rates and the marriage bonus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BonusTable {
    child_bonus: ChildBonusRates,
    marriage_bonus: Decimal,
}

impl BonusTable {
    /// Returns the per-additional-child rates for a bonus type.
    pub fn child_bonus(&self, bonus_type: BonusType) -> BonusRow {
        match bonus_type {
            BonusType::Single => self.child_bonus.single,
            BonusType::Couple => self.child_bonus.couple,
        }
    }

    /// Returns the amount added to the gross thresholds of married households.
    pub fn marriage_bonus(&self) -> Decimal {
        self.marriage_bonus
    }

    /// Returns true if no amount in the table is negative.
    pub fn is_non_negative(&self) -> bool {
        self.child_bonus.single.is_non_negative()
            && self.child_bonus.couple.is_non_negative()
            && self.marriage_bonus >= Decimal::ZERO
    }

    /// The bonuses the program ships with.
    pub fn standard() -> Self {
        Self {
            child_bonus: ChildBonusRates {
                single: BonusRow::from_amounts(5297, 7390, 9916, 10346),
                couple: BonusRow::from_amounts(11547, 7390, 16166, 10346),
            },
            marriage_bonus: Decimal::from(6250),
        }
    }
}
