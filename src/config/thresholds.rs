//! Base income thresholds by household shape.
//!
//! The raw rows stay private to [`ThresholdTable`]; the rest of the engine only
//! sees them through [`ThresholdTable::base_thresholds`].

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::IncomeLimits;

/// Base gross and net thresholds for both tiers.
///
/// Group B is the looser tier, so a well-formed row has `gross_b >= gross_a`
/// and `net_b >= net_a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ThresholdRow {
    /// Group A gross income threshold.
    pub gross_a: Decimal,
    /// Group A net income threshold.
    pub net_a: Decimal,
    /// Group B gross income threshold.
    pub gross_b: Decimal,
    /// Group B net income threshold.
    pub net_b: Decimal,
}

impl ThresholdRow {
    /// Creates a row from whole currency amounts.
    pub fn from_amounts(gross_a: i64, net_a: i64, gross_b: i64, net_b: i64) -> Self {
        Self {
            gross_a: Decimal::from(gross_a),
            net_a: Decimal::from(net_a),
            gross_b: Decimal::from(gross_b),
            net_b: Decimal::from(net_b),
        }
    }

    /// Returns true if the Group B figures are at least the Group A figures.
    pub fn is_monotonic(&self) -> bool {
        self.gross_b >= self.gross_a && self.net_b >= self.net_a
    }

    /// Returns true if no figure is negative.
    pub fn is_non_negative(&self) -> bool {
        [self.gross_a, self.net_a, self.gross_b, self.net_b]
            .iter()
            .all(|v| *v >= Decimal::ZERO)
    }

    /// Returns the row as income limits.
    pub fn as_limits(&self) -> IncomeLimits {
        IncomeLimits::new(self.gross_a, self.net_a, self.gross_b, self.net_b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct StatusRows {
    base: ThresholdRow,
    retired: ThresholdRow,
}

impl StatusRows {
    fn select(&self, is_retired: bool) -> ThresholdRow {
        if is_retired { self.retired } else { self.base }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct AdultRows {
    one_adult: StatusRows,
    two_adults: StatusRows,
}

impl AdultRows {
    fn select(&self, adult_count: i64) -> EngineResult<&StatusRows> {
        match adult_count {
            1 => Ok(&self.one_adult),
            2 => Ok(&self.two_adults),
            _ => Err(EngineError::InvalidHouseholdShape { adult_count }),
        }
    }
}

/// Immutable lookup of base thresholds keyed by children, adults and retirement.
///
/// # Example
///
/// ```
/// use housing_eligibility::config::ThresholdTable;
/// use rust_decimal::Decimal;
///
/// let table = ThresholdTable::standard();
/// let row = table.base_thresholds(1, false, false).unwrap();
/// assert_eq!(row.gross_a, Decimal::from(38011));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThresholdTable {
    without_children: AdultRows,
    with_children: AdultRows,
}

impl ThresholdTable {
    /// Returns the base row for a household shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHouseholdShape` if `adult_count` is not 1 or 2. Callers
    /// validate the profile first, so this only fires on a programming error.
    pub fn base_thresholds(
        &self,
        adult_count: i64,
        has_children: bool,
        is_retired: bool,
    ) -> EngineResult<ThresholdRow> {
        let by_adults = if has_children {
            &self.with_children
        } else {
            &self.without_children
        };
        Ok(by_adults.select(adult_count)?.select(is_retired))
    }

    /// Returns every row with a label naming its position in the table.
    pub fn rows(&self) -> Vec<(&'static str, ThresholdRow)> {
        vec![
            ("without_children.one_adult.base", self.without_children.one_adult.base),
            ("without_children.one_adult.retired", self.without_children.one_adult.retired),
            ("without_children.two_adults.base", self.without_children.two_adults.base),
            ("without_children.two_adults.retired", self.without_children.two_adults.retired),
            ("with_children.one_adult.base", self.with_children.one_adult.base),
            ("with_children.one_adult.retired", self.with_children.one_adult.retired),
            ("with_children.two_adults.base", self.with_children.two_adults.base),
            ("with_children.two_adults.retired", self.with_children.two_adults.retired),
        ]
    }

    /// The thresholds the program ships with.
    ///
    /// Retired households use the same rows with and without children.
    pub fn standard() -> Self {
        let single_retired = ThresholdRow::from_amounts(31076, 23540, 40911, 32956);
        let couple_retired = ThresholdRow::from_amounts(42668, 28350, 56244, 39690);

        Self {
            without_children: AdultRows {
                one_adult: StatusRows {
                    base: ThresholdRow::from_amounts(38011, 23540, 52724, 32956),
                    retired: single_retired,
                },
                two_adults: StatusRows {
                    base: ThresholdRow::from_amounts(51777, 28350, 69496, 39690),
                    retired: couple_retired,
                },
            },
            with_children: AdultRows {
                one_adult: StatusRows {
                    base: ThresholdRow::from_amounts(53121, 29210, 71377, 40894),
                    retired: single_retired,
                },
                two_adults: StatusRows {
                    base: ThresholdRow::from_amounts(57074, 35740, 79411, 50036),
                    retired: couple_retired,
                },
            },
        }
    }
}
