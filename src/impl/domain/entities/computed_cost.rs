use rust_decimal::Decimal;

use super::nature::NatureSplit;

/// Output of a category formula for a single record (or, for rations, for
/// one delivery target's portion of a record).
///
/// Invariants upheld by every formula: `amount == split.total()`, and where
/// components are present they sum to `amount`. Components are rounded to
/// centavos individually; `amount` is their sum, never rounded on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedCost {
    pub amount: Decimal,
    pub split: NatureSplit,
    /// Physical quantity in the category's unit (liters, hours). Zero for
    /// categories without one.
    pub quantity: Decimal,
    pub components: Vec<CostComponent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostComponent {
    pub label: String,
    pub amount: Decimal,
}

impl ComputedCost {
    pub(crate) fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            split: NatureSplit::default(),
            quantity: Decimal::ZERO,
            components: Vec::new(),
        }
    }
}

impl CostComponent {
    pub(crate) fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}
