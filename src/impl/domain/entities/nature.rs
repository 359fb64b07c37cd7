use rust_decimal::Decimal;

/// Legal budget-classification code (natureza de despesa) constraining what
/// an amount may be spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NatureCode {
    /// Per-diems.
    Nd15,
    /// Consumable goods.
    Nd30,
    /// Passages and locomotion.
    Nd33,
    /// Third-party services.
    Nd39,
    /// Value that carries no legal expense-nature code (operational funds).
    Nd00,
}

impl NatureCode {
    pub fn label(&self) -> &'static str {
        match self {
            NatureCode::Nd15 => "ND 15",
            NatureCode::Nd30 => "ND 30",
            NatureCode::Nd33 => "ND 33",
            NatureCode::Nd39 => "ND 39",
            NatureCode::Nd00 => "ND 00",
        }
    }
}

impl std::fmt::Display for NatureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One amount per budget-classification code. The only ND-indexed accumulator
/// shape in the crate; totals over it are always `total()`, never a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Serialize)]
pub struct NatureSplit {
    pub nd15: Decimal,
    pub nd30: Decimal,
    pub nd33: Decimal,
    pub nd39: Decimal,
    pub nd00: Decimal,
}

impl NatureSplit {
    /// Split with the full amount under a single code.
    pub(crate) fn only(code: NatureCode, amount: Decimal) -> Self {
        let mut split = Self::default();
        match code {
            NatureCode::Nd15 => split.nd15 = amount,
            NatureCode::Nd30 => split.nd30 = amount,
            NatureCode::Nd33 => split.nd33 = amount,
            NatureCode::Nd39 => split.nd39 = amount,
            NatureCode::Nd00 => split.nd00 = amount,
        }
        split
    }

    pub(crate) fn plus(self, other: Self) -> Self {
        Self {
            nd15: self.nd15 + other.nd15,
            nd30: self.nd30 + other.nd30,
            nd33: self.nd33 + other.nd33,
            nd39: self.nd39 + other.nd39,
            nd00: self.nd00 + other.nd00,
        }
    }

    pub fn get(&self, code: NatureCode) -> Decimal {
        match code {
            NatureCode::Nd15 => self.nd15,
            NatureCode::Nd30 => self.nd30,
            NatureCode::Nd33 => self.nd33,
            NatureCode::Nd39 => self.nd39,
            NatureCode::Nd00 => self.nd00,
        }
    }

    pub fn total(&self) -> Decimal {
        self.nd15 + self.nd30 + self.nd33 + self.nd39 + self.nd00
    }
}
