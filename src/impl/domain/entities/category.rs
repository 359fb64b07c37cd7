use super::nature::NatureCode;

/// The closed list of budget categories handled by the consolidation run.
/// Variant order is the presentation order used by rendered statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde_derive::Serialize)]
pub enum ExpenseCategory {
    Rations,
    Materiel,
    Fuel,
    Lubricant,
    PerDiem,
    OperationalFunds,
    FundAdvance,
    Tickets,
    Utilities,
    FlightHours,
    Consumables,
    FoodSupplement,
    ThirdPartyServices,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rations => "Rations (Class I)",
            ExpenseCategory::Materiel => "Materiel (Classes II-IX)",
            ExpenseCategory::Fuel => "Fuel",
            ExpenseCategory::Lubricant => "Lubricant",
            ExpenseCategory::PerDiem => "Per-diems",
            ExpenseCategory::OperationalFunds => "Operational funds",
            ExpenseCategory::FundAdvance => "Fund advances",
            ExpenseCategory::Tickets => "Tickets",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::FlightHours => "Flight hours",
            ExpenseCategory::Consumables => "Consumable material",
            ExpenseCategory::FoodSupplement => "Food supplement",
            ExpenseCategory::ThirdPartyServices => "Third-party services",
        }
    }

    /// Fixed assignment of legal nature codes per category. Categories with
    /// two codes carry a record-provided split between them.
    pub fn nature_codes(&self) -> &'static [NatureCode] {
        match self {
            ExpenseCategory::Rations => &[NatureCode::Nd30],
            ExpenseCategory::Materiel => &[NatureCode::Nd30, NatureCode::Nd39],
            ExpenseCategory::Fuel => &[NatureCode::Nd30],
            ExpenseCategory::Lubricant => &[NatureCode::Nd30],
            ExpenseCategory::PerDiem => &[NatureCode::Nd15, NatureCode::Nd30],
            ExpenseCategory::OperationalFunds => &[NatureCode::Nd00],
            ExpenseCategory::FundAdvance => &[NatureCode::Nd30, NatureCode::Nd39],
            ExpenseCategory::Tickets => &[NatureCode::Nd33],
            ExpenseCategory::Utilities => &[NatureCode::Nd39],
            ExpenseCategory::FlightHours => &[NatureCode::Nd30, NatureCode::Nd39],
            ExpenseCategory::Consumables => &[NatureCode::Nd30],
            ExpenseCategory::FoodSupplement => &[NatureCode::Nd30],
            ExpenseCategory::ThirdPartyServices => &[NatureCode::Nd39],
        }
    }

    /// Unit suffix for the category's physical quantity rollup, if it has one.
    pub fn quantity_unit(&self) -> Option<&'static str> {
        match self {
            ExpenseCategory::Fuel | ExpenseCategory::Lubricant => Some("L"),
            ExpenseCategory::FlightHours => Some("h"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
