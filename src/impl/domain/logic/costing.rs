use crate::entities::{ComputedCost, ExpenseRecord};

/// Category formula seam. Every record shape computes its own cost and
/// renders its own calculation narrative; the `ExpenseRecord` dispatch below
/// matches exhaustively, so a new category cannot compile without both.
pub(crate) trait CostFormula {
    fn compute(&self) -> ComputedCost;
    fn narrate(&self, cost: &ComputedCost) -> String;
}

impl ExpenseRecord {
    /// Evaluates the category formula for this record. Pure: zero-valued
    /// inputs produce zero amounts, never errors.
    pub fn cost(&self) -> ComputedCost {
        match self {
            ExpenseRecord::Rations(r) => r.compute(),
            ExpenseRecord::Materiel(r) => r.compute(),
            ExpenseRecord::Fuel(r) => r.compute(),
            ExpenseRecord::Lubricant(r) => r.compute(),
            ExpenseRecord::PerDiem(r) => r.compute(),
            ExpenseRecord::OperationalFunds(r) => r.compute(),
            ExpenseRecord::FundAdvance(r) => r.compute(),
            ExpenseRecord::Tickets(r) => r.compute(),
            ExpenseRecord::Utilities(r) => r.compute(),
            ExpenseRecord::FlightHours(r) => r.compute(),
            ExpenseRecord::Consumables(r) => r.compute(),
            ExpenseRecord::FoodSupplement(r) => r.compute(),
            ExpenseRecord::ThirdPartyServices(r) => r.compute(),
        }
    }

    /// Renders the record's calculation narrative for the given computed
    /// cost. Byte-identical for identical input.
    pub fn memorandum(&self, cost: &ComputedCost) -> String {
        match self {
            ExpenseRecord::Rations(r) => r.narrate(cost),
            ExpenseRecord::Materiel(r) => r.narrate(cost),
            ExpenseRecord::Fuel(r) => r.narrate(cost),
            ExpenseRecord::Lubricant(r) => r.narrate(cost),
            ExpenseRecord::PerDiem(r) => r.narrate(cost),
            ExpenseRecord::OperationalFunds(r) => r.narrate(cost),
            ExpenseRecord::FundAdvance(r) => r.narrate(cost),
            ExpenseRecord::Tickets(r) => r.narrate(cost),
            ExpenseRecord::Utilities(r) => r.narrate(cost),
            ExpenseRecord::FlightHours(r) => r.narrate(cost),
            ExpenseRecord::Consumables(r) => r.narrate(cost),
            ExpenseRecord::FoodSupplement(r) => r.narrate(cost),
            ExpenseRecord::ThirdPartyServices(r) => r.narrate(cost),
        }
    }
}
