use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, FundAdvanceRecord, NatureCode, NatureSplit,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

impl CostFormula for FundAdvanceRecord {
    fn compute(&self) -> ComputedCost {
        let split = NatureSplit::only(NatureCode::Nd30, self.nd30.round_dp(2))
            .plus(NatureSplit::only(NatureCode::Nd39, self.nd39.round_dp(2)));
        let amount = split.total();
        if amount == Decimal::ZERO {
            return ComputedCost::zero();
        }
        ComputedCost {
            amount,
            split,
            quantity: Decimal::ZERO,
            components: vec![CostComponent::new(self.purpose.clone(), amount)],
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let mut memo = MemorandumBuilder::new(ExpenseCategory::FundAdvance, &self.purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        if self.nd30 != Decimal::ZERO {
            memo = memo.line(format!("ND 30: {}", format_brl(self.nd30)));
        }
        if self.nd39 != Decimal::ZERO {
            memo = memo.line(format!("ND 39: {}", format_brl(self.nd39)));
        }
        memo.total(cost.amount)
    }
}
