use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, NatureCode, NatureSplit,
        OperationalFundsRecord,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

impl CostFormula for OperationalFundsRecord {
    fn compute(&self) -> ComputedCost {
        let amount = self.amount.round_dp(2);
        if amount == Decimal::ZERO {
            return ComputedCost::zero();
        }
        ComputedCost {
            amount,
            split: NatureSplit::only(NatureCode::Nd00, amount),
            quantity: Decimal::ZERO,
            components: vec![CostComponent::new(self.purpose.clone(), amount)],
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let memo = MemorandumBuilder::new(ExpenseCategory::OperationalFunds, &self.purpose);
        let memo = with_holder(memo, &self.requesting, &self.holding);
        memo.line(format!(
            "Allocated for {} days: {}",
            self.operation_days,
            format_brl(self.amount)
        ))
        .total(cost.amount)
    }
}
