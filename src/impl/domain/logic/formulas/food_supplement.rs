use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, FoodSupplementRecord, NatureCode,
        NatureSplit,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

impl CostFormula for FoodSupplementRecord {
    fn compute(&self) -> ComputedCost {
        let amount = (Decimal::from(self.headcount)
            * self.daily_rate
            * Decimal::from(self.operation_days))
        .round_dp(2);
        if amount == Decimal::ZERO {
            return ComputedCost::zero();
        }
        ComputedCost {
            amount,
            split: NatureSplit::only(NatureCode::Nd30, amount),
            quantity: Decimal::ZERO,
            components: vec![CostComponent::new(
                format!("Feeding complement ({} troops)", self.headcount),
                amount,
            )],
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("feeding complement for {} days", self.operation_days);
        let memo = MemorandumBuilder::new(ExpenseCategory::FoodSupplement, &purpose);
        let memo = with_holder(memo, &self.requesting, &self.holding);
        memo.formula("amount = headcount x daily rate x days")
            .line(format!(
                "{} troops x {} x {} days = {}",
                self.headcount,
                format_brl(self.daily_rate),
                self.operation_days,
                format_brl(cost.amount),
            ))
            .total(cost.amount)
    }
}
