use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, ConsumableItem, ConsumablesRecord, CostComponent, ExpenseCategory,
        NatureCode, NatureSplit,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

fn item_amount(item: &ConsumableItem) -> Decimal {
    (Decimal::from(item.quantity) * item.unit_price).round_dp(2)
}

impl CostFormula for ConsumablesRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut components = Vec::new();
        for item in &self.items {
            let amount = item_amount(item);
            split = split.plus(NatureSplit::only(NatureCode::Nd30, amount));
            components.push(CostComponent::new(item.description.clone(), amount));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("resupply for {} days", self.operation_days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Consumables, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.formula("amount = quantity x unit price");
        for item in &self.items {
            memo = memo.line(format!(
                "{}: {} x {} = {}",
                item.description,
                item.quantity,
                format_brl(item.unit_price),
                format_brl(item_amount(item)),
            ));
        }
        memo.total(cost.amount)
    }
}
