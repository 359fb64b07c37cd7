use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, LubricantItem, LubricantRecord, NatureCode,
        NatureSplit,
    },
    presentation::{
        memorandum::MemorandumBuilder,
        money_fmt::{format_brl, format_number, format_quantity},
    },
};

use super::utils::with_holder;

/// Only items with both a consumption figure and a unit price participate.
/// Items with exactly one of the two are rejected by validation before any
/// aggregation; items with neither are inert equipment lines.
pub(crate) fn item_participates(item: &LubricantItem) -> bool {
    item.consumption_per_100h > Decimal::ZERO && item.unit_price > Decimal::ZERO
}

fn item_rollup(item: &LubricantItem, operation_days: u32) -> (Decimal, Decimal, Decimal) {
    let hours = Decimal::from(item.quantity) * item.hours_per_day * Decimal::from(operation_days);
    let liters = (hours / dec!(100) * item.consumption_per_100h).round_dp(2);
    let amount = (liters * item.unit_price).round_dp(2);
    (hours.round_dp(2), liters, amount)
}

impl CostFormula for LubricantRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut quantity = Decimal::ZERO;
        let mut components = Vec::new();
        for item in self.items.iter().filter(|item| item_participates(item)) {
            let (_, liters, amount) = item_rollup(item, self.operation_days);
            quantity += liters;
            split = split.plus(NatureSplit::only(NatureCode::Nd30, amount));
            components.push(CostComponent::new(item.equipment.clone(), amount));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("lubricant requirement for {} days", self.operation_days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Lubricant, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.formula(
            "hours = qty x h/day x days; liters = hours / 100 x L/100h; amount = liters x unit price",
        );
        for item in self.items.iter().filter(|item| item_participates(item)) {
            let (hours, liters, amount) = item_rollup(item, self.operation_days);
            memo = memo.line(format!(
                "{} x{}: {} x {} L/100h = {}; at {} per liter: {}",
                item.equipment,
                item.quantity,
                format_quantity(hours, "h"),
                format_number(item.consumption_per_100h),
                format_quantity(liters, "L"),
                format_brl(item.unit_price),
                format_brl(amount),
            ));
        }
        memo.total(cost.amount)
    }
}
