use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, FlightHoursRecord, NatureCode, NatureSplit,
    },
    presentation::{
        memorandum::MemorandumBuilder,
        money_fmt::{format_brl, format_quantity},
    },
};

use super::utils::with_holder;

/// Both ND components zero while hours were flown: the higher command pays,
/// and only the physical hours enter the consolidation.
pub(crate) fn is_absorbed(record: &FlightHoursRecord) -> bool {
    record.nd30 == Decimal::ZERO
        && record.nd39 == Decimal::ZERO
        && record.hours_flown > Decimal::ZERO
}

impl CostFormula for FlightHoursRecord {
    fn compute(&self) -> ComputedCost {
        let nd30 = self.nd30.round_dp(2);
        let nd39 = self.nd39.round_dp(2);
        let split = NatureSplit::only(NatureCode::Nd30, nd30)
            .plus(NatureSplit::only(NatureCode::Nd39, nd39));
        let amount = split.total();
        let components = if amount == Decimal::ZERO {
            Vec::new()
        } else {
            vec![CostComponent::new(self.aircraft.clone(), amount)]
        };
        ComputedCost {
            amount,
            split,
            quantity: self.hours_flown,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("employment of {}", self.aircraft);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::FlightHours, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.line(format!(
            "Hours flown: {}",
            format_quantity(self.hours_flown, "h")
        ));
        if is_absorbed(self) {
            return memo.total_absorbed();
        }
        if self.nd30 != Decimal::ZERO {
            memo = memo.line(format!("ND 30: {}", format_brl(self.nd30)));
        }
        if self.nd39 != Decimal::ZERO {
            memo = memo.line(format!("ND 39: {}", format_brl(self.nd39)));
        }
        memo.total(cost.amount)
    }
}
