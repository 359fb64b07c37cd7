use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, NatureCode, NatureSplit, UtilitiesRecord,
        UtilityService,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

/// Utility bills are stated monthly; the operation pays its pro-rata share
/// over a 30-day month.
fn service_amount(service: &UtilityService, operation_days: u32) -> Decimal {
    (service.monthly_cost / dec!(30) * Decimal::from(operation_days)).round_dp(2)
}

impl CostFormula for UtilitiesRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut components = Vec::new();
        for service in &self.services {
            let amount = service_amount(service, self.operation_days);
            split = split.plus(NatureSplit::only(NatureCode::Nd39, amount));
            components.push(CostComponent::new(service.service.clone(), amount));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("utility services for {} days", self.operation_days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Utilities, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.formula("amount = monthly cost / 30 x days");
        for service in &self.services {
            memo = memo.line(format!(
                "{}: {} / 30 x {} days = {}",
                service.service,
                format_brl(service.monthly_cost),
                self.operation_days,
                format_brl(service_amount(service, self.operation_days)),
            ));
        }
        memo.total(cost.amount)
    }
}
