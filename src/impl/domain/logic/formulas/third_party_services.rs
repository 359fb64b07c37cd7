use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, NatureCode, NatureSplit,
        ThirdPartyServicesRecord,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

impl CostFormula for ThirdPartyServicesRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut components = Vec::new();
        for service in &self.services {
            let amount = service.amount.round_dp(2);
            split = split.plus(NatureSplit::only(NatureCode::Nd39, amount));
            components.push(CostComponent::new(service.description.clone(), amount));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let mut memo =
            MemorandumBuilder::new(ExpenseCategory::ThirdPartyServices, "contracted services");
        memo = with_holder(memo, &self.requesting, &self.holding);
        for service in &self.services {
            memo = memo.line(format!(
                "{}: {}",
                service.description,
                format_brl(service.amount)
            ));
        }
        memo.total(cost.amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::entities::{org, ContractedService};

    use super::*;

    fn record() -> ThirdPartyServicesRecord {
        ThirdPartyServicesRecord {
            requesting: org("H Mil A Manaus", "160184"),
            holding: org("H Mil A Manaus", "160184"),
            operation_days: 60,
            services: vec![
                ContractedService {
                    description: "Lavanderia hospitalar".into(),
                    amount: dec!(12400.00),
                },
                ContractedService {
                    description: "Manutenção de geradores".into(),
                    amount: dec!(6800.00),
                },
            ],
        }
    }

    #[test]
    fn contracted_amounts_accumulate_on_nd39() {
        let cost = record().compute();
        assert_eq!(cost.amount, dec!(19200.00));
        assert_eq!(cost.split.nd39, dec!(19200.00));
    }

    #[test]
    fn narrative_lists_each_contract() {
        let record = record();
        let memo = record.narrate(&record.compute());
        assert!(memo.starts_with("Third-party services (ND 39): contracted services"));
        assert!(memo.contains("Lavanderia hospitalar: R$ 12.400,00"));
        assert!(memo.contains("Manutenção de geradores: R$ 6.800,00"));
        assert!(memo.ends_with("Total: R$ 19.200,00"));
    }
}
