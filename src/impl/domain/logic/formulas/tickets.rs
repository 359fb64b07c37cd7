use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, NatureCode, NatureSplit, TicketLeg,
        TicketsRecord,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

fn leg_amount(leg: &TicketLeg) -> Decimal {
    (Decimal::from(leg.travelers) * leg.unit_fare).round_dp(2)
}

impl CostFormula for TicketsRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut components = Vec::new();
        for leg in &self.legs {
            let amount = leg_amount(leg);
            split = split.plus(NatureSplit::only(NatureCode::Nd33, amount));
            components.push(CostComponent::new(leg.route.clone(), amount));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Tickets, "passenger transport");
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.formula("amount = travelers x unit fare");
        for leg in &self.legs {
            memo = memo.line(format!(
                "{}: {} travelers x {} = {}",
                leg.route,
                leg.travelers,
                format_brl(leg.unit_fare),
                format_brl(leg_amount(leg)),
            ));
        }
        memo.total(cost.amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::entities::org;

    use super::*;

    fn two_leg_record() -> TicketsRecord {
        TicketsRecord {
            requesting: org("CIGS", "160175"),
            holding: org("CMDO LOG", "160068"),
            operation_days: 12,
            legs: vec![
                TicketLeg {
                    route: "MAO-BSB".into(),
                    travelers: 4,
                    unit_fare: dec!(850.00),
                },
                TicketLeg {
                    route: "BSB-MAO".into(),
                    travelers: 4,
                    unit_fare: dec!(910.00),
                },
            ],
        }
    }

    #[test]
    fn fares_accumulate_on_nd33() {
        let cost = two_leg_record().compute();
        assert_eq!(cost.split.nd33, dec!(7040.00));
        assert_eq!(cost.amount, dec!(7040.00));
        assert_eq!(cost.components.len(), 2);
    }

    #[test]
    fn narrative_lists_each_leg() {
        let record = two_leg_record();
        let memo = record.narrate(&record.compute());
        assert!(memo.starts_with("Tickets (ND 33): passenger transport"));
        assert!(memo.contains("Supplied by: CMDO LOG"));
        assert!(memo.contains("MAO-BSB: 4 travelers x R$ 850,00 = R$ 3.400,00"));
        assert!(memo.contains("BSB-MAO: 4 travelers x R$ 910,00 = R$ 3.640,00"));
        assert!(memo.ends_with("Total: R$ 7.040,00"));
    }
}
