use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, NatureCode, NatureSplit, PerDiemRecord,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

fn rank_amount(headcount: u32, daily_rate: Decimal, days: u32, trips: u32) -> Decimal {
    (Decimal::from(headcount) * daily_rate * Decimal::from(days) * Decimal::from(trips)).round_dp(2)
}

fn embarkation_amount(record: &PerDiemRecord) -> Decimal {
    if !record.air_travel {
        return Decimal::ZERO;
    }
    let travelers: u32 = record.ranks.iter().map(|bucket| bucket.headcount).sum();
    (record.embarkation_tax * Decimal::from(travelers) * Decimal::from(record.trips)).round_dp(2)
}

impl CostFormula for PerDiemRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut components = Vec::new();
        for bucket in &self.ranks {
            let amount = rank_amount(bucket.headcount, bucket.daily_rate, self.operation_days, self.trips);
            split = split.plus(NatureSplit::only(NatureCode::Nd15, amount));
            components.push(CostComponent::new(bucket.rank.clone(), amount));
        }
        let tax = embarkation_amount(self);
        if tax != Decimal::ZERO {
            split = split.plus(NatureSplit::only(NatureCode::Nd30, tax));
            components.push(CostComponent::new("Embarkation taxes", tax));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("{} trips of {} days", self.trips, self.operation_days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::PerDiem, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo
            .formula("amount = headcount x daily rate x days x trips; embarkation = tax x travelers x trips");
        for bucket in &self.ranks {
            let amount =
                rank_amount(bucket.headcount, bucket.daily_rate, self.operation_days, self.trips);
            memo = memo.line(format!(
                "{} x{}: {} x {} days x {} trips = {}",
                bucket.rank,
                bucket.headcount,
                format_brl(bucket.daily_rate),
                self.operation_days,
                self.trips,
                format_brl(amount),
            ));
        }
        if self.air_travel {
            let travelers: u32 = self.ranks.iter().map(|bucket| bucket.headcount).sum();
            memo = memo.line(format!(
                "Embarkation taxes: {} travelers x {} x {} trips = {} (ND 30)",
                travelers,
                format_brl(self.embarkation_tax),
                self.trips,
                format_brl(embarkation_amount(self)),
            ));
        }
        memo.total(cost.amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::entities::{org, RankBucket};

    use super::*;

    fn mixed_detachment(air_travel: bool) -> PerDiemRecord {
        PerDiemRecord {
            requesting: org("20º RCB", "160345"),
            holding: org("20º RCB", "160345"),
            operation_days: 10,
            trips: 1,
            air_travel,
            embarkation_tax: dec!(95.00),
            ranks: vec![
                RankBucket {
                    rank: "Oficial superior".into(),
                    headcount: 2,
                    daily_rate: dec!(320.00),
                },
                RankBucket {
                    rank: "Praça".into(),
                    headcount: 10,
                    daily_rate: dec!(180.00),
                },
            ],
        }
    }

    #[test]
    fn rank_sums_post_to_nd15() {
        let cost = mixed_detachment(false).compute();
        // (2 x 320 + 10 x 180) x 10 days x 1 trip.
        assert_eq!(cost.split.nd15, dec!(24400.00));
        assert_eq!(cost.split.nd30, Decimal::ZERO);
        assert_eq!(cost.amount, dec!(24400.00));
    }

    #[test]
    fn air_travel_adds_embarkation_taxes_to_nd30() {
        let cost = mixed_detachment(true).compute();
        assert_eq!(cost.split.nd15, dec!(24400.00));
        // 12 travelers x 95.00 x 1 trip.
        assert_eq!(cost.split.nd30, dec!(1140.00));
        assert_eq!(cost.amount, dec!(25540.00));
        assert_eq!(cost.components.len(), 3);
    }

    #[test]
    fn ground_travel_ignores_the_configured_tax() {
        let cost = mixed_detachment(false).compute();
        assert!(cost
            .components
            .iter()
            .all(|component| component.label != "Embarkation taxes"));
    }

    #[test]
    fn narrative_breaks_down_ranks_and_taxes() {
        let record = mixed_detachment(true);
        let memo = record.narrate(&record.compute());
        assert!(memo.starts_with("Per-diems (ND 15/ND 30): 1 trips of 10 days"));
        assert!(memo.contains("Oficial superior x2: R$ 320,00 x 10 days x 1 trips = R$ 6.400,00"));
        assert!(memo.contains("Embarkation taxes: 12 travelers x R$ 95,00 x 1 trips = R$ 1.140,00 (ND 30)"));
        assert!(memo.ends_with("Total: R$ 25.540,00"));
    }
}
