use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, FuelItem, FuelRecord, FuelType, NatureCode,
        NatureSplit,
    },
    presentation::{
        memorandum::MemorandumBuilder,
        money_fmt::{format_brl, format_number, format_quantity},
    },
};

use super::utils::with_holder;

/// Fixed planning margin applied on top of computed consumption.
const CONSUMPTION_MARGIN: Decimal = dec!(1.3);

fn item_liters(item: &FuelItem, operation_days: u32) -> Decimal {
    Decimal::from(item.quantity)
        * item.hours_per_day
        * item.consumption_rate
        * Decimal::from(operation_days)
}

fn type_rollup(record: &FuelRecord, fuel_type: FuelType) -> Option<(Decimal, Decimal, Decimal)> {
    let items: Vec<&FuelItem> = record
        .items
        .iter()
        .filter(|item| item.fuel_type == fuel_type)
        .collect();
    if items.is_empty() {
        return None;
    }
    let raw: Decimal = items
        .iter()
        .map(|item| item_liters(item, record.operation_days))
        .sum();
    let with_margin = (raw * CONSUMPTION_MARGIN).round_dp(2);
    let price = match fuel_type {
        FuelType::Diesel => record.diesel_price,
        FuelType::Gasoline => record.gasoline_price,
    };
    let amount = (with_margin * price).round_dp(2);
    Some((raw.round_dp(2), with_margin, amount))
}

impl CostFormula for FuelRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut quantity = Decimal::ZERO;
        let mut components = Vec::new();
        for fuel_type in [FuelType::Diesel, FuelType::Gasoline] {
            let Some((_, with_margin, amount)) = type_rollup(self, fuel_type) else {
                continue;
            };
            quantity += with_margin;
            split = split.plus(NatureSplit::only(NatureCode::Nd30, amount));
            components.push(CostComponent::new(fuel_type.label(), amount));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("fuel requirement for {} days", self.operation_days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Fuel, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.formula("liters = qty x h/day x L/h x days; total = liters x 1.3 margin x unit price");
        for fuel_type in [FuelType::Diesel, FuelType::Gasoline] {
            let Some((raw, with_margin, amount)) = type_rollup(self, fuel_type) else {
                continue;
            };
            let price = match fuel_type {
                FuelType::Diesel => self.diesel_price,
                FuelType::Gasoline => self.gasoline_price,
            };
            for item in self.items.iter().filter(|item| item.fuel_type == fuel_type) {
                memo = memo.line(format!(
                    "{} x{}: {} h/day x {} L/h x {} days = {}",
                    item.equipment,
                    item.quantity,
                    format_number(item.hours_per_day),
                    format_number(item.consumption_rate),
                    self.operation_days,
                    format_quantity(item_liters(item, self.operation_days).round_dp(2), "L"),
                ));
            }
            memo = memo.line(format!(
                "{} subtotal: {}; with 30% margin: {}; at {} per liter: {}",
                fuel_type.label(),
                format_quantity(raw, "L"),
                format_quantity(with_margin, "L"),
                format_brl(price),
                format_brl(amount),
            ));
        }
        memo.total(cost.amount)
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::org;

    use super::*;

    fn two_m113_for_ten_days() -> FuelRecord {
        FuelRecord {
            requesting: org("20º RCB", "160345"),
            holding: org("20º RCB", "160345"),
            operation_days: 10,
            diesel_price: dec!(6.00),
            gasoline_price: dec!(6.80),
            items: vec![FuelItem {
                equipment: "M113".into(),
                fuel_type: FuelType::Diesel,
                quantity: 2,
                hours_per_day: dec!(8),
                consumption_rate: dec!(3.0),
            }],
        }
    }

    #[test]
    fn margin_and_pricing_match_worked_example() {
        let cost = two_m113_for_ten_days().compute();
        // 2 x 8 x 3.0 x 10 = 480 L, x1.3 = 624 L, at 6.00 = 3744.00.
        assert_eq!(cost.quantity, dec!(624.00));
        assert_eq!(cost.amount, dec!(3744.00));
        assert_eq!(cost.split.nd30, dec!(3744.00));
        assert_eq!(cost.split.total(), cost.amount);
        assert_eq!(cost.components.len(), 1);
        assert_eq!(cost.components[0].label, "Diesel");
    }

    #[test]
    fn fuel_types_roll_up_separately() {
        let mut record = two_m113_for_ten_days();
        record.items.push(FuelItem {
            equipment: "Gerador".into(),
            fuel_type: FuelType::Gasoline,
            quantity: 1,
            hours_per_day: dec!(10),
            consumption_rate: dec!(1.5),
        });
        let cost = record.compute();
        // Gasoline: 1 x 10 x 1.5 x 10 = 150 L, x1.3 = 195 L, at 6.80 = 1326.00.
        assert_eq!(cost.quantity, dec!(819.00));
        assert_eq!(cost.amount, dec!(3744.00) + dec!(1326.00));
        assert_eq!(cost.components.len(), 2);
    }

    #[test]
    fn no_items_costs_nothing() {
        let mut record = two_m113_for_ten_days();
        record.items.clear();
        let cost = record.compute();
        assert_eq!(cost.amount, Decimal::ZERO);
        assert!(cost.components.is_empty());
    }

    #[test]
    fn narrative_shows_margin_steps_and_total() {
        let record = two_m113_for_ten_days();
        let memo = record.narrate(&record.compute());
        assert!(memo.starts_with("Fuel (ND 30): fuel requirement for 10 days"));
        assert!(memo.contains("M113 x2: 8,00 h/day x 3,00 L/h x 10 days = 480,00 L"));
        assert!(memo.contains(
            "Diesel subtotal: 480,00 L; with 30% margin: 624,00 L; at R$ 6,00 per liter: R$ 3.744,00"
        ));
        assert!(memo.ends_with("Total: R$ 3.744,00"));
        assert!(!memo.contains("Supplied by:"));
    }

    #[test]
    fn narrative_names_distinct_holder() {
        let mut record = two_m113_for_ten_days();
        record.holding = org("23ª Cia Log", "160812");
        let memo = record.narrate(&record.compute());
        assert!(memo.contains("Supplied by: 23ª Cia Log"));
    }
}
