use rust_decimal::Decimal;

use crate::{
    domain::logic::costing::CostFormula,
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, MaterielItem, MaterielRecord, NatureCode,
        NatureSplit,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

use super::utils::with_holder;

fn item_split(item: &MaterielItem) -> NatureSplit {
    NatureSplit::only(NatureCode::Nd30, item.nd30.round_dp(2))
        .plus(NatureSplit::only(NatureCode::Nd39, item.nd39.round_dp(2)))
}

impl CostFormula for MaterielRecord {
    fn compute(&self) -> ComputedCost {
        let mut split = NatureSplit::default();
        let mut components = Vec::new();
        for item in &self.items {
            let portion = item_split(item);
            split = split.plus(portion);
            components.push(CostComponent::new(
                format!("Class {}", item.supply_class),
                portion.total(),
            ));
        }
        ComputedCost {
            amount: split.total(),
            split,
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let purpose = format!("materiel requirement for {} days", self.operation_days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Materiel, &purpose);
        memo = with_holder(memo, &self.requesting, &self.holding);
        memo = memo.formula("amount = ND 30 portion + ND 39 portion per supply class");
        for item in &self.items {
            memo = memo.line(format!(
                "Class {}: ND 30 {} + ND 39 {} = {}",
                item.supply_class,
                format_brl(item.nd30),
                format_brl(item.nd39),
                format_brl(item_split(item).total()),
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

    fn two_class_record() -> MaterielRecord {
        MaterielRecord {
            requesting: org("1ª Cia Com", "160233"),
            holding: org("Pq R Mnt/1", "160401"),
            operation_days: 20,
            items: vec![
                MaterielItem {
                    supply_class: "II".into(),
                    nd30: dec!(4200.00),
                    nd39: dec!(800.00),
                },
                MaterielItem {
                    supply_class: "IX".into(),
                    nd30: dec!(15000.00),
                    nd39: Decimal::ZERO,
                },
            ],
        }
    }

    #[test]
    fn splits_accumulate_across_supply_classes() {
        let cost = two_class_record().compute();
        assert_eq!(cost.split.nd30, dec!(19200.00));
        assert_eq!(cost.split.nd39, dec!(800.00));
        assert_eq!(cost.amount, dec!(20000.00));
    }

    #[test]
    fn each_class_becomes_one_component() {
        let cost = two_class_record().compute();
        let labels: Vec<&str> = cost
            .components
            .iter()
            .map(|component| component.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Class II", "Class IX"]);
    }

    #[test]
    fn narrative_lists_both_nature_portions() {
        let record = two_class_record();
        let memo = record.narrate(&record.compute());
        assert!(memo.starts_with(
            "Materiel (Classes II-IX) (ND 30/ND 39): materiel requirement for 20 days"
        ));
        assert!(memo.contains("Supplied by: Pq R Mnt/1"));
        assert!(memo.contains("Class II: ND 30 R$ 4.200,00 + ND 39 R$ 800,00 = R$ 5.000,00"));
        assert!(memo.ends_with("Total: R$ 20.000,00"));
    }
}
