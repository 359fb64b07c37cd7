use rust_decimal::Decimal;

use crate::{
    entities::{NatureCode, NatureSplit, OrganizationTotals},
    logic::Role,
    presentation::money_fmt::{format_brl, format_quantity},
};

const ND_ORDER: [NatureCode; 5] = [
    NatureCode::Nd15,
    NatureCode::Nd30,
    NatureCode::Nd33,
    NatureCode::Nd39,
    NatureCode::Nd00,
];

/// Renders one organization's entry of a role map as a plain-text demand
/// statement: totals, nature-code splits, retained UG codes, and a
/// per-category breakdown with item rollups and memorandum counts.
pub struct OrganizationDemandGenerator<'a> {
    totals: &'a OrganizationTotals,
    role: Role,
}

impl<'a> OrganizationDemandGenerator<'a> {
    pub fn new(totals: &'a OrganizationTotals, role: Role) -> Self {
        Self { totals, role }
    }

    pub fn generate(self) -> String {
        let mut output = String::new();

        // -------------------------------------
        // ORGANIZATION HEADER
        // -------------------------------------

        output.push_str(&format!("DEMAND STATEMENT: {}\n", self.totals.name));
        output.push_str(&format!("Role: {}\n", self.role.label()));
        if !self.totals.ug_codes.is_empty() {
            let codes: Vec<&str> = self.totals.ug_codes.iter().map(String::as_str).collect();
            output.push_str(&format!("UG codes: {}\n", codes.join(", ")));
        }
        output.push_str(&format!("Total: {}\n", format_brl(self.totals.total)));
        push_split_lines(&mut output, &self.totals.split);

        // -------------------------------------
        // CATEGORY BREAKDOWN
        // -------------------------------------

        for (category, bucket) in &self.totals.categories {
            output.push('\n');
            output.push_str(&format!(
                "{}: {}\n",
                category.label(),
                format_brl(bucket.total)
            ));
            push_split_lines(&mut output, &bucket.split);
            if let Some(unit) = category.quantity_unit() {
                if bucket.quantity != Decimal::ZERO {
                    output.push_str(&format!(
                        "  Quantity: {}\n",
                        format_quantity(bucket.quantity, unit)
                    ));
                }
            }
            for (label, amount) in &bucket.items {
                output.push_str(&format!("  {}: {}\n", label, format_brl(*amount)));
            }
            output.push_str(&format!("  Memoranda: {}\n", bucket.memoranda.len()));
        }

        output
    }
}

fn push_split_lines(output: &mut String, split: &NatureSplit) {
    for code in ND_ORDER {
        let amount = split.get(code);
        if amount != Decimal::ZERO {
            output.push_str(&format!("  {}: {}\n", code.label(), format_brl(amount)));
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        domain::logic::aggregator::aggregate,
        entities::{org, ExpenseRecord, OrgKey, RationsRecord},
    };

    use super::*;

    fn rations_record() -> ExpenseRecord {
        ExpenseRecord::Rations(RationsRecord {
            requesting: org("1ª Cia", "160222"),
            qs_org: org("23ª Base Log", "160780"),
            qr_org: org("1ª Cia", "160222"),
            operation_days: 37,
            qs_effective: 100,
            qs_unit_rate: dec!(11.50),
            qr_effective: 50,
            qr_unit_rate: dec!(9.00),
            allowance_rate: dec!(9.00),
        })
    }

    #[test]
    fn holding_entry_renders_codes_items_and_memo_count() {
        let totals = aggregate(&[rations_record()], Role::ResourceHolding)
            .expect("records should be valid");
        let supplier = totals
            .get(&OrgKey("23A BASE LOG".to_string()))
            .expect("supplier entry should exist");

        let statement = OrganizationDemandGenerator::new(supplier, Role::ResourceHolding)
            .generate();

        assert!(statement.starts_with(
            "DEMAND STATEMENT: 23A BASE LOG\n\
             Role: resource-holding\n\
             UG codes: 160780\n\
             Total: R$ 49.750,00\n\
             \x20 ND 30: R$ 49.750,00\n"
        ));
        assert!(statement.contains("\nRations (Class I): R$ 49.750,00\n"));
        assert!(statement.contains("  QS base: R$ 42.550,00\n"));
        assert!(statement.contains("  QS etapa complement: R$ 7.200,00\n"));
        assert!(statement.contains("  Memoranda: 1\n"));
    }

    #[test]
    fn requesting_entry_carries_the_full_record_cost() {
        let totals = aggregate(&[rations_record()], Role::Requesting)
            .expect("records should be valid");
        let requester = totals
            .get(&OrgKey("1A CIA".to_string()))
            .expect("requester entry should exist");

        let statement =
            OrganizationDemandGenerator::new(requester, Role::Requesting).generate();

        assert!(statement.contains("Role: requesting\n"));
        assert!(statement.contains("Total: R$ 70.000,00\n"));
        assert!(statement.contains("UG codes: 160222\n"));
    }
}
