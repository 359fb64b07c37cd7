use rust_decimal::Decimal;

use crate::{
    entities::{ConsolidatedBudget, NatureCode, NatureSplit, OrganizationTotals},
    presentation::money_fmt::{format_brl, format_quantity},
};

/// Presentation order for nature-code lines. Codes with a zero amount are
/// omitted from the rendered statement.
const ND_ORDER: [NatureCode; 5] = [
    NatureCode::Nd15,
    NatureCode::Nd30,
    NatureCode::Nd33,
    NatureCode::Nd39,
    NatureCode::Nd00,
];

const WRAP_WIDTH: usize = 74;

/// Renders a whole consolidation run as a plain-text statement: run header,
/// grand totals, category rollups, per-organization demand lines under both
/// roles, and the full calculation-memoranda annex.
///
/// The output is deterministic: identical input produces a byte-identical
/// statement.
pub struct ConsolidatedSummaryGenerator<'a> {
    budget: &'a ConsolidatedBudget,
}

impl<'a> ConsolidatedSummaryGenerator<'a> {
    pub fn new(budget: &'a ConsolidatedBudget) -> Self {
        Self { budget }
    }

    pub fn generate(self) -> String {
        let mut output = String::new();

        // -------------------------------------
        // RUN HEADER
        // -------------------------------------

        output.push_str("CONSOLIDATED OPERATIONAL BUDGET\n");
        if let Some(operation) = &self.budget.operation {
            output.push_str(&format!("Operation: {}\n", operation.name));
            output.push_str(&format!(
                "Period: {} to {}\n",
                operation.start, operation.end
            ));
        }
        output.push('\n');

        // -------------------------------------
        // GRAND TOTALS
        // -------------------------------------

        output.push_str(&format!(
            "Grand total: {}\n",
            format_brl(self.budget.total)
        ));
        push_split_lines(&mut output, "  ", &self.budget.split);
        output.push('\n');

        // -------------------------------------
        // CATEGORY ROLLUPS
        // -------------------------------------

        output.push_str("By category:\n");
        for (category, bucket) in &self.budget.categories {
            output.push_str(&format!(
                "  {}: {}\n",
                category.label(),
                format_brl(bucket.total)
            ));
            push_split_lines(&mut output, "    ", &bucket.split);
            if let Some(unit) = category.quantity_unit() {
                if bucket.quantity != Decimal::ZERO {
                    output.push_str(&format!(
                        "    Quantity: {}\n",
                        format_quantity(bucket.quantity, unit)
                    ));
                }
            }
        }
        output.push('\n');

        // -------------------------------------
        // ORGANIZATIONS, BOTH ROLES
        // -------------------------------------

        push_role_section(
            &mut output,
            "Requesting organizations",
            self.budget.by_requesting.values(),
        );
        push_role_section(
            &mut output,
            "Resource-holding organizations",
            self.budget.by_holding.values(),
        );

        // -------------------------------------
        // CALCULATION MEMORANDA ANNEX
        // -------------------------------------

        output.push('\n');
        output.push_str("Calculation memoranda:\n");
        for bucket in self.budget.categories.values() {
            for memorandum in &bucket.memoranda {
                output.push('\n');
                // Memorandum lines that fit the page width are reproduced
                // byte-for-byte; only overlong lines are re-wrapped.
                for line in memorandum.lines() {
                    if line.chars().count() <= WRAP_WIDTH {
                        output.push_str(&format!("  {}\n", line));
                    } else {
                        for piece in textwrap::wrap(line, WRAP_WIDTH) {
                            output.push_str(&format!("  {}\n", piece));
                        }
                    }
                }
            }
        }

        output
    }
}

fn push_split_lines(output: &mut String, indent: &str, split: &NatureSplit) {
    for code in ND_ORDER {
        let amount = split.get(code);
        if amount != Decimal::ZERO {
            output.push_str(&format!("{}{}: {}\n", indent, code.label(), format_brl(amount)));
        }
    }
}

fn push_role_section<'a>(
    output: &mut String,
    heading: &str,
    entries: impl ExactSizeIterator<Item = &'a OrganizationTotals>,
) {
    output.push_str(&format!("{}: {}\n", heading, entries.len()));
    for totals in entries {
        output.push_str(&format!(
            "  {}: {}\n",
            totals.name,
            format_brl(totals.total)
        ));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::{
        domain::logic::{aggregator::aggregate, global_reducer::reduce, role_resolver::Role},
        entities::{
            org, ExpenseRecord, FuelItem, FuelRecord, FuelType, OperationProfile,
            OperationalFundsRecord,
        },
    };

    use super::*;

    fn sample_budget() -> ConsolidatedBudget {
        let records = vec![
            ExpenseRecord::Fuel(FuelRecord {
                requesting: org("20º RCB", "160345"),
                holding: org("Ba Adm Ap", "160500"),
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
            }),
            ExpenseRecord::OperationalFunds(OperationalFundsRecord {
                requesting: org("20º RCB", "160345"),
                holding: org("20º RCB", "160345"),
                operation_days: 10,
                purpose: "checkpoint sustainment".into(),
                amount: dec!(1500.00),
            }),
        ];
        let operation = Some(OperationProfile {
            name: "Operação Fronteira Sul".into(),
            start: NaiveDate::from_ymd_opt(2026, 3, 1).expect("date should be valid"),
            end: NaiveDate::from_ymd_opt(2026, 3, 10).expect("date should be valid"),
        });
        let by_requesting =
            aggregate(&records, Role::Requesting).expect("records should be valid");
        let by_holding =
            aggregate(&records, Role::ResourceHolding).expect("records should be valid");
        reduce(operation, by_requesting, by_holding)
    }

    #[test]
    fn statement_carries_header_totals_and_rollups() {
        let budget = sample_budget();
        let statement = ConsolidatedSummaryGenerator::new(&budget).generate();

        assert!(statement.starts_with(
            "CONSOLIDATED OPERATIONAL BUDGET\n\
             Operation: Operação Fronteira Sul\n\
             Period: 2026-03-01 to 2026-03-10\n"
        ));
        assert!(statement.contains("Grand total: R$ 5.244,00\n"));
        assert!(statement.contains("  ND 30: R$ 3.744,00\n"));
        assert!(statement.contains("  ND 00: R$ 1.500,00\n"));
        assert!(statement.contains(
            "  Fuel: R$ 3.744,00\n    ND 30: R$ 3.744,00\n    Quantity: 624,00 L\n"
        ));
        assert!(statement.contains("Requesting organizations: 1\n  20O RCB: R$ 5.244,00\n"));
        // Fuel is supplied by a different organization, so the holding view
        // has two entries.
        assert!(statement.contains("Resource-holding organizations: 2\n"));
        assert!(statement.contains("  BA ADM AP: R$ 3.744,00\n"));
    }

    #[test]
    fn annex_lists_every_memorandum() {
        let budget = sample_budget();
        let statement = ConsolidatedSummaryGenerator::new(&budget).generate();

        assert!(statement.contains("Calculation memoranda:\n"));
        assert!(statement.contains("  Fuel (ND 30): fuel requirement for 10 days\n"));
        assert!(statement.contains("  Operational funds (ND 00): checkpoint sustainment\n"));
        assert!(statement.contains("  Supplied by: Ba Adm Ap\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let budget = sample_budget();
        let first = ConsolidatedSummaryGenerator::new(&budget).generate();
        let second = ConsolidatedSummaryGenerator::new(&budget).generate();
        assert_eq!(first, second);
    }
}
