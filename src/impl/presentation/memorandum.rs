use rust_decimal::Decimal;

use crate::entities::ExpenseCategory;

use super::money_fmt::format_brl;

/// Literal closing line used when flight-hour costs are carried by the
/// higher command instead of the requesting organization's budget.
pub(crate) const ABSORBED_PLACEHOLDER: &str = "cost absorbed by higher command";

/// Builds the fixed-structure calculation narrative (memória de cálculo) for
/// one record: heading, optional supplying organization, formula literal,
/// one line per input item, closing total. Depends only on record fields, so
/// identical input renders byte-identical text.
pub(crate) struct MemorandumBuilder {
    lines: Vec<String>,
}

impl MemorandumBuilder {
    pub(crate) fn new(category: ExpenseCategory, purpose: &str) -> Self {
        let codes = category
            .nature_codes()
            .iter()
            .map(|code| code.label())
            .collect::<Vec<_>>()
            .join("/");
        Self {
            lines: vec![format!("{} ({}): {}", category.label(), codes, purpose)],
        }
    }

    /// Names the resource-holding organization. Callers skip this line when
    /// the holder is the requesting organization itself.
    pub(crate) fn supplied_by(mut self, name: &str) -> Self {
        self.lines.push(format!("Supplied by: {}", name));
        self
    }

    pub(crate) fn formula(mut self, text: &str) -> Self {
        self.lines.push(format!("Formula: {}", text));
        self
    }

    pub(crate) fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(format!("  {}", text.into()));
        self
    }

    pub(crate) fn total(mut self, amount: Decimal) -> String {
        self.lines.push(format!("Total: {}", format_brl(amount)));
        self.render()
    }

    pub(crate) fn total_absorbed(mut self) -> String {
        self.lines.push(format!("Total: {}", ABSORBED_PLACEHOLDER));
        self.render()
    }

    fn render(self) -> String {
        self.lines.join("\n")
    }
}
