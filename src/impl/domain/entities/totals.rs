use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::{
    category::ExpenseCategory, computed_cost::ComputedCost, nature::NatureSplit,
    operation::OperationProfile, organization::OrgKey,
};

/// Running totals for one expense category, either within one organization
/// entry or at the grand-total level.
///
/// `total` always equals `split.total()` and the sum over `items`, because
/// all three are fed from the same rounded components and never re-rounded.
#[derive(Debug, Clone, PartialEq, Default, serde_derive::Serialize)]
pub struct CategoryTotals {
    pub total: Decimal,
    pub split: NatureSplit,
    pub quantity: Decimal,
    /// Breakdown by item or sub-category label.
    pub items: BTreeMap<String, Decimal>,
    /// Rendered calculation narratives. Sorted at finalization so the result
    /// does not depend on input order; duplicates are preserved.
    pub memoranda: Vec<String>,
}

impl CategoryTotals {
    pub(crate) fn add(&mut self, cost: &ComputedCost) {
        self.total += cost.amount;
        self.split = self.split.plus(cost.split);
        self.quantity += cost.quantity;
        for component in &cost.components {
            *self.items.entry(component.label.clone()).or_default() += component.amount;
        }
    }

    pub(crate) fn merge(&mut self, other: &CategoryTotals) {
        self.total += other.total;
        self.split = self.split.plus(other.split);
        self.quantity += other.quantity;
        for (label, amount) in &other.items {
            *self.items.entry(label.clone()).or_default() += *amount;
        }
        self.memoranda.extend(other.memoranda.iter().cloned());
    }

    pub(crate) fn finalize(&mut self) {
        self.memoranda.sort();
    }
}

/// Totals for one organization under one grouping role. Created lazily on
/// first reference, never removed during a pass.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct OrganizationTotals {
    pub name: OrgKey,
    /// Deduplicated raw UG codes seen for this key. When two raw names merge
    /// into one entry, both codes are retained for traceability.
    pub ug_codes: BTreeSet<String>,
    pub categories: BTreeMap<ExpenseCategory, CategoryTotals>,
    pub total: Decimal,
    pub split: NatureSplit,
}

impl OrganizationTotals {
    pub(crate) fn new(name: OrgKey) -> Self {
        Self {
            name,
            ug_codes: BTreeSet::new(),
            categories: BTreeMap::new(),
            total: Decimal::ZERO,
            split: NatureSplit::default(),
        }
    }

    pub(crate) fn add(
        &mut self,
        category: ExpenseCategory,
        ug_codes: &[String],
        cost: &ComputedCost,
        memorandum: String,
    ) {
        for ug in ug_codes {
            if !ug.is_empty() {
                self.ug_codes.insert(ug.clone());
            }
        }
        let bucket = self.categories.entry(category).or_default();
        bucket.add(cost);
        bucket.memoranda.push(memorandum);
        self.total += cost.amount;
        self.split = self.split.plus(cost.split);
    }

    pub(crate) fn finalize(&mut self) {
        for bucket in self.categories.values_mut() {
            bucket.finalize();
        }
    }
}

/// Grand-total aggregate for one consolidation run.
///
/// The grand totals are the fold of the requesting-role map alone; the
/// holding-role map is an alternative view of the same records and reconciles
/// to the same totals independently. The two maps are never added together.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ConsolidatedBudget {
    pub operation: Option<OperationProfile>,
    pub total: Decimal,
    pub split: NatureSplit,
    pub categories: BTreeMap<ExpenseCategory, CategoryTotals>,
    pub by_requesting: BTreeMap<OrgKey, OrganizationTotals>,
    pub by_holding: BTreeMap<OrgKey, OrganizationTotals>,
}
