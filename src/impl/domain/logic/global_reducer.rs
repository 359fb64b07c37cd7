use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::entities::{
    CategoryTotals, ConsolidatedBudget, ExpenseCategory, NatureSplit, OperationProfile, OrgKey,
    OrganizationTotals,
};

/// Reduces the two per-organization maps into the grand totals.
///
/// The grand totals fold the requesting map alone. The holding map is the
/// same money grouped differently, so it is carried for reporting and
/// reconciles to the same figures, but it never contributes to the sums.
pub(crate) fn reduce(
    operation: Option<OperationProfile>,
    by_requesting: BTreeMap<OrgKey, OrganizationTotals>,
    by_holding: BTreeMap<OrgKey, OrganizationTotals>,
) -> ConsolidatedBudget {
    let mut categories: BTreeMap<ExpenseCategory, CategoryTotals> = BTreeMap::new();
    for entry in by_requesting.values() {
        for (category, bucket) in &entry.categories {
            categories.entry(*category).or_default().merge(bucket);
        }
    }
    for bucket in categories.values_mut() {
        bucket.finalize();
    }

    let total: Decimal = categories.values().map(|bucket| bucket.total).sum();
    let split = categories
        .values()
        .fold(NatureSplit::default(), |acc, bucket| acc.plus(bucket.split));

    ConsolidatedBudget {
        operation,
        total,
        split,
        categories,
        by_requesting,
        by_holding,
    }
}
