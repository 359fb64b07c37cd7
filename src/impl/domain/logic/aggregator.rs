use std::collections::BTreeMap;

use crate::{
    domain::logic::{
        normalizer::normalize_org_name,
        role_resolver::{self, Role},
        validation::validate_records,
    },
    entities::{ExpenseRecord, OrgKey, OrganizationTotals},
    errors::ConsolidationError,
};

struct AggregationState {
    role: Role,
    organizations: BTreeMap<OrgKey, OrganizationTotals>,
}

impl AggregationState {
    fn new(role: Role) -> Self {
        Self {
            role,
            organizations: BTreeMap::new(),
        }
    }

    /// Update current state with the given record.
    fn step(self, record: &ExpenseRecord) -> Self {
        let mut organizations = self.organizations;

        let cost = record.cost();
        let memorandum = record.memorandum(&cost);
        for attribution in role_resolver::resolve(record, self.role, &cost) {
            let key = normalize_org_name(&attribution.name);
            organizations
                .entry(key.clone())
                .or_insert_with(|| OrganizationTotals::new(key))
                .add(
                    record.category(),
                    &attribution.ug_codes,
                    &attribution.cost,
                    memorandum.clone(),
                );
        }

        Self {
            role: self.role,
            organizations,
        }
    }

    fn finish(self) -> BTreeMap<OrgKey, OrganizationTotals> {
        let mut organizations = self.organizations;
        for totals in organizations.values_mut() {
            totals.finalize();
        }
        organizations
    }
}

/// Builds the per-organization totals map for one grouping role.
///
/// Costs are exact decimals and the maps are ordered, so the result is
/// identical for any input order. Validation runs again here: aggregation
/// must be impossible over a record set that was never checked.
pub(crate) fn aggregate(
    records: &[ExpenseRecord],
    role: Role,
) -> Result<BTreeMap<OrgKey, OrganizationTotals>, ConsolidationError> {
    validate_records(records)?;
    Ok(records
        .iter()
        .fold(AggregationState::new(role), |state, record| {
            state.step(record)
        })
        .finish())
}
