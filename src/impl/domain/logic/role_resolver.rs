use crate::{
    domain::logic::{formulas::rations, normalizer::normalize_org_name},
    entities::{ComputedCost, ExpenseRecord, OrgRef},
};

/// The two grouping roles a consolidation is built under. Every record is
/// attributed once under each role; the two resulting maps are alternative
/// views of the same money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The organization that asked for the resource and owns the demand.
    Requesting,
    /// The organization that holds and supplies the resource.
    ResourceHolding,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Requesting => "requesting",
            Role::ResourceHolding => "resource-holding",
        }
    }
}

/// One organization's share of one record's cost under one role.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attribution {
    /// Raw organization name as entered; normalization happens at the
    /// aggregation key, not here.
    pub(crate) name: String,
    /// Raw UG codes attached to this share. More than one only when two
    /// delivery targets of a rations record normalize to the same key.
    pub(crate) ug_codes: Vec<String>,
    pub(crate) cost: ComputedCost,
}

impl Attribution {
    fn whole(org: &OrgRef, cost: &ComputedCost) -> Self {
        Self {
            name: org.name.clone(),
            ug_codes: vec![org.ug.clone()],
            cost: cost.clone(),
        }
    }
}

/// Attributes a record's cost to organizations under the given role.
///
/// Under [`Role::Requesting`] the answer is always the single requesting
/// organization with the full cost. Under [`Role::ResourceHolding`] the
/// holder is resolved per category, spelled out in [`resolve_holding`].
pub(crate) fn resolve(
    record: &ExpenseRecord,
    role: Role,
    full_cost: &ComputedCost,
) -> Vec<Attribution> {
    match role {
        Role::Requesting => vec![Attribution::whole(record.requesting(), full_cost)],
        Role::ResourceHolding => resolve_holding(record, full_cost),
    }
}

/// Resolves which organization supplies each record, category by category.
///
/// Every category names one explicit resource holder on the record, except
/// rations: a rations record carries two delivery targets (QS and QR), each
/// with its own holder and its own portion of the cost. When both targets
/// normalize to the same organization the portions collapse into a single
/// attribution that retains both raw UG codes.
fn resolve_holding(record: &ExpenseRecord, full_cost: &ComputedCost) -> Vec<Attribution> {
    match record {
        ExpenseRecord::Rations(r) => {
            let (qs_cost, qr_cost) = rations::target_portions(r);
            if normalize_org_name(&r.qs_org.name) == normalize_org_name(&r.qr_org.name) {
                let mut components = qs_cost.components;
                components.extend(qr_cost.components);
                vec![Attribution {
                    name: r.qs_org.name.clone(),
                    ug_codes: vec![r.qs_org.ug.clone(), r.qr_org.ug.clone()],
                    cost: ComputedCost {
                        amount: qs_cost.amount + qr_cost.amount,
                        split: qs_cost.split.plus(qr_cost.split),
                        quantity: qs_cost.quantity + qr_cost.quantity,
                        components,
                    },
                }]
            } else {
                vec![
                    Attribution {
                        name: r.qs_org.name.clone(),
                        ug_codes: vec![r.qs_org.ug.clone()],
                        cost: qs_cost,
                    },
                    Attribution {
                        name: r.qr_org.name.clone(),
                        ug_codes: vec![r.qr_org.ug.clone()],
                        cost: qr_cost,
                    },
                ]
            }
        }
        ExpenseRecord::Materiel(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::Fuel(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::Lubricant(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::PerDiem(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::OperationalFunds(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::FundAdvance(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::Tickets(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::Utilities(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::FlightHours(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::Consumables(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::FoodSupplement(r) => vec![Attribution::whole(&r.holding, full_cost)],
        ExpenseRecord::ThirdPartyServices(r) => vec![Attribution::whole(&r.holding, full_cost)],
    }
}
