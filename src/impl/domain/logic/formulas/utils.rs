use crate::{
    domain::logic::normalizer::normalize_org_name, entities::OrgRef,
    presentation::memorandum::MemorandumBuilder,
};

/// Appends the supplying-organization line when the resource holder is a
/// different organization from the requester. Comparison is by normalized
/// key, so spelling variants of the requester do not produce the line.
pub(crate) fn with_holder(
    memo: MemorandumBuilder,
    requesting: &OrgRef,
    holding: &OrgRef,
) -> MemorandumBuilder {
    if normalize_org_name(&holding.name) == normalize_org_name(&requesting.name) {
        memo
    } else {
        memo.supplied_by(&holding.name)
    }
}
