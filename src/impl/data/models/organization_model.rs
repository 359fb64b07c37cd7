use crate::entities::OrgRef;

/// Organization name+UG pair as it appears in the payload. Both fields
/// default to empty strings; an empty name lands in the UNSPECIFIED bucket
/// at normalization time rather than failing the parse.
#[derive(Debug, Clone, Default, serde_derive::Deserialize)]
pub(crate) struct OrganizationModel {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) ug: String,
}

impl From<OrganizationModel> for OrgRef {
    fn from(model: OrganizationModel) -> Self {
        OrgRef {
            name: model.name,
            ug: model.ug,
        }
    }
}

/// Precedence for the resource-holding pair of a record: the holding field
/// wins where it is filled in, the requesting pair fills the gaps. Applied
/// field by field, so a holder given by name only inherits the requester's
/// UG code and vice versa. An absent holder means the requester holds its
/// own resources.
pub(crate) fn resolve_holding_org(
    requesting: &OrganizationModel,
    holding: Option<OrganizationModel>,
) -> OrgRef {
    match holding {
        None => requesting.clone().into(),
        Some(holding) => OrgRef {
            name: if holding.name.is_empty() {
                requesting.name.clone()
            } else {
                holding.name
            },
            ug: if holding.ug.is_empty() {
                requesting.ug.clone()
            } else {
                holding.ug
            },
        },
    }
}
