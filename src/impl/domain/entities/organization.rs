/// Canonical grouping key produced by the name normalizer. Two raw names that
/// normalize to the same key are the same organization for aggregation.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord, serde_derive::Serialize)]
pub struct OrgKey(pub(crate) String);

impl OrgKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organization reference as entered on a record: display name plus the
/// accounting-unit (UG) code that holds the budget line.
#[derive(Debug, PartialEq, Eq, Hash, Clone, serde_derive::Serialize)]
pub struct OrgRef {
    pub name: String,
    pub ug: String,
}

// Shorthand constructor.

pub fn org(name: impl Into<String>, ug: impl Into<String>) -> OrgRef {
    OrgRef {
        name: name.into(),
        ug: ug.into(),
    }
}
