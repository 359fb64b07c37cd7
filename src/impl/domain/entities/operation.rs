use chrono::NaiveDate;

/// Run header describing the operation being budgeted. Surfaced by the
/// statement renderers; per-record memoranda never depend on it.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct OperationProfile {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}
