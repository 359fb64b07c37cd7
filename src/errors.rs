use thiserror::Error;

/// Errors surfaced by a consolidation run.
///
/// A failure while collecting or validating input fails the whole run; the
/// engine never consolidates a partial snapshot. Absent numeric fields are
/// not errors (they deserialize as zero), and organization spelling variants
/// are not errors (they merge under one normalized key).
#[derive(Debug, Error)]
pub enum ConsolidationError {
    // IO-related.
    #[error("Error reading budget file '{path}'.")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("Invalid budget payload (invalid JSON format): {details}.")]
    InvalidPayload { details: String },
    #[error("Invalid '{section}' records: {details}.")]
    InvalidSection {
        section: &'static str,
        details: String,
    },
    #[error("Invalid ISO date: {date}.")]
    InvalidIsoDate { date: String },

    // Validation-related.
    #[error(
        "Invalid lubricant item '{equipment}' for '{organization}': \
         consumption and unit price must be provided together ({missing} is missing)."
    )]
    PartialLubricantItem {
        organization: String,
        equipment: String,
        missing: &'static str,
    },
    #[error(
        "Unexpected negative amount in field '{field}' of a {category} record for '{organization}'."
    )]
    NegativeAmount {
        category: &'static str,
        organization: String,
        field: &'static str,
    },
}
