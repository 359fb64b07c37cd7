use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    data::models::record_models::{BudgetPayloadModel, OperationProfileModel},
    errors::ConsolidationError,
};

#[async_trait]
pub(crate) trait BudgetJsonDatasource {
    fn from_string(&self, budget_json: &str) -> Result<BudgetPayloadModel, ConsolidationError>;

    async fn from_file<P>(&self, path: P) -> Result<BudgetPayloadModel, ConsolidationError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BudgetJsonDatasourceImpl;

impl BudgetJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

/// Decodes one top-level category key. Absent or null keys are empty
/// collections; a present key that fails to decode is an error naming that
/// key, not a generic payload error.
fn section<T: DeserializeOwned>(
    payload: &Value,
    key: &'static str,
) -> Result<Vec<T>, ConsolidationError> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            ConsolidationError::InvalidSection {
                section: key,
                details: e.to_string(),
            }
        }),
    }
}

fn operation_section(payload: &Value) -> Result<Option<OperationProfileModel>, ConsolidationError> {
    match payload.get("operation") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
            ConsolidationError::InvalidSection {
                section: "operation",
                details: e.to_string(),
            }
        }),
    }
}

#[async_trait]
impl BudgetJsonDatasource for BudgetJsonDatasourceImpl {
    fn from_string(&self, budget_json: &str) -> Result<BudgetPayloadModel, ConsolidationError> {
        let payload: Value = serde_json::from_str(budget_json).map_err(|e| {
            ConsolidationError::InvalidPayload {
                details: e.to_string(),
            }
        })?;
        if !payload.is_object() {
            return Err(ConsolidationError::InvalidPayload {
                details: "the top-level value must be an object keyed by category".to_string(),
            });
        }
        Ok(BudgetPayloadModel {
            operation: operation_section(&payload)?,
            rations: section(&payload, "rations")?,
            materiel: section(&payload, "materiel")?,
            fuel: section(&payload, "fuel")?,
            lubricant: section(&payload, "lubricant")?,
            per_diems: section(&payload, "per_diems")?,
            operational_funds: section(&payload, "operational_funds")?,
            fund_advances: section(&payload, "fund_advances")?,
            tickets: section(&payload, "tickets")?,
            utilities: section(&payload, "utilities")?,
            flight_hours: section(&payload, "flight_hours")?,
            consumables: section(&payload, "consumables")?,
            food_supplements: section(&payload, "food_supplements")?,
            third_party_services: section(&payload, "third_party_services")?,
        })
    }

    async fn from_file<P>(&self, path: P) -> Result<BudgetPayloadModel, ConsolidationError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path.as_ref()).await.map_err(|e| {
            ConsolidationError::ReadError {
                path: path.as_ref().display().to_string(),
                source: e,
            }
        })?;
        self.from_string(&contents)
    }
}
