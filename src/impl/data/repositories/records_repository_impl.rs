use async_trait::async_trait;

use crate::{
    data::datasources::budget_json_datasource::{BudgetJsonDatasource, BudgetJsonDatasourceImpl},
    domain::repositories::records_repository::RecordsRepository,
    entities::{
        ConsumablesRecord, ExpenseSnapshot, FlightHoursRecord, FoodSupplementRecord, FuelRecord,
        FundAdvanceRecord, LubricantRecord, MaterielRecord, OperationProfile,
        OperationalFundsRecord, PerDiemRecord, RationsRecord, ThirdPartyServicesRecord,
        TicketsRecord, UtilitiesRecord,
    },
    errors::ConsolidationError,
};

/// Bundled repository over a single JSON payload. The whole payload is
/// parsed and converted once at construction; every later fetch serves its
/// slice of that snapshot, so the per-category fetches are trivially
/// consistent with each other.
pub(crate) struct RecordsRepositoryImpl {
    snapshot: ExpenseSnapshot,
}

impl RecordsRepositoryImpl {
    pub(crate) fn from_string(budget_json: &str) -> Result<Self, ConsolidationError> {
        let payload = BudgetJsonDatasourceImpl::new().from_string(budget_json)?;
        Ok(Self {
            snapshot: payload.into(),
        })
    }

    pub(crate) async fn from_file<P>(path: P) -> Result<Self, ConsolidationError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let payload = BudgetJsonDatasourceImpl::new().from_file(path).await?;
        Ok(Self {
            snapshot: payload.into(),
        })
    }
}

#[async_trait]
impl RecordsRepository for RecordsRepositoryImpl {
    async fn operation(&self) -> Result<Option<OperationProfile>, ConsolidationError> {
        Ok(self.snapshot.operation.clone())
    }

    async fn rations(&self) -> Result<Vec<RationsRecord>, ConsolidationError> {
        Ok(self.snapshot.rations.clone())
    }

    async fn materiel(&self) -> Result<Vec<MaterielRecord>, ConsolidationError> {
        Ok(self.snapshot.materiel.clone())
    }

    async fn fuel(&self) -> Result<Vec<FuelRecord>, ConsolidationError> {
        Ok(self.snapshot.fuel.clone())
    }

    async fn lubricant(&self) -> Result<Vec<LubricantRecord>, ConsolidationError> {
        Ok(self.snapshot.lubricant.clone())
    }

    async fn per_diems(&self) -> Result<Vec<PerDiemRecord>, ConsolidationError> {
        Ok(self.snapshot.per_diems.clone())
    }

    async fn operational_funds(&self) -> Result<Vec<OperationalFundsRecord>, ConsolidationError> {
        Ok(self.snapshot.operational_funds.clone())
    }

    async fn fund_advances(&self) -> Result<Vec<FundAdvanceRecord>, ConsolidationError> {
        Ok(self.snapshot.fund_advances.clone())
    }

    async fn tickets(&self) -> Result<Vec<TicketsRecord>, ConsolidationError> {
        Ok(self.snapshot.tickets.clone())
    }

    async fn utilities(&self) -> Result<Vec<UtilitiesRecord>, ConsolidationError> {
        Ok(self.snapshot.utilities.clone())
    }

    async fn flight_hours(&self) -> Result<Vec<FlightHoursRecord>, ConsolidationError> {
        Ok(self.snapshot.flight_hours.clone())
    }

    async fn consumables(&self) -> Result<Vec<ConsumablesRecord>, ConsolidationError> {
        Ok(self.snapshot.consumables.clone())
    }

    async fn food_supplements(&self) -> Result<Vec<FoodSupplementRecord>, ConsolidationError> {
        Ok(self.snapshot.food_supplements.clone())
    }

    async fn third_party_services(
        &self,
    ) -> Result<Vec<ThirdPartyServicesRecord>, ConsolidationError> {
        Ok(self.snapshot.third_party_services.clone())
    }
}
