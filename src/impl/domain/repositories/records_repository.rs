use async_trait::async_trait;

use crate::{
    entities::{
        ConsumablesRecord, FlightHoursRecord, FoodSupplementRecord, FuelRecord, FundAdvanceRecord,
        LubricantRecord, MaterielRecord, OperationProfile, OperationalFundsRecord, PerDiemRecord,
        RationsRecord, ThirdPartyServicesRecord, TicketsRecord, UtilitiesRecord,
    },
    errors::ConsolidationError,
};

/// Source of the expense records for one consolidation run.
///
/// One fetch per category so implementations backed by separate upstream
/// collections can resolve them concurrently; the consolidation usecase
/// joins all of them and aggregates nothing until every fetch has resolved.
/// A single failed fetch fails the run.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    async fn operation(&self) -> Result<Option<OperationProfile>, ConsolidationError>;

    async fn rations(&self) -> Result<Vec<RationsRecord>, ConsolidationError>;
    async fn materiel(&self) -> Result<Vec<MaterielRecord>, ConsolidationError>;
    async fn fuel(&self) -> Result<Vec<FuelRecord>, ConsolidationError>;
    async fn lubricant(&self) -> Result<Vec<LubricantRecord>, ConsolidationError>;
    async fn per_diems(&self) -> Result<Vec<PerDiemRecord>, ConsolidationError>;
    async fn operational_funds(&self) -> Result<Vec<OperationalFundsRecord>, ConsolidationError>;
    async fn fund_advances(&self) -> Result<Vec<FundAdvanceRecord>, ConsolidationError>;
    async fn tickets(&self) -> Result<Vec<TicketsRecord>, ConsolidationError>;
    async fn utilities(&self) -> Result<Vec<UtilitiesRecord>, ConsolidationError>;
    async fn flight_hours(&self) -> Result<Vec<FlightHoursRecord>, ConsolidationError>;
    async fn consumables(&self) -> Result<Vec<ConsumablesRecord>, ConsolidationError>;
    async fn food_supplements(&self) -> Result<Vec<FoodSupplementRecord>, ConsolidationError>;
    async fn third_party_services(
        &self,
    ) -> Result<Vec<ThirdPartyServicesRecord>, ConsolidationError>;
}
