use async_trait::async_trait;
use futures::try_join;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        logic::{aggregator::aggregate, global_reducer::reduce, role_resolver::Role},
        repositories::records_repository::RecordsRepository,
    },
    entities::{ConsolidatedBudget, ExpenseSnapshot},
    errors::ConsolidationError,
};

#[async_trait]
pub trait ConsolidateUsecase: Send + Sync {
    async fn from_string(
        &self,
        budget_json: &str,
    ) -> Result<ConsolidatedBudget, ConsolidationError>;

    async fn from_file<P>(&self, budget_json: P) -> Result<ConsolidatedBudget, ConsolidationError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ConsolidateUsecaseImpl;

impl ConsolidateUsecaseImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Runs one consolidation against any record source. All category
    /// fetches resolve concurrently and nothing aggregates until the last
    /// one lands; a single failed fetch fails the run with no partial
    /// result. From the snapshot on, everything is synchronous.
    pub(crate) async fn consolidate<R>(
        &self,
        repository: &R,
    ) -> Result<ConsolidatedBudget, ConsolidationError>
    where
        R: RecordsRepository,
    {
        let (
            operation,
            rations,
            materiel,
            fuel,
            lubricant,
            per_diems,
            operational_funds,
            fund_advances,
            tickets,
            utilities,
            flight_hours,
            consumables,
            food_supplements,
            third_party_services,
        ) = try_join!(
            repository.operation(),
            repository.rations(),
            repository.materiel(),
            repository.fuel(),
            repository.lubricant(),
            repository.per_diems(),
            repository.operational_funds(),
            repository.fund_advances(),
            repository.tickets(),
            repository.utilities(),
            repository.flight_hours(),
            repository.consumables(),
            repository.food_supplements(),
            repository.third_party_services(),
        )?;
        let snapshot = ExpenseSnapshot {
            operation,
            rations,
            materiel,
            fuel,
            lubricant,
            per_diems,
            operational_funds,
            fund_advances,
            tickets,
            utilities,
            flight_hours,
            consumables,
            food_supplements,
            third_party_services,
        };

        let operation = snapshot.operation.clone();
        let records = snapshot.into_records();
        tracing::debug!(records = records.len(), "Consolidating expense records");

        let by_requesting = aggregate(&records, Role::Requesting)?;
        let by_holding = aggregate(&records, Role::ResourceHolding)?;
        let budget = reduce(operation, by_requesting, by_holding);
        tracing::debug!(
            total = %budget.total,
            requesting_organizations = budget.by_requesting.len(),
            holding_organizations = budget.by_holding.len(),
            "Consolidation complete"
        );
        Ok(budget)
    }
}

#[async_trait]
impl ConsolidateUsecase for ConsolidateUsecaseImpl {
    async fn from_string(
        &self,
        budget_json: &str,
    ) -> Result<ConsolidatedBudget, ConsolidationError> {
        let repository = RecordsRepositoryImpl::from_string(budget_json)?;
        self.consolidate(&repository).await
    }

    async fn from_file<P>(&self, budget_json: P) -> Result<ConsolidatedBudget, ConsolidationError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let repository = RecordsRepositoryImpl::from_file(budget_json).await?;
        self.consolidate(&repository).await
    }
}
