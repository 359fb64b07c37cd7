use crate::{
    domain::usecases::consolidate_usecase::{ConsolidateUsecase as _, ConsolidateUsecaseImpl},
    entities::ConsolidatedBudget,
    errors::ConsolidationError,
    repositories::RecordsRepository,
};

/// Entry point for consolidating one operation's budget payload.
pub struct CusteioEngine {
    consolidate_usecase: ConsolidateUsecaseImpl,
}

impl CusteioEngine {
    pub fn new() -> Self {
        Self {
            consolidate_usecase: ConsolidateUsecaseImpl::new(),
        }
    }

    pub async fn from_string(
        &self,
        budget_json: &str,
    ) -> Result<ConsolidatedBudget, ConsolidationError> {
        self.consolidate_usecase.from_string(budget_json).await
    }

    pub async fn from_file<T>(
        &self,
        budget_json: T,
    ) -> Result<ConsolidatedBudget, ConsolidationError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.consolidate_usecase.from_file(budget_json).await
    }

    /// Consolidates against a caller-provided record source instead of the
    /// bundled JSON payload repository.
    pub async fn from_repository<R>(
        &self,
        repository: &R,
    ) -> Result<ConsolidatedBudget, ConsolidationError>
    where
        R: RecordsRepository,
    {
        self.consolidate_usecase.consolidate(repository).await
    }
}

impl Default for CusteioEngine {
    fn default() -> Self {
        Self::new()
    }
}
