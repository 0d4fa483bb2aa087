use async_trait::async_trait;

use crate::modules::resource::application::ports::outgoing::RepositoryError;
use crate::modules::summary::application::domain::entities::PortfolioSummary;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSummaryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<RepositoryError> for GetSummaryError {
    fn from(err: RepositoryError) -> Self {
        GetSummaryError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioSummary, GetSummaryError>;
}
