use async_trait::async_trait;

use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::resource::application::ports::outgoing::RepositoryError;

#[async_trait]
pub trait PersonalInfoQuery: Send + Sync {
    /// The earliest-created record. More than one may exist; the rest are ignored.
    async fn first(&self) -> Result<Option<PersonalInfo>, RepositoryError>;
}
