use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::resource::application::ports::outgoing::RepositoryError;

#[async_trait]
pub trait FeaturedProjectsQuery: Send + Sync {
    /// Projects flagged `featured`, in the regular listing order.
    async fn list_featured(&self) -> Result<Vec<Project>, RepositoryError>;
}
