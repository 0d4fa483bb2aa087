use async_trait::async_trait;

use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::ResourceError;

/// All-or-nothing creation of several records.
#[async_trait]
pub trait BulkCreateUseCase<R: Resource>: Send + Sync {
    async fn execute(&self, payloads: Vec<R::Payload>) -> Result<Vec<R>, ResourceError>;
}
