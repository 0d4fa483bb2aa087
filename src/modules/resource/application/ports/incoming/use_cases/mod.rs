pub mod bulk_create;
pub mod resource_use_case;

pub use bulk_create::BulkCreateUseCase;
pub use resource_use_case::{ResourceError, ResourceUseCase, ValidationErrors};
