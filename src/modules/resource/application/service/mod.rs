pub mod bulk_create_service;
pub mod resource_service;

pub use bulk_create_service::BulkCreateService;
pub use resource_service::ResourceService;
