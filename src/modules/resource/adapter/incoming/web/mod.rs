pub mod routes;

pub use routes::{configure_bulk, configure_resource, BulkEndpoint, ResourceEndpoint};
