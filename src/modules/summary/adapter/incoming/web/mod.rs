pub mod routes;

pub use routes::get_summary_handler;
