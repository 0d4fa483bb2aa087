pub mod get_summary_service;

pub use get_summary_service::{GetSummaryService, SummarySources};
