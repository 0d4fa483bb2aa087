pub mod personal_info_query;

pub use personal_info_query::PersonalInfoQuery;
