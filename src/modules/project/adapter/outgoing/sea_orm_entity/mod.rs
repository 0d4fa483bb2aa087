pub mod project_technologies;
pub mod projects;
