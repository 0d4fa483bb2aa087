pub mod featured_projects_query;

pub use featured_projects_query::FeaturedProjectsQuery;
