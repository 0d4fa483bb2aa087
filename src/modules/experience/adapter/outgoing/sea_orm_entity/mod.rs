pub mod experience_technologies;
pub mod experiences;
