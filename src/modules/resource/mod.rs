//! Generic CRUD plumbing shared by every portfolio collection.
pub mod adapter;
pub mod application;
