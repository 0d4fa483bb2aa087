//! Read-only aggregate of every portfolio section, served at `/summary/`.
pub mod adapter;
pub mod application;
