pub mod db_error;

pub use db_error::map_db_err;
