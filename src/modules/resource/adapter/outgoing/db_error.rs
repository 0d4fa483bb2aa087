use sea_orm::DbErr;

use crate::modules::resource::application::ports::outgoing::RepositoryError;

pub fn map_db_err(e: DbErr) -> RepositoryError {
    match e {
        DbErr::RecordNotFound(_) => RepositoryError::NotFound,
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}
