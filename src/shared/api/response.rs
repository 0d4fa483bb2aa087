// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Body used by every non-validation error response.
#[derive(Serialize)]
pub struct ErrorDetail<'a> {
    pub detail: &'a str,
}

/// Body of a failed aggregate read.
#[derive(Serialize)]
pub struct AggregateError<'a> {
    pub error: &'a str,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorDetail { detail: message })
    }

    pub fn not_found() -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, "Not found.")
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    /// Field error map, or one map per item for batch writes.
    pub fn validation_error<T: Serialize>(errors: T) -> HttpResponse {
        HttpResponse::BadRequest().json(errors)
    }

    pub fn aggregate_error(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(AggregateError { error: message })
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
