//! mapping of device errors to http responses
//! - validation errors are the caller's fault: 400
//! - the device refused the command: 502
//! - the device could not be reached or answered garbage: 503

use actix_web::error::{BlockingError, InternalError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use crate::common::error::{ErrorCategory, ErrorCode, KeikoError};
use crate::entity::dto::response_dto::ErrorDto;

impl ResponseError for KeikoError {
    fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::Protocol => StatusCode::BAD_GATEWAY,
            ErrorCategory::Transport => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDto {
            code: self.code() as u16,
            msg: self.to_string(),
        })
    }
}

/// the blocking pool went away, nothing the caller can fix
pub fn blocking_error(err: BlockingError) -> actix_web::Error {
    let response = HttpResponse::InternalServerError().json(ErrorDto {
        code: ErrorCode::UnknownError as u16,
        msg: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}
