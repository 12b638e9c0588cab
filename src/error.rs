use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Application-level error type
///
/// Every failure path of the widget degrades to the same generic 500; the
/// underlying cause is logged where the error is mapped, never sent to the
/// embedding host.
#[derive(Debug)]
pub enum AppError {
    /// Outbound fetch of the source page failed (network error or non-2xx)
    Fetch,
    /// Source page body could not be decoded or parsed
    Parse,
    /// Internal server error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
    meta: ErrorMeta,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Serialize)]
struct ErrorMeta {
    request_id: String,
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch => "FETCH_ERROR",
            Self::Parse => "PARSE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "Error fetching data"),
            Self::Parse => write!(f, "Error parsing data"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: ErrorBody {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
            meta: ErrorMeta {
                request_id: uuid::Uuid::new_v4().to_string(),
            },
        };

        // All widget failures are terminal for the request and surface the
        // same generic server error.
        HttpResponse::InternalServerError().json(error_response)
    }
}
