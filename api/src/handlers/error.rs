//! HTTP rendering of domain errors.
//!
//! Every failure leaves the server as the `{success: false, message}` envelope
//! with a status derived from [`ErrorKind`]. Internal detail is logged here and
//! replaced by a generic message before it reaches the client.

use std::fmt;

use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use resume_core::errors::{AuthError, DomainError, ErrorKind, TokenError};
use resume_shared::ApiResponse;
use validator::ValidationErrors;

/// Error type returned by every handler and by the bearer middleware
#[derive(Debug)]
pub struct ApiError(DomainError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::validation(message))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(DomainError::Auth(err))
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(DomainError::Token(err))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::bad_request(validation_message(&errors))
    }
}

/// Status code for an error classification
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.kind())
    }

    fn error_response(&self) -> HttpResponse {
        match self.0.kind() {
            ErrorKind::Internal => log::error!("Request failed: {}", self.0),
            _ => log::debug!("Request rejected: {}", self.0),
        }

        HttpResponse::build(self.status_code()).json(ApiResponse::error(self.0.public_message()))
    }
}

/// First human-readable message out of a set of field validation failures
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("invalid value for {}", field),
            })
        })
        .next()
        .unwrap_or_else(|| "invalid request body".to_string())
}

/// Turns an undecodable JSON body into a 400 envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON payload: {}", err);
    ApiError::bad_request("invalid request body").into()
}

/// Turns a non-numeric path id into a 400 envelope
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path parameter: {}", err);
    ApiError::bad_request("invalid id").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(TokenError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::InsufficientPermissions).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(DomainError::not_found("project")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::bad_request("nope").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_internal_detail_is_hidden() {
        let err = ApiError::from(DomainError::internal("disk I/O error at page 42"));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let envelope: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["message"], "internal server error");
        assert!(envelope.get("data").is_none());
    }
}
