use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use catalog_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    UnprocessableEntity {
        message: String,
        details: BTreeMap<String, Vec<String>>,
    },

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Error envelope returned by every failing route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    pub status_code: u16,
    /// Field name to messages, only present on validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::UnprocessableEntity {
            message: message.into(),
            details: BTreeMap::new(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Conflict(message) | CoreError::InvalidReference(message) => {
                ApiError::BadRequest(message)
            }
            e @ CoreError::DependentRecords { .. } => ApiError::BadRequest(e.to_string()),
            CoreError::Validation(message) => ApiError::validation(message),
            e @ CoreError::ServiceUnavailable => ApiError::ServiceUnavailable(e.to_string()),
            e @ CoreError::InternalServerError => ApiError::InternalServerError(e.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let details: BTreeMap<String, Vec<String>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ApiError::UnprocessableEntity {
            message: "Validation error".to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {}", self);
        }

        let body = match self {
            ApiError::UnprocessableEntity { message, details } => ApiErrorResponse {
                error: message,
                status_code: status.as_u16(),
                details: Some(details),
            },
            other => ApiErrorResponse {
                error: other.to_string(),
                status_code: status.as_u16(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}

/// Path parameter extractor whose rejections use the error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(ApiPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::product_not_found(), StatusCode::NOT_FOUND),
            (CoreError::duplicate_department_name(), StatusCode::BAD_REQUEST),
            (CoreError::unknown_department(9), StatusCode::BAD_REQUEST),
            (CoreError::DependentRecords { count: 2 }, StatusCode::BAD_REQUEST),
            (
                CoreError::Validation("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CoreError::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status_code(), status);
        }
    }

    #[test]
    fn test_dependent_records_keeps_message() {
        let api = ApiError::from(CoreError::DependentRecords { count: 4 });
        assert_eq!(
            api,
            ApiError::BadRequest(
                "Cannot delete department with 4 products. Use force=true to delete anyway."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let api = ApiError::from(CoreError::InternalServerError);
        assert_eq!(api.to_string(), "Internal server error");
    }

    #[derive(Debug, Validate)]
    struct Named {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
    }

    #[test]
    fn test_validation_errors_list_field_messages() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        match ApiError::from(errors) {
            ApiError::UnprocessableEntity { details, .. } => {
                assert_eq!(details["name"], vec!["name is required".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
