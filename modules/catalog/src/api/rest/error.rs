//! Wire mapping for domain errors.
//!
//! Every error body is a list of violations, each naming the offending
//! parameters. Storage failures map to 500 with an opaque message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    pub message: String,
    pub param_names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub violations: Vec<Violation>,
}

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::MissingReference { .. }
            | DomainError::EmptyCollection { .. }
            | DomainError::UniqueViolation { .. }
            | DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn violation(&self) -> Violation {
        match &self.0 {
            DomainError::NotFound { .. } => Violation {
                message: self.0.to_string(),
                param_names: vec![],
            },
            DomainError::MissingReference { field } | DomainError::EmptyCollection { field } => {
                Violation {
                    message: self.0.to_string(),
                    param_names: vec![(*field).to_string()],
                }
            }
            DomainError::UniqueViolation { fields, .. } => Violation {
                message: self.0.to_string(),
                param_names: fields.iter().map(|f| (*f).to_string()).collect(),
            },
            DomainError::Validation { field, .. } => Violation {
                message: self.0.to_string(),
                param_names: vec![field.clone()],
            },
            // Driver details stay in the logs.
            DomainError::Database { .. } => Violation {
                message: "internal storage error".to_string(),
                param_names: vec![],
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            violations: vec![self.violation()],
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::EntityKind;
    use uuid::Uuid;

    #[test]
    fn not_found_maps_to_404_without_params() {
        let err = ApiError(DomainError::not_found(EntityKind::Gpu, Uuid::nil()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.violation().param_names.is_empty());
    }

    #[test]
    fn missing_reference_names_the_field() {
        let err = ApiError(DomainError::missing_reference("socket_id"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.violation().param_names, vec!["socket_id"]);
    }

    #[test]
    fn unique_violation_names_all_key_fields() {
        let err = ApiError(DomainError::unique_violation(
            vec!["name", "capacity_gb"],
            vec!["870 EVO".into(), "1000".into()],
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.violation().param_names, vec!["name", "capacity_gb"]);
    }

    #[test]
    fn database_errors_stay_opaque() {
        let err = ApiError(DomainError::database("connection reset"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let violation = err.violation();
        assert!(!violation.message.contains("connection reset"));
    }
}
