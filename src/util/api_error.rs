use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: StoreError,
    },
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Attach a caller-facing message to a store failure.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Store { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store { context, source } => {
                error!("{}: {:?}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, context).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_is_500() {
        let err = ApiError::store("Error fetching coordinates")(StoreError::Database(
            sqlx::Error::PoolClosed,
        ));
        assert_eq!(
            StatusCode::INTERNAL_SERVER_ERROR,
            err.into_response().status()
        );
    }

    #[test]
    fn test_bad_request_is_400() {
        let err = ApiError::BadRequest("Invalid startDate".to_string());
        assert_eq!(StatusCode::BAD_REQUEST, err.into_response().status());
    }

    #[test]
    fn test_display_keeps_context() {
        let err = ApiError::store("Error fetching GNSS IDs")(StoreError::Database(
            sqlx::Error::PoolClosed,
        ));
        assert!(err.to_string().starts_with("Error fetching GNSS IDs: "));
    }
}
