use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, messages};
use thiserror::Error;

use crate::validate::Violation;

/// Route-level message literals.
pub mod route_messages {
    pub const NOT_FOUND: &str = "Produto não encontrado!";
    /// The edit route reports its miss with a period, not an exclamation mark.
    pub const NOT_FOUND_ON_EDIT: &str = "Produto não encontrado.";
    pub const EDITED: &str = "Produto editado.";
    pub const DELETED: &str = "Produto deletado com sucesso!";
    /// The create route's 500 body, also with a period.
    pub const INTERNAL_ERROR_ON_CREATE: &str = "Um erro aconteceu.";
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    Validation(Violation),

    #[error("product not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(violation) => {
                AppError::BadRequest(violation.message.to_string())
            }
            ProductError::NotFound => AppError::NotFound(route_messages::NOT_FOUND.to_string()),
            ProductError::Storage(detail) => {
                tracing::error!("storage failure: {}", detail);
                AppError::Internal(messages::INTERNAL_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Storage(err.to_string())
    }
}
