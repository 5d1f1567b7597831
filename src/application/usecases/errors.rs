use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::{
    repositories::store_errors::StoreUnavailable, value_objects::validation::ValidationError,
};

pub const CUSTOMER_OR_PLAN_NOT_FOUND: &str = "Customer or Plan not found";
pub const SUBSCRIPTION_NOT_FOUND: &str = "Subscription not found";
pub const DATABASE_NOT_CONFIGURED: &str = "Database not configured";

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Reference(&'static str),
    #[error("{0}")]
    Configuration(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UseCaseError {
    /// Classifies a repository failure: an unreachable store is a configuration problem,
    /// anything else is internal.
    pub fn from_store(err: anyhow::Error) -> Self {
        if err.downcast_ref::<StoreUnavailable>().is_some() {
            UseCaseError::Configuration(DATABASE_NOT_CONFIGURED)
        } else {
            UseCaseError::Internal(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
            UseCaseError::Reference(_) => StatusCode::NOT_FOUND,
            UseCaseError::Configuration(_) | UseCaseError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UseCaseError>;
