use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{entity} with ID {id} does not exist.")]
    NotFound { entity: &'static str, id: String },
    #[error("argument must not be null: {0}")]
    NullArgument(&'static str),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    pub fn storage(err: impl Display) -> Self { Self::Storage(err.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound { .. } => 2001,
            ServiceError::NullArgument(_) => 2002,
            ServiceError::Validation(_) => 2003,
            ServiceError::Model(_) => 2004,
            ServiceError::Storage(_) => 2100,
        }
    }
}
