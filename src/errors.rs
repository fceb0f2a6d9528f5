use sea_orm::error::{DbErr, SqlErr};
use thiserror::Error;

/// Crate-level error type. Everything the persistence layer can fail with is
/// folded into one enum so embedding applications match on a single surface.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    /// Callers that care about unique-constraint conflicts (ticket folios,
    /// user names, cut dates) can branch without parsing engine messages.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Database(db_err) => {
                matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_fold_into_app_error() {
        let err = AppError::Validation("nombre_usuario is required".into());
        assert!(err.to_string().contains("nombre_usuario"));
    }

    #[test]
    fn db_error_is_not_reported_as_unique_violation_by_default() {
        let err = AppError::Database(DbErr::Custom("boom".into()));
        assert!(!err.is_unique_violation());
    }
}
