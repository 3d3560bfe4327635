use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, error_response};
use mongodb::error::{ErrorKind as MongoErrorKind, WriteFailure};
use thiserror::Error;

pub const USER_ALREADY_EXISTS: &str = "User already exists";
pub const USER_NOT_FOUND: &str = "User not found";
pub const ID_NOT_CORRECT: &str = "Id is not correct";
pub const USERNAME_ALREADY_EXISTS: &str = "Username already existed in the system";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong...";

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Application-level classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Conflict,
    NotFound,
    InvalidInput,
    Internal,
}

/// Failures surfaced by [`UserService`](crate::service::UserService).
///
/// Every variant carries the client-facing message. Once a failure has been
/// classified it travels unchanged up to the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Log `cause` and collapse it into the generic internal failure.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Unclassified user store failure");
        UserError::Internal(SOMETHING_WENT_WRONG.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Conflict(_) => ErrorKind::Conflict,
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::InvalidInput(_) => ErrorKind::InvalidInput,
            UserError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            UserError::Conflict(msg)
            | UserError::NotFound(msg)
            | UserError::InvalidInput(msg)
            | UserError::Internal(msg) => msg,
        }
    }

    /// Duplicate usernames answer 400, not 409.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Conflict | ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self.kind() {
            ErrorKind::Conflict => ErrorCode::Conflict,
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::InvalidInput => ErrorCode::InvalidId,
            ErrorKind::Internal => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = match self {
            UserError::Conflict(msg)
            | UserError::NotFound(msg)
            | UserError::InvalidInput(msg)
            | UserError::Internal(msg) => msg,
        };
        let message = if message.is_empty() {
            SOMETHING_WENT_WRONG.to_string()
        } else {
            message
        };

        error_response(status, message, code)
    }
}

/// Failures reported by a [`UserRepository`](crate::repository::UserRepository).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier is not a well-formed ObjectId
    #[error("Invalid identifier '{0}'")]
    InvalidId(String),

    /// Unique index violation
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            StoreError::DuplicateKey(err.to_string())
        } else {
            StoreError::Database(err.to_string())
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        MongoErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        MongoErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
