use std::fmt;

use serde::Deserialize;

use super::ValidationError;

/* Error body returned by PostgREST on a non success status */
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone)]
pub enum BackendError {
    RequestError(String),
    Status { status: u16, error: PostgrestError },
    DeserializationError(String),
}

impl BackendError {
    /* Postgres error code, for instance 23505 on a unique constraint violation */
    pub fn code(&self) -> Option<&str> {
        match self {
            BackendError::Status { error, .. } => error.code.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackendError::RequestError(error) => write!(f, "Request failed: {error}"),
            BackendError::Status { status, error } => {
                let message = error.message.as_deref().unwrap_or("no message");
                match &error.code {
                    Some(code) => write!(f, "Backend answered {status} ({code}): {message}"),
                    None => write!(f, "Backend answered {status}: {message}"),
                }
            }
            BackendError::DeserializationError(e) => {
                write!(f, "Error during serde deserialisation: {e}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        BackendError::RequestError(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    // Message from the auth service, shown as is to the user
    Rejected(String),
    NotSignedIn,
    RequestError(String),
    InvalidResponse(ValidationError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::Rejected(message) => write!(f, "{message}"),
            AuthError::NotSignedIn => write!(f, "You need to be signed in"),
            AuthError::RequestError(error) => write!(f, "{error}"),
            AuthError::InvalidResponse(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        AuthError::RequestError(error.to_string())
    }
}
