use std::fmt;

use super::BackendError;

/* Postgres unique_violation, raised by the unique constraint on waitlist.email */
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone)]
pub enum WaitlistError {
    InvalidEmail,
    AlreadyJoined,
    Backend(BackendError),
}

impl WaitlistError {
    /* Text displayed under the form */
    pub fn user_message(&self) -> &'static str {
        match self {
            WaitlistError::InvalidEmail => "Please enter a valid email address.",
            WaitlistError::AlreadyJoined => "This email is already on the waitlist.",
            WaitlistError::Backend(_) => "Something went wrong. Please try again.",
        }
    }
}

impl From<BackendError> for WaitlistError {
    fn from(error: BackendError) -> Self {
        if error.code() == Some(UNIQUE_VIOLATION) {
            WaitlistError::AlreadyJoined
        } else {
            WaitlistError::Backend(error)
        }
    }
}

impl fmt::Display for WaitlistError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WaitlistError::Backend(error) => write!(f, "{error}"),
            other => write!(f, "{}", other.user_message()),
        }
    }
}

impl std::error::Error for WaitlistError {}
