use std::fmt;

/* A row coming from the backend that doesn't match the shape we expect */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField { table: &'static str, field: &'static str },
    InvalidValue { table: &'static str, field: &'static str, value: String },
    Malformed { table: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::MissingField { table, field } => {
                write!(f, "Row of {table} is missing {field}")
            }
            ValidationError::InvalidValue { table, field, value } => {
                write!(f, "Row of {table} has an invalid {field}: {value}")
            }
            ValidationError::Malformed { table, reason } => {
                write!(f, "Row of {table} could not be read: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
