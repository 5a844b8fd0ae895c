use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    api::backend::{expiry, SessionRow, UserRow},
    errors::ValidationError,
    structs::{Session, User},
};

pub fn map_user(row: UserRow) -> Result<User, ValidationError> {
    let id = Uuid::parse_str(&row.id).map_err(|_| ValidationError::InvalidValue {
        table: "auth.users",
        field: "id",
        value: row.id.clone(),
    })?;
    Ok(User {
        id,
        email: row.email,
    })
}

pub fn map_session(row: SessionRow, received_at: DateTime<Utc>) -> Result<Session, ValidationError> {
    let expires_at = expiry(&row, received_at);
    if row.access_token.is_empty() {
        return Err(ValidationError::MissingField {
            table: "auth.sessions",
            field: "access_token",
        });
    }
    Ok(Session {
        access_token: row.access_token,
        refresh_token: row.refresh_token,
        expires_at,
        user: map_user(row.user)?,
    })
}
