use chrono::{Duration, Utc};
use log::{info, warn};
use reqwest::{header::AUTHORIZATION, Response};
use serde::{Deserialize, Serialize};

use crate::{
    api::mapping::{map_session, map_user},
    errors::AuthError,
    structs::{Session, User},
};

use super::SupabaseClient;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionRow {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: Option<i64>,
    pub expires_at: Option<i64>,
    pub user: UserRow,
}

/* The signup answer depends on the project settings: a full session when emails are auto confirmed,
only the user while the confirmation email is pending. */
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(SessionRow),
    User(UserRow),
}

/* GoTrue changed its error shape over time, any of these can carry the message */
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: User,
    // None until the email is confirmed
    pub session: Option<Session>,
}

impl SupabaseClient {
    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.auth_url("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await?;
        let body = read_auth_body(response).await?;
        let row: SessionRow = serde_json::from_str(&body)
            .map_err(|e| AuthError::RequestError(e.to_string()))?;
        let session = map_session(row, Utc::now()).map_err(AuthError::InvalidResponse)?;

        info!("Signed in as {}", session.user.id);
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await?;
        let body = read_auth_body(response).await?;
        let outcome = parse_sign_up(&body)?;
        if let Some(session) = &outcome.session {
            self.session.set(Some(session.clone()));
        }
        Ok(outcome)
    }

    /* Asks the backend who owns the current token */
    pub async fn get_user(&self) -> Result<User, AuthError> {
        let token = self.session.access_token().ok_or(AuthError::NotSignedIn)?;
        let response = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        let body = read_auth_body(response).await?;
        let row: UserRow = serde_json::from_str(&body)
            .map_err(|e| AuthError::RequestError(e.to_string()))?;
        map_user(row).map_err(AuthError::InvalidResponse)
    }

    /* The local session is dropped even if the backend call fails */
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let token = match self.session.access_token() {
            Some(token) => token,
            None => return Ok(()),
        };
        self.session.clear();

        let response = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        if let Err(e) = read_auth_body(response).await {
            warn!("Logout was not acknowledged by the backend: {e}");
            return Err(e);
        }
        Ok(())
    }
}

async fn read_auth_body(response: Response) -> Result<String, AuthError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(parse_auth_error(status.as_u16(), &body));
    }
    Ok(body)
}

pub fn parse_auth_error(status: u16, body: &str) -> AuthError {
    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| format!("Authentication failed ({status})"));
    AuthError::Rejected(message)
}

pub fn parse_sign_up(body: &str) -> Result<SignUpOutcome, AuthError> {
    let response: SignUpResponse =
        serde_json::from_str(body).map_err(|e| AuthError::RequestError(e.to_string()))?;
    match response {
        SignUpResponse::Session(row) => {
            let session = map_session(row, Utc::now()).map_err(AuthError::InvalidResponse)?;
            Ok(SignUpOutcome {
                user: session.user.clone(),
                session: Some(session),
            })
        }
        SignUpResponse::User(row) => Ok(SignUpOutcome {
            user: map_user(row).map_err(AuthError::InvalidResponse)?,
            session: None,
        }),
    }
}

/* expires_at wins, expires_in is relative to when we received the answer */
pub fn expiry(row: &SessionRow, received_at: chrono::DateTime<Utc>) -> Option<chrono::DateTime<Utc>> {
    if let Some(at) = row.expires_at {
        return chrono::DateTime::from_timestamp(at, 0);
    }
    row.expires_in.map(|secs| received_at + Duration::seconds(secs))
}
