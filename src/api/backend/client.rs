use log::{debug, error};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Response,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    errors::{BackendError, PostgrestError},
    structs::SessionContext,
};

use super::Query;

/* Client of the hosted backend: PostgREST for the tables, GoTrue for the authentication (see auth.rs).
The session is not global: the context is given at construction and shared with the pages.
Requests are sent once, there is no retry.
*/
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    pub(super) http: reqwest::Client,
    pub(super) base_url: String,
    pub(super) anon_key: String,
    pub(super) session: SessionContext,
}

impl SupabaseClient {
    pub fn new(config: &Config, session: SessionContext) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(SupabaseClient {
            http,
            base_url: config.supabase_url.clone(),
            anon_key: config.anon_key.clone(),
            session,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn rest_url(&self, query: &Query) -> String {
        let params = query.to_query_string();
        if params.is_empty() {
            return format!("{}/rest/v1/{}", self.base_url, query.table());
        }
        format!("{}/rest/v1/{}?{}", self.base_url, query.table(), params)
    }

    /* Requests run as the signed in user when there is one, as anonymous otherwise */
    pub(super) fn headers(&self) -> HeaderMap {
        let token = self
            .session
            .access_token()
            .unwrap_or_else(|| self.anon_key.clone());
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, BackendError> {
        let url = self.rest_url(query);
        debug!("GET {url}");
        let response = self.http.get(&url).headers(self.headers()).send().await?;
        let body = read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| BackendError::DeserializationError(e.to_string()))
    }

    pub async fn insert<B: Serialize + ?Sized>(&self, table: &str, rows: &B) -> Result<(), BackendError> {
        let url = self.rest_url(&Query::from(table));
        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;
        read_body(response).await?;
        Ok(())
    }

    pub async fn update<B: Serialize + ?Sized>(&self, query: &Query, body: &B) -> Result<(), BackendError> {
        let url = self.rest_url(query);
        debug!("PATCH {url}");
        let response = self
            .http
            .patch(&url)
            .headers(self.headers())
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;
        read_body(response).await?;
        Ok(())
    }
}

async fn read_body(response: Response) -> Result<String, BackendError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let error = parse_error(status.as_u16(), &body);
        error!("Backend error: {error}");
        return Err(error);
    }
    Ok(body)
}

/* PostgREST answers errors with a json body, proxies in front of it sometimes don't */
pub fn parse_error(status: u16, body: &str) -> BackendError {
    let error = serde_json::from_str::<PostgrestError>(body).unwrap_or_else(|_| PostgrestError {
        message: Some(body.trim().to_string()).filter(|m| !m.is_empty()),
        ..Default::default()
    });
    BackendError::Status { status, error }
}

#[cfg(test)]
mod tests {
    use crate::structs::{Session, User};

    use super::*;

    fn client() -> SupabaseClient {
        let config = Config::new("https://project.supabase.co/", "anon-key");
        SupabaseClient::new(&config, SessionContext::new()).unwrap()
    }

    #[test]
    fn test_rest_url() {
        let client = client();
        assert_eq!(
            client.rest_url(&Query::from("waitlist")),
            "https://project.supabase.co/rest/v1/waitlist"
        );
        assert_eq!(
            client.rest_url(&Query::from("profiles").select("*").eq("role", "creator")),
            "https://project.supabase.co/rest/v1/profiles?select=*&role=eq.creator"
        );
    }

    #[test]
    fn test_headers_follow_session() {
        let client = client();
        let headers = client.headers();
        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer anon-key");

        client.session().set(Some(Session {
            access_token: "user-token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: None,
            user: User {
                id: uuid::Uuid::new_v4(),
                email: None,
            },
        }));
        let headers = client.headers();
        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer user-token");
    }

    #[test]
    fn test_parse_error() {
        let body = r#"{"code":"23505","details":"Key (email)=(a@b.co) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"waitlist_email_key\""}"#;
        let error = parse_error(409, body);
        assert_eq!(error.code(), Some("23505"));
        match error {
            BackendError::Status { status, error } => {
                assert_eq!(status, 409);
                assert!(error.details.unwrap().contains("already exists"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_not_json() {
        let error = parse_error(502, "Bad Gateway");
        assert_eq!(error.code(), None);
        assert_eq!(error.to_string(), "Backend answered 502: Bad Gateway");
    }
}
