use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: User,
}

/* Holder of the current session, shared by the backend client and every page needing the signed in user.
Cloning gives another handle on the same session. Pages that need to react to sign in/out call `subscribe`.
*/
#[derive(Debug, Clone)]
pub struct SessionContext {
    sender: Arc<watch::Sender<Option<Session>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        SessionContext {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.sender.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.sender.borrow().as_ref().map(|session| session.user.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.sender
            .borrow()
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    pub fn set(&self, session: Option<Session>) {
        // send_replace never fails, even without receivers
        self.sender.send_replace(session);
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.sender.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
