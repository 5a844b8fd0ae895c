use log::warn;
use tokio::sync::watch;

use crate::{
    api::SupabaseClient,
    structs::{Route, Session, SessionContext, User},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: Route },
    Logout,
}

pub fn nav_items(user: Option<&User>) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link {
        label: "Explore",
        route: Route::Explore,
    }];
    match user {
        Some(user) => {
            items.push(NavItem::Link {
                label: "My Portfolio",
                route: Route::Portfolio(user.id),
            });
            items.push(NavItem::Logout);
        }
        None => items.push(NavItem::Link {
            label: "Login",
            route: Route::Login,
        }),
    }
    items
}

/* Top navigation. Follows the session through its own subscription instead of reading a global. */
#[derive(Debug)]
pub struct Header {
    receiver: watch::Receiver<Option<Session>>,
    user: Option<User>,
}

impl Header {
    pub fn new(session: &SessionContext) -> Self {
        let mut receiver = session.subscribe();
        let user = receiver
            .borrow_and_update()
            .as_ref()
            .map(|session| session.user.clone());
        Header { receiver, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn items(&self) -> Vec<NavItem> {
        nav_items(self.user.as_ref())
    }

    /* Picks up a change without waiting */
    pub fn refresh(&mut self) {
        if self.receiver.has_changed().unwrap_or(false) {
            self.user = self
                .receiver
                .borrow_and_update()
                .as_ref()
                .map(|session| session.user.clone());
        }
    }

    /* Waits for the next sign in/out. False once the session context is gone. */
    pub async fn changed(&mut self) -> bool {
        if self.receiver.changed().await.is_err() {
            return false;
        }
        self.user = self
            .receiver
            .borrow_and_update()
            .as_ref()
            .map(|session| session.user.clone());
        true
    }

    pub async fn logout(&self, client: &SupabaseClient) {
        if let Err(e) = client.sign_out().await {
            warn!("Sign out failed: {e}");
        }
    }
}
