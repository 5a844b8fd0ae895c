use crate::{
    api::{SignUpOutcome, SupabaseClient},
    errors::AuthError,
    structs::{Route, Session},
};

pub const CONFIRM_EMAIL_NOTICE: &str = "✅ Check your email to confirm your account!";

/* What the page does once a request came back */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(Route),
    NoticeThenRedirect { notice: &'static str, route: Route },
    // The error is already on the form
    Stay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub async fn login(&mut self, client: &SupabaseClient) -> LoginOutcome {
        self.start();
        let result = client.sign_in_with_password(&self.email, &self.password).await;
        self.apply_login(result)
    }

    pub async fn sign_up(&mut self, client: &SupabaseClient) -> LoginOutcome {
        self.start();
        let result = client.sign_up(&self.email, &self.password).await;
        self.apply_sign_up(result)
    }

    pub fn apply_login(&mut self, result: Result<Session, AuthError>) -> LoginOutcome {
        self.loading = false;
        match result {
            Ok(session) => LoginOutcome::Redirect(Route::Portfolio(session.user.id)),
            Err(e) => {
                self.error = Some(e.to_string());
                LoginOutcome::Stay
            }
        }
    }

    pub fn apply_sign_up(&mut self, result: Result<SignUpOutcome, AuthError>) -> LoginOutcome {
        self.loading = false;
        match result {
            Ok(_) => LoginOutcome::NoticeThenRedirect {
                notice: CONFIRM_EMAIL_NOTICE,
                route: Route::Onboarding,
            },
            Err(e) => {
                self.error = Some(e.to_string());
                LoginOutcome::Stay
            }
        }
    }

    pub fn button_label(&self, idle: &'static str) -> &'static str {
        if self.loading {
            "Loading..."
        } else {
            idle
        }
    }
}
