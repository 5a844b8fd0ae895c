use chrono::{DateTime, Duration, Utc};

use crate::{api::join_waitlist, api::SupabaseClient, errors::WaitlistError};

/* How long the button says "Joined" after a signup */
const JOINED_FEEDBACK_SECS: i64 = 3;

/* State of the waitlist form of the landing page (the page shows it twice, both bind the same state) */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub email: String,
    pub error: Option<String>,
    submitted_at: Option<DateTime<Utc>>,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub async fn submit(&mut self, client: &SupabaseClient) {
        self.error = None;
        let result = join_waitlist(client, &self.email).await;
        self.apply(result, Utc::now());
    }

    pub fn apply(&mut self, result: Result<(), WaitlistError>, now: DateTime<Utc>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.email.clear();
                self.submitted_at = Some(now);
            }
            Err(e) => self.error = Some(e.user_message().to_string()),
        }
    }

    pub fn is_submitted(&self, now: DateTime<Utc>) -> bool {
        self.submitted_at
            .is_some_and(|at| now - at < Duration::seconds(JOINED_FEEDBACK_SECS))
    }

    pub fn button_label(&self, now: DateTime<Utc>) -> &'static str {
        if self.is_submitted(now) {
            "✓ Joined!"
        } else {
            "Join the Waitlist"
        }
    }
}
