use log::{error, info};

use crate::{
    api::backend::SupabaseClient,
    errors::WaitlistError,
    structs::WaitlistEntry,
    utils::is_valid_email,
};

pub const WAITLIST_TABLE: &str = "waitlist";

/* Checks the address locally, then inserts it. The unique constraint on the table is what detects a second signup. */
pub async fn join_waitlist(client: &SupabaseClient, email: &str) -> Result<(), WaitlistError> {
    let entry = waitlist_entry(email)?;
    match client.insert(WAITLIST_TABLE, &[&entry]).await {
        Ok(()) => {
            info!("New waitlist signup");
            Ok(())
        }
        Err(e) => {
            error!("Waitlist insert failed: {e}");
            Err(WaitlistError::from(e))
        }
    }
}

pub fn waitlist_entry(email: &str) -> Result<WaitlistEntry, WaitlistError> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(WaitlistError::InvalidEmail);
    }
    Ok(WaitlistEntry {
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_is_trimmed() {
        let entry = waitlist_entry("  ada@example.com ").unwrap();
        assert_eq!(entry.email, "ada@example.com");
        assert_eq!(
            serde_json::to_string(&[&entry]).unwrap(),
            r#"[{"email":"ada@example.com"}]"#
        );
    }

    #[test]
    fn test_invalid_email_never_reaches_backend() {
        assert!(matches!(
            waitlist_entry("not-an-email"),
            Err(WaitlistError::InvalidEmail)
        ));
    }
}
