use rust_decimal::Decimal;

use crate::{
    api::{update_profile, SupabaseClient},
    errors::{AuthError, BackendError},
    structs::{ProfileUpdate, Role, Route, User},
    utils::format_eur,
};

const STEPS_WITHOUT_ROLE: u8 = 2;
const STEPS_WITH_ROLE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    ChooseRole,
    BasicProfile,
    CreatorDetails,
    FollowerPreferences,
    Review,
}

#[derive(Debug)]
pub enum OnboardingError {
    NoRole,
    Auth(AuthError),
    Backend(BackendError),
}

impl std::fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OnboardingError::NoRole => write!(f, "Choose how you want to join first"),
            OnboardingError::Auth(e) => write!(f, "{e}"),
            OnboardingError::Backend(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for OnboardingError {}

/* Five steps once a role is picked, two before: the wizard can't go past the role choice without one.
Step 4 is the only one depending on the role. */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingWizard {
    step: u8,
    pub role: Option<Role>,
    pub name: String,
    pub bio: String,
    pub investment_style: String,
    pub subscription_price: Option<Decimal>,
    pub interests: String,
    pub goal: String,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        OnboardingWizard {
            step: 1,
            ..Default::default()
        }
    }

    pub fn step_number(&self) -> u8 {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        if self.role.is_some() {
            STEPS_WITH_ROLE
        } else {
            STEPS_WITHOUT_ROLE
        }
    }

    pub fn progress_percent(&self) -> Decimal {
        Decimal::from(self.step) / Decimal::from(self.total_steps()) * Decimal::ONE_HUNDRED
    }

    pub fn step(&self) -> Step {
        match (self.step, self.role) {
            (1, _) => Step::Welcome,
            (2, _) => Step::ChooseRole,
            (3, _) => Step::BasicProfile,
            (4, Some(Role::Creator)) => Step::CreatorDetails,
            (4, _) => Step::FollowerPreferences,
            _ => Step::Review,
        }
    }

    pub fn choose_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 1
    }

    pub fn is_last_step(&self) -> bool {
        self.step >= self.total_steps()
    }

    pub fn next(&mut self) {
        if self.step < self.total_steps() {
            self.step += 1;
        }
    }

    pub fn back(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /* Typed in the number field. Anything not a number clears the price. */
    pub fn set_subscription_price(&mut self, raw: &str) {
        self.subscription_price = raw.trim().parse::<Decimal>().ok();
    }

    pub fn profile_update(&self) -> Option<ProfileUpdate> {
        match self.role? {
            Role::Creator => Some(ProfileUpdate::Creator {
                name: self.name.clone(),
                bio: self.bio.clone(),
                investment_style: self.investment_style.clone(),
                subscription_price: self.subscription_price,
            }),
            Role::Follower => Some(ProfileUpdate::Follower {
                name: self.name.clone(),
                interests: self.interests.clone(),
                goal: self.goal.clone(),
            }),
        }
    }

    /* Lines of the review step */
    pub fn summary(&self) -> Vec<String> {
        let role = self.role.map(|r| r.to_string()).unwrap_or_default();
        let mut lines = vec![format!("Role: {role}"), format!("Name: {}", or_dash(&self.name))];
        match self.role {
            Some(Role::Creator) => {
                lines.push(format!("Bio: {}", or_dash(&self.bio)));
                lines.push(format!("Style: {}", or_dash(&self.investment_style)));
                let price = match self.subscription_price {
                    Some(price) if !price.is_zero() => format_eur(price),
                    _ => "—".to_string(),
                };
                lines.push(format!("Price: {price}"));
            }
            Some(Role::Follower) => {
                lines.push(format!("Interests: {}", or_dash(&self.interests)));
                lines.push(format!("Goal: {}", or_dash(&self.goal)));
            }
            None => (),
        }
        lines
    }

    /* Where to go once the profile is saved */
    pub fn destination(role: Role, user: &User) -> Route {
        match role {
            Role::Creator => Route::Portfolio(user.id),
            Role::Follower => Route::Explore,
        }
    }

    pub async fn finish(&self, client: &SupabaseClient) -> Result<Route, OnboardingError> {
        /* The local session may be stale, the backend tells who owns the token */
        let user = client.get_user().await.map_err(OnboardingError::Auth)?;
        let update = self.profile_update().ok_or(OnboardingError::NoRole)?;
        update_profile(client, user.id, &update)
            .await
            .map_err(OnboardingError::Backend)?;
        Ok(Self::destination(update.role(), &user))
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_two_steps_until_role() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.step(), Step::Welcome);
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.total_steps(), 2);
        assert_eq!(wizard.progress_percent(), dec!(50));

        wizard.next();
        assert_eq!(wizard.step(), Step::ChooseRole);
        assert!(wizard.is_last_step());
        wizard.next();
        assert_eq!(wizard.step_number(), 2);

        wizard.choose_role(Role::Follower);
        assert_eq!(wizard.total_steps(), 5);
        assert!(!wizard.is_last_step());
        assert_eq!(wizard.progress_percent(), dec!(40));
    }

    #[test]
    fn test_branch_on_role() {
        let mut wizard = OnboardingWizard::new();
        wizard.next();
        wizard.choose_role(Role::Creator);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step(), Step::CreatorDetails);

        wizard.choose_role(Role::Follower);
        assert_eq!(wizard.step(), Step::FollowerPreferences);

        wizard.next();
        assert_eq!(wizard.step(), Step::Review);
        assert!(wizard.is_last_step());
        wizard.next();
        assert_eq!(wizard.step_number(), 5);
        assert_eq!(wizard.progress_percent(), dec!(100));

        for _ in 0..10 {
            wizard.back();
        }
        assert_eq!(wizard.step_number(), 1);
    }

    #[test]
    fn test_creator_payload_and_summary() {
        let mut wizard = OnboardingWizard::new();
        wizard.choose_role(Role::Creator);
        wizard.name = "Ada".to_string();
        wizard.investment_style = "growth".to_string();
        wizard.set_subscription_price("4.50");

        assert_eq!(
            wizard.profile_update(),
            Some(ProfileUpdate::Creator {
                name: "Ada".to_string(),
                bio: String::new(),
                investment_style: "growth".to_string(),
                subscription_price: Some(dec!(4.5)),
            })
        );
        assert_eq!(
            wizard.summary(),
            vec!["Role: creator", "Name: Ada", "Bio: —", "Style: growth", "Price: €4.5"]
        );

        wizard.set_subscription_price("abc");
        assert_eq!(wizard.subscription_price, None);
        assert_eq!(wizard.summary()[4], "Price: —");
    }

    #[test]
    fn test_follower_payload_and_summary() {
        let mut wizard = OnboardingWizard::new();
        wizard.choose_role(Role::Follower);
        wizard.interests = "crypto".to_string();

        assert_eq!(
            wizard.profile_update(),
            Some(ProfileUpdate::Follower {
                name: String::new(),
                interests: "crypto".to_string(),
                goal: String::new(),
            })
        );
        assert_eq!(
            wizard.summary(),
            vec!["Role: follower", "Name: —", "Interests: crypto", "Goal: —"]
        );
    }

    #[test]
    fn test_no_payload_without_role() {
        assert_eq!(OnboardingWizard::new().profile_update(), None);
    }

    #[test]
    fn test_destination() {
        let user = User {
            id: Uuid::new_v4(),
            email: None,
        };
        assert_eq!(
            OnboardingWizard::destination(Role::Creator, &user),
            Route::Portfolio(user.id)
        );
        assert_eq!(
            OnboardingWizard::destination(Role::Follower, &user),
            Route::Explore
        );
    }
}
