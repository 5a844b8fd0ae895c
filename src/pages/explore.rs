use crate::{
    api::{fetch_creators, SupabaseClient},
    structs::Profile,
    utils::format_eur,
};

pub const DEFAULT_AVATAR: &str = "/default-avatar.png";
pub const EMPTY_GRID_NOTICE: &str = "No creators yet. Be the first to sign up!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorCard {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub ytd_return: String,
    pub followers: u64,
    pub subscribe_label: String,
}

impl CreatorCard {
    pub fn from_profile(profile: &Profile) -> Self {
        let price = profile
            .subscription_price
            .map(format_eur)
            .unwrap_or_else(|| "€--".to_string());
        CreatorCard {
            id: profile.id.to_string(),
            name: profile.name.clone(),
            avatar: profile
                .profile_pic
                .clone()
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            bio: profile
                .bio
                .clone()
                .unwrap_or_else(|| "No bio yet".to_string()),
            ytd_return: profile
                .ytd_return
                .map(|r| format!("{}%", r.normalize()))
                .unwrap_or_else(|| "--".to_string()),
            followers: profile.follower_count,
            subscribe_label: format!("Subscribe {price}/month"),
        }
    }
}

/* The explore page: a failed fetch leaves the grid empty, even after a previous load (the error is logged by the service) */
#[derive(Debug, Clone, Default)]
pub struct ExploreGrid {
    creators: Vec<Profile>,
}

impl ExploreGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &SupabaseClient) {
        let creators = fetch_creators(client).await.unwrap_or_default();
        self.set_creators(creators);
    }

    pub fn set_creators(&mut self, creators: Vec<Profile>) {
        self.creators = creators;
    }

    pub fn cards(&self) -> Vec<CreatorCard> {
        self.creators.iter().map(CreatorCard::from_profile).collect()
    }

    pub fn empty_notice(&self) -> Option<&'static str> {
        if self.creators.is_empty() {
            Some(EMPTY_GRID_NOTICE)
        } else {
            None
        }
    }
}
