use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Creator,
    Follower,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Creator => "creator",
            Role::Follower => "follower",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "creator" => Ok(Role::Creator),
            "follower" => Ok(Role::Follower),
            _ => Err(ValidationError::InvalidValue {
                table: "profiles",
                field: "role",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/* A validated row of the `profiles` table. Rows are mapped into this in api::mapping, never cast. */
#[derive(PartialEq, Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub role: Option<Role>,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
    pub investment_style: Option<String>,
    pub subscription_price: Option<Decimal>,
    pub interests: Option<String>,
    pub goal: Option<String>,
    pub ytd_return: Option<Decimal>,
    pub follower_count: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/* What the onboarding writes to the profile of the signed in user. Only the fields of the chosen role are sent. */
#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ProfileUpdate {
    Creator {
        name: String,
        bio: String,
        investment_style: String,
        subscription_price: Option<Decimal>,
    },
    Follower {
        name: String,
        interests: String,
        goal: String,
    },
}

impl ProfileUpdate {
    pub fn role(&self) -> Role {
        match self {
            ProfileUpdate::Creator { .. } => Role::Creator,
            ProfileUpdate::Follower { .. } => Role::Follower,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct WaitlistEntry {
    pub email: String,
}
