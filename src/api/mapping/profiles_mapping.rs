use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    errors::ValidationError,
    structs::{Profile, Role},
};

const TABLE: &str = "profiles";

/* Shape of a `profiles` row as sent by PostgREST. Everything optional: the checks are done in map_profile. */
#[derive(Debug, Deserialize)]
pub struct ProfileRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
    pub investment_style: Option<String>,
    pub subscription_price: Option<Decimal>,
    pub interests: Option<String>,
    pub goal: Option<String>,
    pub ytd_return: Option<Decimal>,
    pub follower_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

pub fn map_profile(value: Value) -> Result<Profile, ValidationError> {
    let row: ProfileRow = serde_json::from_value(value).map_err(|e| ValidationError::Malformed {
        table: TABLE,
        reason: e.to_string(),
    })?;

    let raw_id = row.id.ok_or(ValidationError::MissingField {
        table: TABLE,
        field: "id",
    })?;
    let id = Uuid::parse_str(&raw_id).map_err(|_| ValidationError::InvalidValue {
        table: TABLE,
        field: "id",
        value: raw_id.clone(),
    })?;

    let name = row.name.ok_or(ValidationError::MissingField {
        table: TABLE,
        field: "name",
    })?;

    let role = row.role.map(|raw| raw.parse::<Role>()).transpose()?;

    if let Some(price) = row.subscription_price {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ValidationError::InvalidValue {
                table: TABLE,
                field: "subscription_price",
                value: price.to_string(),
            });
        }
    }

    let follower_count = match row.follower_count {
        Some(count) => u64::try_from(count).map_err(|_| ValidationError::InvalidValue {
            table: TABLE,
            field: "follower_count",
            value: count.to_string(),
        })?,
        None => 0,
    };

    Ok(Profile {
        id,
        name,
        role,
        bio: non_empty(row.bio),
        profile_pic: non_empty(row.profile_pic),
        investment_style: non_empty(row.investment_style),
        subscription_price: row.subscription_price,
        interests: non_empty(row.interests),
        goal: non_empty(row.goal),
        ytd_return: row.ytd_return,
        follower_count,
        created_at: row.created_at,
    })
}

/* One broken row should not hide all the others: it is logged and skipped */
pub fn map_profiles(values: Vec<Value>) -> Vec<Profile> {
    values
        .into_iter()
        .filter_map(|value| match map_profile(value) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Skipping profile: {e}");
                None
            }
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
