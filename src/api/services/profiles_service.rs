use log::error;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    api::{
        backend::{Query, SupabaseClient},
        mapping::map_profiles,
    },
    errors::BackendError,
    structs::{Profile, ProfileUpdate, Role},
};

pub const PROFILES_TABLE: &str = "profiles";

pub fn creators_query() -> Query {
    Query::from(PROFILES_TABLE)
        .select("*")
        .eq("role", Role::Creator)
}

pub fn profile_query(user_id: Uuid) -> Query {
    Query::from(PROFILES_TABLE).eq("id", user_id)
}

pub async fn fetch_creators(client: &SupabaseClient) -> Result<Vec<Profile>, BackendError> {
    let rows: Vec<Value> = client.select(&creators_query()).await.map_err(|e| {
        error!("Error fetching creators: {e}");
        e
    })?;
    Ok(map_profiles(rows))
}

pub async fn update_profile(
    client: &SupabaseClient,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<(), BackendError> {
    client
        .update(&profile_query(user_id), update)
        .await
        .map_err(|e| {
            error!("Error updating profile {user_id}: {e}");
            e
        })
}
