use log::error;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    api::{
        backend::{Query, SupabaseClient},
        mapping::map_transactions,
    },
    errors::BackendError,
    structs::Transaction,
};

pub const TRANSACTIONS_TABLE: &str = "transactions";

/* Most recent first */
pub fn transactions_query(user_id: Uuid) -> Query {
    Query::from(TRANSACTIONS_TABLE)
        .select("*")
        .eq("user_id", user_id)
        .order("created_at", true)
}

pub async fn fetch_transactions(
    client: &SupabaseClient,
    user_id: Uuid,
) -> Result<Vec<Transaction>, BackendError> {
    let rows: Vec<Value> = client
        .select(&transactions_query(user_id))
        .await
        .map_err(|e| {
            error!("Error fetching transactions of {user_id}: {e}");
            e
        })?;
    Ok(map_transactions(rows))
}
