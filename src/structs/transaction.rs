use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/* A validated row of the `transactions` table, owned by one user */
#[derive(PartialEq, Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub user_id: Uuid,
    pub ticker: String,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}
