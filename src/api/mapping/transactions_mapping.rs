use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    errors::ValidationError,
    structs::{TradeSide, Transaction},
};

const TABLE: &str = "transactions";

#[derive(Debug, Deserialize)]
pub struct TransactionRow {
    // bigint or uuid depending on how the table was created
    pub id: Option<Value>,
    pub user_id: Option<String>,
    pub ticker: Option<String>,
    pub side: Option<String>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

fn missing(field: &'static str) -> ValidationError {
    ValidationError::MissingField { table: TABLE, field }
}

fn invalid(field: &'static str, value: impl ToString) -> ValidationError {
    ValidationError::InvalidValue {
        table: TABLE,
        field,
        value: value.to_string(),
    }
}

pub fn map_transaction(value: Value) -> Result<Transaction, ValidationError> {
    let row: TransactionRow = serde_json::from_value(value).map_err(|e| ValidationError::Malformed {
        table: TABLE,
        reason: e.to_string(),
    })?;

    let id = match row.id.ok_or(missing("id"))? {
        Value::String(id) => id,
        Value::Number(id) => id.to_string(),
        other => return Err(invalid("id", other)),
    };

    let raw_user = row.user_id.ok_or(missing("user_id"))?;
    let user_id = Uuid::parse_str(&raw_user).map_err(|_| invalid("user_id", &raw_user))?;

    let ticker = row
        .ticker
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .ok_or(missing("ticker"))?;

    let raw_side = row.side.ok_or(missing("side"))?;
    let side = match raw_side.to_lowercase().as_str() {
        "buy" => TradeSide::Buy,
        "sell" => TradeSide::Sell,
        _ => return Err(invalid("side", raw_side)),
    };

    let quantity = row.quantity.ok_or(missing("quantity"))?;
    if quantity <= Decimal::ZERO {
        return Err(invalid("quantity", quantity));
    }
    let price = row.price.ok_or(missing("price"))?;
    if price < Decimal::ZERO {
        return Err(invalid("price", price));
    }
    let created_at = row.created_at.ok_or(missing("created_at"))?;

    Ok(Transaction {
        id,
        user_id,
        ticker,
        side,
        quantity,
        price,
        created_at,
    })
}

pub fn map_transactions(values: Vec<Value>) -> Vec<Transaction> {
    values
        .into_iter()
        .filter_map(|value| match map_transaction(value) {
            Ok(tx) => Some(tx),
            Err(e) => {
                warn!("Skipping transaction: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn row() -> Value {
        json!({
            "id": 17,
            "user_id": "0c6c4a5e-4b47-4c2f-9d6e-1a7f3b8e2d10",
            "ticker": "aapl",
            "side": "BUY",
            "quantity": 3,
            "price": 175.5,
            "created_at": "2025-03-01T10:00:00+00:00"
        })
    }

    #[test]
    fn test_valid_row() {
        let tx = map_transaction(row()).unwrap();
        assert_eq!(tx.id, "17");
        assert_eq!(tx.ticker, "AAPL");
        assert_eq!(tx.side, TradeSide::Buy);
        assert_eq!(tx.quantity, dec!(3));
        assert_eq!(tx.price, dec!(175.5));
    }

    #[test]
    fn test_rejected_rows() {
        let mut bad_side = row();
        bad_side["side"] = json!("short");
        assert!(matches!(
            map_transaction(bad_side),
            Err(ValidationError::InvalidValue { field: "side", .. })
        ));

        let mut zero_quantity = row();
        zero_quantity["quantity"] = json!(0);
        assert!(matches!(
            map_transaction(zero_quantity),
            Err(ValidationError::InvalidValue { field: "quantity", .. })
        ));

        let mut no_date = row();
        no_date["created_at"] = Value::Null;
        assert!(matches!(
            map_transaction(no_date),
            Err(ValidationError::MissingField { field: "created_at", .. })
        ));

        let mut bad_id = row();
        bad_id["id"] = json!([1]);
        assert!(matches!(
            map_transaction(bad_id),
            Err(ValidationError::InvalidValue { field: "id", .. })
        ));
    }

    #[test]
    fn test_map_transactions_skips_invalid() {
        let mut bad = row();
        bad["user_id"] = json!("someone");
        let txs = map_transactions(vec![row(), bad]);
        assert_eq!(txs.len(), 1);
    }
}
