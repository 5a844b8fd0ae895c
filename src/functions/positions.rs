/* Rebuild the holdings of a user from the `transactions` table.

Buys add to the quantity and move the average cost, sells remove quantity at the running average cost (the average
itself doesn't change on a sell). We have no price feed here: a position is marked at the price of the most recent
trade on its ticker. */

use hashbrown::HashMap;
use rust_decimal::Decimal;

use crate::structs::{Holding, TradeSide, Transaction};

struct Position {
    ticker: String,
    quantity: Decimal,
    avg_price: Decimal,
    last_price: Decimal,
}

pub fn rollup_positions(transactions: &[Transaction]) -> Vec<Holding> {
    // The backend returns the most recent first, replay them oldest first
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.created_at);

    let mut positions: Vec<Position> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tx in ordered {
        let position = match index.get(tx.ticker.as_str()) {
            Some(&i) => &mut positions[i],
            None => {
                index.insert(tx.ticker.as_str(), positions.len());
                positions.push(Position {
                    ticker: tx.ticker.clone(),
                    quantity: Decimal::ZERO,
                    avg_price: Decimal::ZERO,
                    last_price: tx.price,
                });
                let last = positions.len() - 1;
                &mut positions[last]
            }
        };

        match tx.side {
            TradeSide::Buy => {
                let new_quantity = position.quantity + tx.quantity;
                if !new_quantity.is_zero() {
                    position.avg_price = (position.quantity * position.avg_price
                        + tx.quantity * tx.price)
                        / new_quantity;
                }
                position.quantity = new_quantity;
            }
            TradeSide::Sell => {
                if tx.quantity > position.quantity {
                    log::warn!(
                        "Selling {} {} but only {} are held, clamping to zero",
                        tx.quantity,
                        tx.ticker,
                        position.quantity
                    );
                    position.quantity = Decimal::ZERO;
                } else {
                    position.quantity -= tx.quantity;
                }
                if position.quantity.is_zero() {
                    position.avg_price = Decimal::ZERO;
                }
            }
        }
        // Replayed oldest first, the last trade seen is the most recent
        position.last_price = tx.price;
    }

    positions
        .into_iter()
        .filter(|position| !position.quantity.is_zero())
        .map(|position| {
            Holding::priced(
                &position.ticker,
                position.quantity,
                position.avg_price,
                position.last_price,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;

    fn tx(n: u32, ticker: &str, side: TradeSide, quantity: Decimal, price: Decimal) -> Transaction {
        Transaction {
            id: n.to_string(),
            user_id: Uuid::nil(),
            ticker: ticker.to_string(),
            side,
            quantity,
            price,
            created_at: Utc.with_ymd_and_hms(2025, 1, n, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_average_cost_and_mark() {
        // newest first, as returned by the backend
        let txs = vec![
            tx(3, "AAPL", TradeSide::Sell, dec!(10), dec!(180)),
            tx(2, "AAPL", TradeSide::Buy, dec!(10), dec!(160)),
            tx(1, "AAPL", TradeSide::Buy, dec!(10), dec!(140)),
        ];
        let holdings = rollup_positions(&txs);
        assert_eq!(holdings.len(), 1);
        let apple = &holdings[0];
        assert_eq!(apple.quantity, Some(dec!(10)));
        assert_eq!(apple.avg_price, Some(dec!(150)));
        assert_eq!(apple.current_price, Some(dec!(180)));
        assert_eq!(apple.value, dec!(1800));
    }

    #[test]
    fn test_closed_positions_are_dropped() {
        let txs = vec![
            tx(1, "TSLA", TradeSide::Buy, dec!(5), dec!(200)),
            tx(2, "MSFT", TradeSide::Buy, dec!(2), dec!(300)),
            tx(3, "TSLA", TradeSide::Sell, dec!(5), dec!(210)),
        ];
        let holdings = rollup_positions(&txs);
        let tickers: Vec<&str> = holdings.iter().map(|h| h.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["MSFT"]);
    }

    #[test]
    fn test_oversell_clamps() {
        let txs = vec![
            tx(1, "GOOGL", TradeSide::Buy, dec!(1), dec!(100)),
            tx(2, "GOOGL", TradeSide::Sell, dec!(3), dec!(110)),
            tx(3, "GOOGL", TradeSide::Buy, dec!(2), dec!(120)),
        ];
        let holdings = rollup_positions(&txs);
        assert_eq!(holdings[0].quantity, Some(dec!(2)));
        assert_eq!(holdings[0].avg_price, Some(dec!(120)));
    }

    #[test]
    fn test_mark_follows_dates_not_input_order() {
        let txs = vec![
            tx(2, "NVDA", TradeSide::Buy, dec!(1), dec!(90)),
            tx(4, "NVDA", TradeSide::Buy, dec!(1), dec!(70)),
            tx(1, "NVDA", TradeSide::Buy, dec!(2), dec!(100)),
            tx(3, "NVDA", TradeSide::Buy, dec!(1), dec!(130)),
        ];
        let holdings = rollup_positions(&txs);
        assert_eq!(holdings[0].quantity, Some(dec!(5)));
        assert_eq!(holdings[0].current_price, Some(dec!(70)));
        assert_eq!(holdings[0].value, dec!(350));
    }

    #[test]
    fn test_no_transactions() {
        assert!(rollup_positions(&[]).is_empty());
    }
}
