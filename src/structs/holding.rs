use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* A Holding is one position of a portfolio snapshot. The ticker is unique inside a snapshot.
The value is what the chart uses, quantity and prices are only needed for the gain/loss part of the page.
*/
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    pub value: Decimal,
    pub quantity: Option<Decimal>,
    pub avg_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub sector: Option<String>,
}

impl Holding {
    pub fn new(ticker: &str, value: Decimal) -> Self {
        Holding {
            ticker: ticker.to_string(),
            value,
            quantity: None,
            avg_price: None,
            current_price: None,
            sector: None,
        }
    }

    /* Position bought `quantity` times at `avg_price`, marked at `current_price` */
    pub fn priced(ticker: &str, quantity: Decimal, avg_price: Decimal, current_price: Decimal) -> Self {
        Holding {
            ticker: ticker.to_string(),
            value: quantity * current_price,
            quantity: Some(quantity),
            avg_price: Some(avg_price),
            current_price: Some(current_price),
            sector: None,
        }
    }

    pub fn with_sector(mut self, sector: &str) -> Self {
        self.sector = Some(sector.to_string());
        self
    }

    /* What was paid for the position, None when we don't know the quantity or the price */
    pub fn cost(&self) -> Option<Decimal> {
        match (self.quantity, self.avg_price) {
            (Some(quantity), Some(avg_price)) => Some(quantity * avg_price),
            _ => None,
        }
    }
}
