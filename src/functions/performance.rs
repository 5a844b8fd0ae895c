use rust_decimal::Decimal;

use crate::{functions::share_of, structs::Holding};

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct GainLoss {
    pub gain: Decimal,
    // None when the position cost nothing
    pub percentage: Option<Decimal>,
}

impl GainLoss {
    pub fn is_positive(&self) -> bool {
        !self.gain.is_sign_negative() || self.gain.is_zero()
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub total_gain: Decimal,
}

/* Gain of a position against what was paid for it. None if the holding has no quantity/price. */
pub fn gain_loss(holding: &Holding) -> Option<GainLoss> {
    let cost = holding.cost()?;
    let gain = holding.value - cost;
    let percentage = if cost.is_zero() {
        None
    } else {
        Some(share_of(gain, cost, 2))
    };
    Some(GainLoss { gain, percentage })
}

/* Holdings without a known cost count as invested at their current value */
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let mut total_invested = Decimal::ZERO;
    let mut current_value = Decimal::ZERO;
    for holding in holdings {
        total_invested += holding.cost().unwrap_or(holding.value);
        current_value += holding.value;
    }
    PortfolioSummary {
        total_invested,
        current_value,
        total_gain: current_value - total_invested,
    }
}
