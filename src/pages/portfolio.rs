use hashbrown::HashMap;
use uuid::Uuid;

use crate::{
    api::{fetch_transactions, SupabaseClient},
    functions::{
        aggregate, by_sector, by_ticker, center_label, chart_slices, color_for, gain_loss,
        legend, rollup_positions, share_of, summarize, PortfolioSummary,
    },
    structs::{AllocationBucket, CenterLabel, ChartSlice, Holding, LegendEntry, SelectionState},
    utils::{format_fixed, format_usd},
};

pub const EMPTY_CHART_NOTICE: &str = "Select at least one asset to view the chart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    Ticker,
    Sector,
}

/* One line of the holdings list next to the chart */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingRow {
    pub ticker: String,
    pub color: &'static str,
    pub selected: bool,
    pub value: String,
    pub detail: Option<String>,
    pub gain: Option<String>,
    pub gain_is_positive: bool,
    pub allocation: Option<String>,
}

/* The portfolio page of one user. Every ticker starts selected; unselecting one removes it from the chart but not from the list.
Any change of the slice set drops the hover/click state: indices would point to other slices. */
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub owner: Uuid,
    holdings: Vec<Holding>,
    selected: HashMap<String, bool>,
    classification: Classification,
    selection: SelectionState,
}

impl PortfolioView {
    pub fn new(owner: Uuid, holdings: Vec<Holding>) -> Self {
        let selected = holdings
            .iter()
            .map(|holding| (holding.ticker.clone(), true))
            .collect();
        PortfolioView {
            owner,
            holdings,
            selected,
            classification: Classification::default(),
            selection: SelectionState::new(),
        }
    }

    /* Holdings rebuilt from the owner's transactions; a failed fetch shows an empty portfolio */
    pub async fn load(client: &SupabaseClient, owner: Uuid) -> Self {
        let holdings = match fetch_transactions(client, owner).await {
            Ok(transactions) => rollup_positions(&transactions),
            Err(_) => Vec::new(),
        };
        Self::new(owner, holdings)
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn is_selected(&self, ticker: &str) -> bool {
        self.selected.get(ticker).copied().unwrap_or(false)
    }

    pub fn toggle_ticker(&mut self, ticker: &str) {
        if let Some(selected) = self.selected.get_mut(ticker) {
            *selected = !*selected;
            self.selection.clear();
        }
    }

    pub fn set_classification(&mut self, classification: Classification) {
        if self.classification != classification {
            self.classification = classification;
            self.selection.clear();
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn on_hover_enter(&mut self, index: usize) {
        self.selection.on_hover_enter(index);
    }

    pub fn on_hover_exit(&mut self) {
        self.selection.on_hover_exit();
    }

    pub fn on_activate(&mut self, index: usize) {
        self.selection.on_activate(index);
    }

    pub fn buckets(&self) -> Vec<AllocationBucket> {
        let visible: Vec<Holding> = self
            .holdings
            .iter()
            .filter(|holding| self.is_selected(&holding.ticker))
            .cloned()
            .collect();
        match self.classification {
            Classification::Ticker => aggregate(&visible, by_ticker),
            Classification::Sector => aggregate(&visible, by_sector),
        }
    }

    pub fn chart(&self) -> Option<Vec<ChartSlice>> {
        chart_slices(&self.buckets())
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        match self.chart() {
            Some(slices) => legend(&slices, &self.selection),
            None => Vec::new(),
        }
    }

    pub fn center_label(&self) -> Option<CenterLabel> {
        self.chart()
            .map(|slices| center_label(&slices, &self.selection))
    }

    pub fn empty_chart_notice(&self) -> Option<&'static str> {
        match self.chart() {
            Some(_) => None,
            None => Some(EMPTY_CHART_NOTICE),
        }
    }

    pub fn summary(&self) -> PortfolioSummary {
        summarize(&self.holdings)
    }

    pub fn rows(&self) -> Vec<HoldingRow> {
        let total = self.summary().current_value;
        let has_chart = self.chart().is_some();

        self.holdings
            .iter()
            .enumerate()
            .map(|(index, holding)| {
                let selected = self.is_selected(&holding.ticker);
                let detail = match (holding.quantity, holding.current_price) {
                    (Some(quantity), Some(price)) => Some(format!(
                        "{} shares @ {}",
                        quantity.normalize(),
                        format_usd(price)
                    )),
                    _ => None,
                };
                let gain = gain_loss(holding);
                let gain_text = gain.map(|g| {
                    let arrow = if g.is_positive() { "▲" } else { "▼" };
                    match g.percentage {
                        Some(pct) => format!("{arrow} {} ({}%)", format_usd(g.gain), format_fixed(pct, 2)),
                        None => format!("{arrow} {}", format_usd(g.gain)),
                    }
                });
                let allocation = if selected && has_chart && !total.is_zero() {
                    Some(format!(
                        "Portfolio allocation: {}%",
                        format_fixed(share_of(holding.value, total, 1), 1)
                    ))
                } else {
                    None
                };
                HoldingRow {
                    ticker: holding.ticker.clone(),
                    color: color_for(index),
                    selected,
                    value: format_usd(holding.value),
                    detail,
                    gain: gain_text,
                    gain_is_positive: gain.map(|g| g.is_positive()).unwrap_or(true),
                    allocation,
                }
            })
            .collect()
    }
}
