use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* Sum of the holdings sharing the same classification label. Derived, never persisted. */
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AllocationBucket {
    pub label: String,
    pub value: Decimal,
}

/* Everything the pie chart needs for one slice */
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
    pub percentage: Decimal,
    pub color: &'static str,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub percentage: String,
    pub color: &'static str,
    pub checked: bool,
}

/* Text drawn in the hole of the donut */
#[derive(PartialEq, Debug, Clone)]
pub enum CenterLabel {
    Total { value: String, assets: String },
    Active { label: String, percentage: String, color: &'static str },
}
