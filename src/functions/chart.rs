use rust_decimal::Decimal;

use crate::{
    functions::percentages,
    structs::{AllocationBucket, CenterLabel, ChartSlice, LegendEntry, SelectionState},
    utils::{format_fixed, format_usd},
};

pub const PALETTE: [&str; 5] = ["#005F73", "#0A9396", "#94D2BD", "#E9D8A6", "#EE9B00"];

/* Color of the slice at `index`, the palette wraps around when there are more slices than colors */
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/* None means "no chart": no bucket or a zero total */
pub fn chart_slices(buckets: &[AllocationBucket]) -> Option<Vec<ChartSlice>> {
    let percentages = percentages(buckets)?;
    let slices = buckets
        .iter()
        .zip(percentages)
        .enumerate()
        .map(|(index, (bucket, percentage))| ChartSlice {
            label: bucket.label.clone(),
            value: bucket.value,
            percentage,
            color: color_for(index),
        })
        .collect();
    Some(slices)
}

pub fn legend(slices: &[ChartSlice], selection: &SelectionState) -> Vec<LegendEntry> {
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| LegendEntry {
            label: slice.label.clone(),
            percentage: format!("{}%", format_fixed(slice.percentage, 0)),
            color: slice.color,
            checked: selection.click_index() == Some(index),
        })
        .collect()
}

pub fn center_label(slices: &[ChartSlice], selection: &SelectionState) -> CenterLabel {
    if let Some(slice) = selection.active_index().and_then(|index| slices.get(index)) {
        return CenterLabel::Active {
            label: slice.label.clone(),
            percentage: format!("{}%", format_fixed(slice.percentage, 1)),
            color: slice.color,
        };
    }

    let value = slices.iter().fold(Decimal::ZERO, |acc, s| acc + s.value);
    let assets = if slices.len() == 1 {
        String::from("1 Asset")
    } else {
        format!("{} Assets", slices.len())
    };
    CenterLabel::Total {
        value: format_usd(value),
        assets,
    }
}
