/* Grouping of the holdings into the buckets drawn by the pie chart. */

use hashbrown::HashMap;
use rust_decimal::Decimal;

use crate::{
    structs::{AllocationBucket, Holding},
    utils::round_half_up,
};

/* One pass over the holdings, summing the values per label.
Buckets come out in the order their label is first seen: the chart colors them by position, so sorting here would
shuffle the colors between renders. */
pub fn aggregate<F>(holdings: &[Holding], classify: F) -> Vec<AllocationBucket>
where
    F: Fn(&Holding) -> String,
{
    let mut buckets: Vec<AllocationBucket> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for holding in holdings {
        let label = classify(holding);
        match positions.get(&label) {
            Some(&position) => buckets[position].value += holding.value,
            None => {
                positions.insert(label.clone(), buckets.len());
                buckets.push(AllocationBucket {
                    label,
                    value: holding.value,
                });
            }
        }
    }
    return buckets;
}

pub fn by_ticker(holding: &Holding) -> String {
    holding.ticker.clone()
}

/* Holdings without a sector end up together */
pub fn by_sector(holding: &Holding) -> String {
    holding
        .sector
        .clone()
        .unwrap_or_else(|| String::from("Other"))
}

pub fn total(buckets: &[AllocationBucket]) -> Decimal {
    buckets
        .iter()
        .fold(Decimal::ZERO, |acc, bucket| acc + bucket.value)
}

/* Share of each bucket in the total, in percent with one decimal.
None when the total is zero: there is nothing to draw and the caller shows the "no data" state. */
pub fn percentages(buckets: &[AllocationBucket]) -> Option<Vec<Decimal>> {
    let total = total(buckets);
    if total.is_zero() {
        return None;
    }
    Some(
        buckets
            .iter()
            .map(|bucket| share_of(bucket.value, total, 1))
            .collect(),
    )
}

/* value / total * 100, rounded. total must not be zero. */
pub fn share_of(value: Decimal, total: Decimal, decimals: u32) -> Decimal {
    round_half_up(value / total * Decimal::ONE_HUNDRED, decimals)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn sector_holdings() -> Vec<Holding> {
        vec![
            Holding::new("MSFT", dec!(15000)).with_sector("Tech"),
            Holding::new("AAPL", dec!(25000)).with_sector("Tech"),
            Holding::new("TSLA", dec!(10000)).with_sector("Auto"),
        ]
    }

    #[test]
    fn test_sector_scenario() {
        let buckets = aggregate(&sector_holdings(), by_sector);
        assert_eq!(
            buckets,
            vec![
                AllocationBucket {
                    label: "Tech".to_string(),
                    value: dec!(40000)
                },
                AllocationBucket {
                    label: "Auto".to_string(),
                    value: dec!(10000)
                },
            ]
        );
        assert_eq!(percentages(&buckets), Some(vec![dec!(80.0), dec!(20.0)]));
    }

    #[test]
    fn test_empty_holdings() {
        let buckets = aggregate(&[], by_ticker);
        assert!(buckets.is_empty());
        assert_eq!(percentages(&buckets), None);
    }

    #[test]
    fn test_all_zero_values_have_no_percentages() {
        let holdings = vec![Holding::new("A", dec!(0)), Holding::new("B", dec!(0))];
        let buckets = aggregate(&holdings, by_ticker);
        assert_eq!(buckets.len(), 2);
        assert_eq!(percentages(&buckets), None);
    }

    #[test]
    fn test_conservation_and_one_bucket_per_label() {
        let holdings = vec![
            Holding::new("AAPL", dec!(8750)).with_sector("Tech"),
            Holding::new("JPM", dec!(1200.55)).with_sector("Finance"),
            Holding::new("GOOGL", dec!(4200)).with_sector("Tech"),
            Holding::new("XOM", dec!(310.10)),
            Holding::new("BAC", dec!(99.45)).with_sector("Finance"),
            Holding::new("F", dec!(0)).with_sector("Auto"),
        ];
        let buckets = aggregate(&holdings, by_sector);

        let holdings_sum = holdings
            .iter()
            .fold(Decimal::ZERO, |acc, holding| acc + holding.value);
        assert_eq!(total(&buckets), holdings_sum);

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Tech", "Finance", "Other", "Auto"]);
    }

    #[test]
    fn test_order_follows_first_occurrence() {
        let holdings = vec![
            Holding::new("B", dec!(1)).with_sector("Zeta"),
            Holding::new("A", dec!(1)).with_sector("Alpha"),
            Holding::new("C", dec!(1)).with_sector("Zeta"),
            Holding::new("D", dec!(1)).with_sector("Mid"),
        ];
        let labels: Vec<String> = aggregate(&holdings, by_sector)
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_idempotent() {
        let holdings = sector_holdings();
        assert_eq!(aggregate(&holdings, by_sector), aggregate(&holdings, by_sector));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let holdings = vec![
            Holding::new("A", dec!(1)),
            Holding::new("B", dec!(1)),
            Holding::new("C", dec!(1)),
            Holding::new("D", dec!(7.77)),
            Holding::new("E", dec!(123.4)),
        ];
        let buckets = aggregate(&holdings, by_ticker);
        let percentages = percentages(&buckets).unwrap();
        let sum = percentages.iter().fold(Decimal::ZERO, |acc, p| acc + p);
        // one rounding step of 0.05 per bucket at most
        let tolerance = dec!(0.05) * Decimal::from(percentages.len());
        assert!((sum - dec!(100)).abs() <= tolerance, "sum was {sum}");
    }
}
