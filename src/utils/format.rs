use rust_decimal::{Decimal, RoundingStrategy};

/* Rounds half away from zero, the way the browser number formatter does */
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/* "12.3" for a percentage of 12.345 with one decimal */
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = round_half_up(value, decimals);
    format!("{:.*}", decimals as usize, rounded)
}

/* US dollars without cents and with thousands separators: 12800 -> "$12,800", -320 -> "-$320" */
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_half_up(value, 0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        return format!("-${grouped}");
    }
    format!("${grouped}")
}

/* Euro amount as typed by the user, without trailing zeros: 9.90 -> "€9.9" */
pub fn format_eur(value: Decimal) -> String {
    format!("€{}", value.normalize())
}
