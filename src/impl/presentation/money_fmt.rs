use num_format::{Locale, ToFormattedString};
use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Renders a monetary amount in pt-BR style: `R$ 1.234,56`. The amount is
/// rounded to centavos first so the printed digits always agree with the
/// rounded value.
pub(crate) fn format_brl(amount: Decimal) -> String {
    let (sign, units, hundredths) = split_hundredths(amount);
    format!("R$ {}{},{:02}", sign, units, hundredths)
}

/// Renders a physical quantity with two decimals and a unit suffix, e.g.
/// `624,00 L`.
pub(crate) fn format_quantity(quantity: Decimal, unit: &str) -> String {
    format!("{} {}", format_number(quantity), unit)
}

/// Plain pt-BR number with two decimals and thousands grouping.
pub(crate) fn format_number(value: Decimal) -> String {
    let (sign, units, hundredths) = split_hundredths(value);
    format!("{}{},{:02}", sign, units, hundredths)
}

fn split_hundredths(value: Decimal) -> (&'static str, String, i128) {
    let cents = (value.round_dp(2) * Decimal::ONE_HUNDRED)
        .to_i128()
        .expect("a decimal truncated to hundredths always fits i128");
    let sign = if cents < 0 { "-" } else { "" };
    let units = (cents / 100).abs().to_formatted_string(&Locale::pt);
    (sign, units, (cents % 100).abs())
}
