//! Static currency symbol table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display symbols keyed by upper-case ISO code.
///
/// Codes missing from the table are displayed as the code itself.
static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("AUD", "A$"),
        ("CAD", "C$"),
        ("NZD", "NZ$"),
        ("HKD", "HK$"),
        ("SGD", "S$"),
        ("MXN", "MX$"),
        ("BRL", "R$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("CNY", "CN¥"),
        ("INR", "₹"),
        ("KRW", "₩"),
        ("ILS", "₪"),
        ("VND", "₫"),
        ("PHP", "₱"),
        ("THB", "฿"),
        ("TRY", "₺"),
        ("UAH", "₴"),
        ("NGN", "₦"),
        ("PLN", "zł"),
        ("CHF", "CHF"),
        ("ZAR", "R"),
    ])
});

/// Returns the display symbol for a currency code.
///
/// Lookup is case-insensitive. Unknown codes are not an error: the
/// upper-cased code is returned so it can still be shown next to an amount.
pub fn currency_symbol(code: &str) -> String {
    let upper = code.trim().to_ascii_uppercase();
    match CURRENCY_SYMBOLS.get(upper.as_str()) {
        Some(symbol) => (*symbol).to_string(),
        None => upper,
    }
}

/// Returns true if both codes name the same currency, ignoring case.
pub fn is_same_currency(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Formats an amount in minor units with its currency symbol.
///
/// Whole major-unit amounts print without decimals (`$5`), anything else
/// prints with two decimals (`€4.99`).
pub fn format_amount(code: &str, minor_units: i64) -> String {
    let symbol = currency_symbol(code);
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let (major, minor) = (abs / 100, abs % 100);

    if minor == 0 {
        format!("{}{}{}", sign, symbol, major)
    } else {
        format!("{}{}{}.{:02}", sign, symbol, major, minor)
    }
}
