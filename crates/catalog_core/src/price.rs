/// Formats a minor-unit price for display, e.g. `format_price(89900, "EUR",
/// "de-DE")` -> `"899,00 €"`.
///
/// German-style locales place the symbol after the amount with a comma
/// decimal separator and dot grouping; everything else gets a prefixed
/// symbol, dot decimal and comma grouping. Stateless on purpose: callers
/// needing a different locale just pass it per call.
pub fn format_price(minor_units: i64, currency: &str, locale: &str) -> String {
    let negative = minor_units < 0;
    let abs = minor_units.unsigned_abs();
    let whole = abs / 100;
    let cents = abs % 100;
    let symbol = currency_symbol(currency);
    let german = locale.starts_with("de");

    let grouped = group_digits(whole, if german { '.' } else { ',' });
    let sign = if negative { "-" } else { "" };
    if german {
        format!("{sign}{grouped},{cents:02} {symbol}")
    } else {
        format!("{sign}{symbol}{grouped}.{cents:02}")
    }
}

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "EUR" => "\u{20ac}",
        "USD" => "$",
        "GBP" => "\u{a3}",
        other => other,
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
