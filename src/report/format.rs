/// Render `value` rounded to cents with thousands separators, e.g. `-$1,234.50`
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = format_grouped_int((cents / 100).unsigned_abs());
    let frac = (cents % 100).abs();
    format!("{sign}{currency_symbol}{whole}.{frac:02}")
}

pub fn format_grouped_int(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
