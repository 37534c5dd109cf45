//! Display formatting for prices, percentages and large magnitudes.

/// Group the integer part of a non-negative value with `,` separators,
/// keeping `decimals` fraction digits.
fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = if value < 0.0 { String::from("-") } else { String::new() };
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Price precision scales with magnitude so sub-cent assets stay legible.
pub fn format_price(price: f64) -> String {
    if price < 0.01 {
        format!("${:.6}", price)
    } else if price < 1.0 {
        format!("${:.4}", price)
    } else if price < 1000.0 {
        format!("${:.2}", price)
    } else {
        format!("${}", group_thousands(price, 2))
    }
}

/// Signed percentage with an explicit `+` for gains.
pub fn format_percent(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

/// Compact USD magnitude: trillions/billions/millions, else grouped.
pub fn format_compact_usd(value: f64) -> String {
    if value >= 1_000_000_000_000.0 {
        format!("${:.2}T", value / 1_000_000_000_000.0)
    } else if value >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else {
        format!("${}", group_thousands(value, 0))
    }
}

/// Coin counts: billions/millions/thousands, else grouped.
pub fn format_supply(supply: f64) -> String {
    if supply >= 1_000_000_000.0 {
        format!("{:.2}B", supply / 1_000_000_000.0)
    } else if supply >= 1_000_000.0 {
        format!("{:.2}M", supply / 1_000_000.0)
    } else if supply >= 1_000.0 {
        format!("{:.2}K", supply / 1_000.0)
    } else {
        group_thousands(supply, 0)
    }
}
