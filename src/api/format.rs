//! Display strings for the summary cards. Currency has no fractional digits,
//! percentages always two. Non-finite values render as `NaN` / `∞`.

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_grouped(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let magnitude = if value.is_infinite() {
        "∞".to_string()
    } else {
        // halves round away from zero, not to even
        let scale = 10f64.powi(decimals as i32);
        let rounded = (value.abs() * scale).round() / scale;
        let fixed = format!("{:.*}", decimals, rounded);
        match fixed.split_once('.') {
            Some((whole, fraction)) => format!("{}.{fraction}", group_thousands(whole)),
            None => group_thousands(&fixed),
        }
    };
    if value.is_sign_negative() && value != 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

pub fn format_currency(value: f64) -> String {
    let formatted = format_grouped(value, 0);
    match formatted.strip_prefix('-') {
        Some(magnitude) => format!("-${magnitude}"),
        None => format!("${formatted}"),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_grouped(value, 2))
}
