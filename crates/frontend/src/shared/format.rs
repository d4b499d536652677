//! Форматирование значений для ячеек таблиц

use chrono::{DateTime, Local, Utc};

/// Digits grouped by three with a space: 1234567 -> "1 234 567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Two decimals, grouped integer part: 1234.5 -> "1 234.50".
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1 000");
        assert_eq!(group_thousands(1234567), "1 234 567");
        assert_eq!(group_thousands(-1234), "-1 234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "1 234.50");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234567.891), "-1 234 567.89");
        assert_eq!(format_money(-0.5), "-0.50");
    }

    #[test]
    fn test_format_missing_datetime() {
        assert_eq!(format_datetime(None), "—");
    }
}
