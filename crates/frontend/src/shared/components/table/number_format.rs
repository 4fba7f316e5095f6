//! Number formatting for grid cells and cards (US conventions).

use crate::shared::date_utils::EMPTY_CELL;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234.567, 2` -> `"1,234.57"`
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, group_thousands(int_part), f),
        None => format!("{}{}", sign, group_thousands(int_part)),
    }
}

/// Whole dollars: `1234.4` -> `"$1,234"`, `-500.0` -> `"-$500"`.
pub fn format_currency(value: f64) -> String {
    let plain = format_number_with_decimals(value, 0);
    match plain.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", plain),
    }
}

pub fn format_optional_currency(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Short form for cards: `$1.2M`, `$350.0K`, small values in whole dollars.
pub fn format_compact_currency(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000_000.0 {
        format!("{}${:.1}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else {
        format_currency(value)
    }
}

/// `12.345, 1` -> `"12.3%"`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

pub fn format_optional_percent(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_percent(v, decimals))
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn format_optional_number(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_number_with_decimals(v, decimals))
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Multiples such as MOIC: `1.456` -> `"1.46x"`
pub fn format_multiple(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}x", v))
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.0), "$1,234");
        assert_eq!(format_currency(-500.0), "-$500");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_optional_currency(None), EMPTY_CELL);
    }

    #[test]
    fn test_compact_currency() {
        assert_eq!(format_compact_currency(12_500_000.0), "$12.5M");
        assert_eq!(format_compact_currency(-350_000.0), "-$350.0K");
        assert_eq!(format_compact_currency(950.0), "$950");
    }

    #[test]
    fn test_percent_and_multiple() {
        assert_eq!(format_percent(40.0, 0), "40%");
        assert_eq!(format_optional_percent(Some(12.345), 1), "12.3%");
        assert_eq!(format_optional_percent(None, 1), EMPTY_CELL);
        assert_eq!(format_multiple(Some(1.456)), "1.46x");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
