//! Parsing of user-typed currency/number input.

/// Parses an edited cell value such as `"$1,234"`, `" 1 234.50 "` or `"-500"`.
///
/// Currency symbols, thousands separators, percent signs and whitespace are
/// stripped. Accounting-style parentheses mean a negative value. Returns
/// `None` for anything that does not leave a finite number behind.
pub fn parse_money_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (true, inner),
        None => (false, trimmed),
    };

    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | '_') && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() || (negative && cleaned.contains('-')) {
        return None;
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_currency_formatting() {
        assert_eq!(parse_money_input("$1,234"), Some(1234.0));
        assert_eq!(parse_money_input("  $ 1,234,567.89 "), Some(1_234_567.89));
        assert_eq!(parse_money_input("1 234"), Some(1234.0));
        assert_eq!(parse_money_input("85%"), Some(85.0));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(parse_money_input("-500"), Some(-500.0));
        assert_eq!(parse_money_input("($500)"), Some(-500.0));
    }

    #[test]
    fn test_rejects_unparsable() {
        assert_eq!(parse_money_input(""), None);
        assert_eq!(parse_money_input("$"), None);
        assert_eq!(parse_money_input("abc"), None);
        assert_eq!(parse_money_input("12abc"), None);
        assert_eq!(parse_money_input("1.2.3"), None);
        assert_eq!(parse_money_input("--5"), None);
        assert_eq!(parse_money_input("(-5)"), None);
        assert_eq!(parse_money_input("($-5)"), None);
    }
}
