//! Text formatting helpers shared by the card, chart and page renderers.

/// Group the digits of `value` in threes with commas: `-1234567` → `-1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount as `<symbol> <grouped amount>`, e.g. `₹ 29,000`
pub fn format_currency(symbol: &str, amount: i64) -> String {
    format!("{} {}", symbol, group_thousands(amount))
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(29000), "29,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1200), "-1,200");
        assert_eq!(group_thousands(-100), "-100");
    }

    #[test]
    fn test_group_thousands_extremes() {
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(group_thousands(i64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 29000), "₹ 29,000");
        assert_eq!(format_currency("$", -4500), "$ -4,500");
        assert_eq!(format_currency("₹", 0), "₹ 0");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("East"), "East");
    }
}
