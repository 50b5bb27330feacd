//! Number formatting matching the en-US grouping used across the pages

/// Group an integer with commas: 1250000 -> "1,250,000"
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Dollar amount without trailing zero cents: 89.99 -> "$89.99", 299.0 -> "$299"
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    if cents % 100 == 0 {
        format!("${}", cents / 100)
    } else {
        let s = format!("{:.2}", value);
        format!("${}", s.trim_end_matches('0'))
    }
}

/// Dollar amount with grouping and no cents: 1250000 -> "$1,250,000"
pub fn format_money_whole(value: i64) -> String {
    format!("${}", format_thousands(value))
}

/// Percent with at most one decimal: 94.2 -> "94.2%", 96.0 -> "96%"
pub fn format_percent(value: f64) -> String {
    let tenths = (value * 10.0).round() as i64;
    if tenths % 10 == 0 {
        format!("{}%", tenths / 10)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1250000), "1,250,000");
        assert_eq!(format_thousands(3420), "3,420");
        assert_eq!(format_thousands(890), "890");
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(-45000), "-45,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(89.99), "$89.99");
        assert_eq!(format_price(449.99), "$449.99");
        assert_eq!(format_price(299.0), "$299");
        assert_eq!(format_price(12.5), "$12.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(94.2), "94.2%");
        assert_eq!(format_percent(96.0), "96%");
        assert_eq!(format_percent(23.7), "23.7%");
    }

    #[test]
    fn test_format_money_whole() {
        assert_eq!(format_money_whole(74000), "$74,000");
    }
}
