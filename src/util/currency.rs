/// Formats whole dollars for display, e.g. `$1,118` or `-$40`.
pub fn format_usd(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Low/high band as a single label, e.g. `$688 – $1,118`.
pub fn format_usd_range(low: i64, high: i64) -> String {
    format!("{} – {}", format_usd(low), format_usd(high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(250), "$250");
        assert_eq!(format_usd(999), "$999");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_usd(1000), "$1,000");
        assert_eq!(format_usd(1118), "$1,118");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_negative_amounts_put_sign_first() {
        assert_eq!(format_usd(-40), "-$40");
        assert_eq!(format_usd(-12_000), "-$12,000");
    }

    #[test]
    fn test_range_label() {
        assert_eq!(format_usd_range(3920, 6370), "$3,920 – $6,370");
    }
}
