//! Secondary-currency conversion and money formatting

/// Fixed secondary-currency units per primary unit (SAR per USD)
pub const SAR_PER_USD: f64 = 3.75;

/// Convert a primary-currency amount into the secondary currency
pub fn convert(amount: f64) -> f64 {
    amount * SAR_PER_USD
}

/// `$1,234.56`; negatives render as `$-1,234.56`
pub fn format_primary(amount: f64) -> String {
    format!("${}", format_grouped(amount))
}

/// `SAR 1,234.56`
pub fn format_secondary(amount: f64) -> String {
    format!("SAR {}", format_grouped(amount))
}

/// Two decimal places with comma thousands separators
pub fn format_grouped(value: f64) -> String {
    let body = format!("{:.2}", value);
    let (sign, unsigned) = match body.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", body.as_str()),
    };

    match unsigned.split_once('.') {
        Some((int_part, frac)) => format!("{}{}.{}", sign, group_digits(int_part), frac),
        // inf / NaN have no decimal point
        None => body.clone(),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convert_linear() {
        assert_eq!(convert(0.0), 0.0);
        assert_eq!(convert(100.0), 375.0);

        for (a, b) in [(1.0, 2.0), (479_880.0, 25_200.0), (0.01, 999_999.99), (-50.0, 20.0)] {
            assert_relative_eq!(convert(a + b), convert(a) + convert(b), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_format_primary() {
        assert_eq!(format_primary(0.0), "$0.00");
        assert_eq!(format_primary(39.99), "$39.99");
        assert_eq!(format_primary(999.999), "$1,000.00");
        assert_eq!(format_primary(479_880.0), "$479,880.00");
        assert_eq!(format_primary(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_primary(-25_200.0), "$-25,200.00");
    }

    #[test]
    fn test_format_secondary() {
        assert_eq!(format_secondary(convert(479_880.0)), "SAR 1,799,550.00");
        assert_eq!(format_secondary(12.5), "SAR 12.50");
        assert_eq!(format_secondary(-1000.0), "SAR -1,000.00");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }
}
