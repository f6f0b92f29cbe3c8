use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Format an optional money figure for a table cell; absent values render
/// as a placeholder dash, not as zero.
pub fn fmt_money(value: Option<Decimal>) -> String {
    match value {
        Some(value) => {
            let value = value.to_f64().unwrap_or(0.0);
            if value < 0.0 {
                format!("-${:.2}", value.abs())
            } else {
                format!("${:.2}", value)
            }
        }
        None => "—".to_string(),
    }
}

/// Format an optional percentage; absent values render as "N/A".
pub fn fmt_percent(value: Option<Decimal>) -> String {
    match value {
        Some(value) => format!("{:.2}%", value.to_f64().unwrap_or(0.0)),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fmt_money() {
        assert_eq!(fmt_money(Some(dec!(15))), "$15.00");
        assert_eq!(fmt_money(Some(dec!(-10.5))), "-$10.50");
        assert_eq!(fmt_money(None), "—");
    }

    #[test]
    fn test_fmt_percent() {
        assert_eq!(fmt_percent(Some(dec!(28.57))), "28.57%");
        assert_eq!(fmt_percent(None), "N/A");
    }
}
