//! Number formatting for KPI cards, tables and charts.

/// Currency prefix used across the whole dashboard (Peruvian sol).
pub const CURRENCY_PREFIX: &str = "S/";

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Groups the integer part of a number with comma separators ("5,072").
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let body: String = grouped.chars().rev().collect();
    if value < 0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Formats a monetary amount with magnitude abbreviation.
///
/// Thresholds follow absolute value, so the sign carries through:
/// `>= 1e12` → "B", `>= 1e9` → "MM", `>= 1e6` → "M" (one decimal each),
/// `>= 1e4` → "k" (no decimals). Anything smaller renders as a
/// comma-grouped integer. `None` renders as "S/ 0".
///
/// # Examples
///
/// ```
/// use contracts::shared::format::format_currency;
/// assert_eq!(format_currency(Some(1_250_000.0)), "S/ 1.3 M");
/// assert_eq!(format_currency(Some(5072.0)), "S/ 5,072");
/// ```
pub fn format_currency(value: Option<f64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return format!("{} 0", CURRENCY_PREFIX),
    };

    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        return format!("{} {:.1} B", CURRENCY_PREFIX, round_to(value / 1e12, 1));
    }
    if abs >= 1_000_000_000.0 {
        return format!("{} {:.1} MM", CURRENCY_PREFIX, round_to(value / 1e9, 1));
    }
    if abs >= 1_000_000.0 {
        return format!("{} {:.1} M", CURRENCY_PREFIX, round_to(value / 1e6, 1));
    }
    if abs >= 10_000.0 {
        return format!("{} {:.0} k", CURRENCY_PREFIX, round_to(value / 1e3, 0));
    }
    format!("{} {}", CURRENCY_PREFIX, group_thousands(value.round() as i64))
}

/// Exact money rendering for table cells ("S/ 1234.56").
pub fn format_money(value: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, value)
}

/// Liquidation price for a regular price and a discount percentage,
/// rounded to 2 decimals. The caller clamps the discount to `[0, 100]`.
pub fn calculate_liquidation_price(regular_price: f64, discount_pct: f64) -> f64 {
    round_to(regular_price * (1.0 - discount_pct / 100.0), 2)
}

/// Logarithmic bar height in percent, so small bars stay visible next to
/// outliers: `log10(v + 1) / log10(max + 1) * 100`. Non-positive values
/// collapse to 0.
pub fn log_bar_height(value: f64, max: f64) -> f64 {
    if value <= 0.0 || max <= 0.0 {
        return 0.0;
    }
    (value + 1.0).log10() / (max + 1.0).log10() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_abbreviation_tiers() {
        assert_eq!(format_currency(Some(1_800_000_000_000.0)), "S/ 1.8 B");
        assert_eq!(format_currency(Some(2_500_000_000.0)), "S/ 2.5 MM");
        assert_eq!(format_currency(Some(1_250_000.0)), "S/ 1.3 M");
        assert_eq!(format_currency(Some(507_000.0)), "S/ 507 k");
        assert_eq!(format_currency(Some(10_000.0)), "S/ 10 k");
    }

    #[test]
    fn currency_below_abbreviation_threshold() {
        assert_eq!(format_currency(Some(5072.0)), "S/ 5,072");
        assert_eq!(format_currency(Some(999.0)), "S/ 999");
        assert_eq!(format_currency(Some(0.0)), "S/ 0");
        assert_eq!(format_currency(None), "S/ 0");
    }

    #[test]
    fn currency_negative_magnitudes() {
        assert_eq!(format_currency(Some(-1_250_000.0)), "S/ -1.3 M");
        assert_eq!(format_currency(Some(-5072.0)), "S/ -5,072");
    }

    #[test]
    fn liquidation_price_rounds_to_cents() {
        assert_eq!(calculate_liquidation_price(100.0, 30.0), 70.0);
        assert_eq!(calculate_liquidation_price(99.99, 33.0), 66.99);
        assert_eq!(calculate_liquidation_price(0.0, 50.0), 0.0);
        assert_eq!(calculate_liquidation_price(250.0, 0.0), 250.0);
        assert_eq!(calculate_liquidation_price(250.0, 100.0), 0.0);
    }

    #[test]
    fn log_height_keeps_small_bars_visible() {
        assert_eq!(log_bar_height(0.0, 1000.0), 0.0);
        assert_eq!(log_bar_height(-5.0, 1000.0), 0.0);
        assert_eq!(log_bar_height(1000.0, 1000.0), 100.0);
        let small = log_bar_height(10.0, 1_000_000.0);
        // Linear scaling would put a 10-out-of-1M bar at 0.001%.
        assert!(small > 15.0 && small < 20.0);
    }
}
