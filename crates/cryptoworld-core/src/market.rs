//! Price and change formatting for the market overview cards.

use crate::content::Ticker;

/// Direction of a 24h change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Trend::Up)
    }
}

/// Format a USD price.
///
/// Sub-dollar prices keep four decimals (`$0.6234`); everything else gets
/// thousands separators and exactly two decimals (`$67,420.50`).
pub fn format_price(price: f64) -> String {
    if price < 1.0 {
        return format!("${:.4}", price);
    }

    let fixed = format!("{:.2}", price);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("${}.{}", group_thousands(whole), cents)
}

/// Absolute 24h change with a percent sign; the sign is carried by [`Trend`]
pub fn format_change(change: f64) -> String {
    format!("{}%", change.abs())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Ticker {
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.change_24h)
    }

    pub fn change_label(&self) -> String {
        format_change(self.change_24h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TICKERS;

    #[test]
    fn test_format_price_large() {
        assert_eq!(format_price(67420.50), "$67,420.50");
        assert_eq!(format_price(3845.2), "$3,845.20");
        assert_eq!(format_price(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_small() {
        assert_eq!(format_price(0.6234), "$0.6234");
        assert_eq!(format_price(0.4567), "$0.4567");
    }

    #[test]
    fn test_format_price_boundary() {
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(0.9999), "$0.9999");
        assert_eq!(format_price(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_change_is_absolute() {
        assert_eq!(format_change(2.5), "2.5%");
        assert_eq!(format_change(-1.2), "1.2%");
        assert_eq!(format_change(0.0), "0%");
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(-0.8), Trend::Down);
        assert!(Trend::of(6.8).is_up());
    }

    #[test]
    fn test_ticker_helpers() {
        let eth = TICKERS.iter().find(|t| t.symbol == "ETH").unwrap();
        assert_eq!(eth.formatted_price(), "$3,845.20");
        assert_eq!(eth.trend(), Trend::Down);
        assert_eq!(eth.change_label(), "1.2%");
    }
}
