//! Deals and the dashboard summary snapshot.

use serde::{Deserialize, Serialize};

/// One scraped deal as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    /// Name of the source the deal was scraped from.
    pub source: String,
    pub price_cents: i64,
    #[serde(default)]
    pub old_price_cents: Option<i64>,
    /// Discount as reported by the source, when it reports one.
    #[serde(default)]
    pub discount_percent: Option<u8>,
    pub url: String,
    pub posted_at: String,
}

impl Deal {
    pub fn price(&self) -> String {
        format_cents(self.price_cents)
    }

    pub fn old_price(&self) -> Option<String> {
        self.old_price_cents.map(format_cents)
    }

    /// Reported discount, or one computed from the old price when the source
    /// did not report it.
    pub fn discount(&self) -> Option<u8> {
        if self.discount_percent.is_some() {
            return self.discount_percent;
        }
        let old = self.old_price_cents?;
        if old <= 0 || self.price_cents >= old {
            return None;
        }
        Some((((old - self.price_cents) * 100) / old) as u8)
    }
}

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

/// REST snapshot behind the dashboard tiles. The live `metrics` channel
/// carries the same counters and replaces them tile by tile once connected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub deals_today: u64,
    pub deals_total: u64,
    pub active_subscribers: u64,
    pub messages_today: u64,
    pub scrapers_running: u32,
    #[serde(default)]
    pub last_scrape_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal() -> Deal {
        Deal {
            id: "d1".into(),
            title: "Cordless drill".into(),
            source: "hotdeals".into(),
            price_cents: 4999,
            old_price_cents: Some(9999),
            discount_percent: None,
            url: "https://example.com/d1".into(),
            posted_at: "2026-08-21T10:00:00Z".into(),
        }
    }

    #[test]
    fn prices_format_as_dollars() {
        let deal = deal();
        assert_eq!(deal.price(), "$49.99");
        assert_eq!(deal.old_price().as_deref(), Some("$99.99"));
    }

    #[test]
    fn discount_is_computed_when_not_reported() {
        assert_eq!(deal().discount(), Some(50));
    }

    #[test]
    fn reported_discount_wins_over_the_computed_one() {
        let deal = Deal {
            discount_percent: Some(55),
            ..deal()
        };
        assert_eq!(deal.discount(), Some(55));
    }

    #[test]
    fn no_discount_without_a_higher_old_price() {
        let same = Deal {
            old_price_cents: Some(4999),
            ..deal()
        };
        assert_eq!(same.discount(), None);

        let missing = Deal {
            old_price_cents: None,
            ..deal()
        };
        assert_eq!(missing.discount(), None);
    }
}
