//! Payloads carried by the live WebSocket channels.
//!
//! Each channel wraps its payload in an envelope whose `type` tag names the
//! channel (see [`crate::live`]); these are the `data` shapes.

use serde::{Deserialize, Serialize};

use super::ScraperJob;

/// `metrics` channel: rolling dashboard counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMetrics {
    pub deals_today: u64,
    pub deals_total: u64,
    pub active_subscribers: u64,
    pub messages_today: u64,
    pub scrapers_running: u32,
}

/// `scraper_status` channel: the jobs currently in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScraperActivity {
    #[serde(default)]
    pub running: Vec<ScraperJob>,
}

/// `message_stats` channel: today's messaging throughput.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagingStats {
    pub sent_today: u64,
    pub delivered_today: u64,
    pub failed_today: u64,
    pub queue_depth: u64,
}
