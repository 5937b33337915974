//! Wire models for the DealDeck backend.
//!
//! Everything here is `Serialize + Deserialize + Clone + PartialEq` and
//! mirrors what the backend sends; optional fields carry `#[serde(default)]`
//! so older backends that omit them still parse.

mod deals;
mod integrations;
mod jobs;
mod metrics;
mod schedule;
mod user;

pub use deals::{DashboardSummary, Deal};
pub use integrations::{TelegramSettings, WhatsAppSettings};
pub use jobs::{JobStatus, ScraperJob, ScraperSource};
pub use metrics::{LiveMetrics, MessagingStats, ScraperActivity};
pub use schedule::{Schedule, ScheduleInput};
pub use user::{LoginRequest, LoginResponse, UserInfo};
