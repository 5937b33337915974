//! # API crate: typed client layer for the DealDeck backend
//!
//! The backend service owns the REST and WebSocket contracts; this crate is
//! the client side of them, shared by the web and desktop frontends. It has
//! no UI dependencies, which keeps everything in it testable with plain unit
//! tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`]: bearer-token REST calls, the 401 eviction contract, one typed method per endpoint |
//! | [`error`] | [`ApiError`]: the one error type every call returns; its `Display` is what toasts show |
//! | [`live`] | [`live::FeedCore`]: connection state machine behind the live metric channels |
//! | [`models`] | Wire models for both REST bodies and live-channel payloads |

pub mod client;
pub mod error;
pub mod live;
pub mod models;

pub use client::Client;
pub use error::ApiError;
pub use live::{FeedCommand, FeedCore, FeedEvent, FeedStatus, LiveChannel, RECONNECT_DELAY};
pub use models::{
    DashboardSummary, Deal, JobStatus, LiveMetrics, LoginResponse, MessagingStats, Schedule,
    ScheduleInput, ScraperActivity, ScraperJob, ScraperSource, TelegramSettings, UserInfo,
    WhatsAppSettings,
};
