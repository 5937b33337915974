//! Shared UI for the DealDeck dashboard: components, hooks, and the views
//! that the web and desktop crates wrap with their routers.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod live_feed;
pub use live_feed::{use_live_feed, LiveFeedHandle};

mod toast;
pub use toast::{surface_error, use_toast, ToastOptions, ToastProvider, Toasts};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod metric_tile;
pub use metric_tile::MetricTile;

mod status_badge;
pub use status_badge::StatusBadge;

mod connection_indicator;
pub use connection_indicator::ConnectionIndicator;

mod schedule_dialog;
pub use schedule_dialog::ScheduleDialog;

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeSignal, ThemeToggle};

/// The REST client, provided as context by the platform crate.
pub fn use_api() -> api::Client {
    use_context::<api::Client>()
}

/// Backend endpoint configuration, provided as context by the platform crate.
pub fn use_client_config() -> store::ClientConfig {
    use_context::<store::ClientConfig>()
}
