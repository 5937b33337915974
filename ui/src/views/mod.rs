mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod shell;
pub use shell::{ShellTab, ShellView};

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod scrapers;
pub use scrapers::ScrapersView;

mod schedules;
pub use schedules::SchedulesView;

mod integrations;
pub use integrations::IntegrationsView;

/// Compact "MM-DD HH:MM" rendering of an RFC 3339 timestamp for table cells.
/// Falls back to the raw string when it is too short to slice.
pub(crate) fn short_time(ts: &str) -> String {
    match (ts.get(5..10), ts.get(11..16)) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        _ => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::short_time;

    #[test]
    fn timestamps_shorten_for_tables() {
        assert_eq!(short_time("2026-08-21T10:42:00Z"), "08-21 10:42");
        assert_eq!(short_time("yesterday"), "yesterday");
    }
}
