use api::JobStatus;
use dioxus::prelude::*;

/// Colored pill for a scraper job status.
#[component]
pub fn StatusBadge(status: JobStatus) -> Element {
    let class = match status {
        JobStatus::Queued => "status-badge status-badge--queued",
        JobStatus::Running => "status-badge status-badge--running",
        JobStatus::Succeeded => "status-badge status-badge--succeeded",
        JobStatus::Failed => "status-badge status-badge--failed",
    };
    rsx! {
        span { class: class, "{status.label()}" }
    }
}
