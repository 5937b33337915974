use api::{
    DashboardSummary, Deal, FeedStatus, LiveChannel, LiveMetrics, MessagingStats, ScraperActivity,
};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::short_time;
use crate::{
    surface_error, use_api, use_auth, use_live_feed, use_toast, ConnectionIndicator, MetricTile,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing view: summary tiles, the scraper activity strip, messaging
/// throughput, and the latest scraped deals.
///
/// Tiles render the REST snapshot first and switch to live values as the
/// `metrics` channel delivers them; the other two cards are live-only.
#[component]
pub fn DashboardView() -> Element {
    let client = use_api();
    let auth = use_auth();
    let toasts = use_toast();

    let metrics = use_live_feed::<LiveMetrics>(LiveChannel::Metrics);
    let activity = use_live_feed::<ScraperActivity>(LiveChannel::Scrapers);
    let messaging = use_live_feed::<MessagingStats>(LiveChannel::Messages);

    let mut summary = use_signal(|| Option::<DashboardSummary>::None);
    let mut recent = use_signal(|| Option::<Vec<Deal>>::None);

    // REST snapshot behind the tiles, plus the latest deals table
    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.dashboard_summary().await {
                Ok(counters) => summary.set(Some(counters)),
                Err(err) => surface_error(auth, toasts, &err),
            }
            match client.recent_deals(10).await {
                Ok(deals) => recent.set(Some(deals)),
                Err(err) => surface_error(auth, toasts, &err),
            }
        }
    });

    let handle_refresh = move |_| loader.restart();

    let feeds_connected = [metrics.status, activity.status, messaging.status]
        .into_iter()
        .filter(|status| *status.read() == FeedStatus::Connected)
        .count();

    let snapshot = summary();
    let live = metrics.value.read();
    let live_now = live.is_some();

    let last_scrape = snapshot
        .as_ref()
        .and_then(|s| s.last_scrape_at.as_deref())
        .map(short_time)
        .unwrap_or_else(|| "never".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view dashboard-view",
            div {
                class: "view-header",
                h2 { "Dashboard" }
                div {
                    class: "view-header-tools",
                    ConnectionIndicator { connected: feeds_connected, total: 3 }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_refresh,
                        "Refresh"
                    }
                }
            }

            div {
                class: "metric-grid",
                MetricTile {
                    label: "Deals today",
                    value: counter_text(live.as_ref().map(|m| m.deals_today), snapshot.as_ref().map(|s| s.deals_today)),
                    live: live_now,
                }
                MetricTile {
                    label: "Deals total",
                    value: counter_text(live.as_ref().map(|m| m.deals_total), snapshot.as_ref().map(|s| s.deals_total)),
                    live: live_now,
                }
                MetricTile {
                    label: "Subscribers",
                    value: counter_text(live.as_ref().map(|m| m.active_subscribers), snapshot.as_ref().map(|s| s.active_subscribers)),
                    live: live_now,
                    hint: "across all channels",
                }
                MetricTile {
                    label: "Messages today",
                    value: counter_text(live.as_ref().map(|m| m.messages_today), snapshot.as_ref().map(|s| s.messages_today)),
                    live: live_now,
                }
                MetricTile {
                    label: "Scrapers running",
                    value: counter_text(live.as_ref().map(|m| m.scrapers_running), snapshot.as_ref().map(|s| s.scrapers_running)),
                    live: live_now,
                }
                MetricTile {
                    label: "Last scrape",
                    value: last_scrape,
                }
            }

            div {
                class: "dashboard-columns",
                div {
                    class: "card",
                    h3 { "Scraper activity" }
                    {render_activity(&activity.value.read())}
                }
                div {
                    class: "card",
                    h3 { "Messaging" }
                    {render_messaging(&messaging.value.read())}
                }
            }

            div {
                class: "card",
                h3 { "Recent deals" }
                {render_deals(recent())}
            }
        }
    }
}

fn counter_text<T: ToString>(live: Option<T>, snapshot: Option<T>) -> String {
    match live.or(snapshot) {
        Some(n) => n.to_string(),
        None => "...".to_string(),
    }
}

fn render_activity(activity: &Option<ScraperActivity>) -> Element {
    let Some(activity) = activity else {
        return rsx! {
            p { class: "card-placeholder", "Waiting for the scraper feed..." }
        };
    };
    if activity.running.is_empty() {
        return rsx! {
            p { class: "card-placeholder", "No scrapers running right now." }
        };
    }
    rsx! {
        div {
            class: "job-chips",
            for job in activity.running.clone() {
                span {
                    key: "{job.id}",
                    class: "job-chip",
                    span { class: "job-chip-source", "{job.source}" }
                    span { class: "job-chip-count", "{job.deals_found} deals" }
                }
            }
        }
    }
}

fn render_messaging(stats: &Option<MessagingStats>) -> Element {
    let Some(stats) = stats else {
        return rsx! {
            p { class: "card-placeholder", "Waiting for the message feed..." }
        };
    };
    rsx! {
        div {
            class: "messaging-stats",
            div {
                class: "messaging-stat",
                span { class: "messaging-stat-value", "{stats.sent_today}" }
                span { class: "messaging-stat-label", "Sent" }
            }
            div {
                class: "messaging-stat",
                span { class: "messaging-stat-value", "{stats.delivered_today}" }
                span { class: "messaging-stat-label", "Delivered" }
            }
            div {
                class: "messaging-stat messaging-stat--failed",
                span { class: "messaging-stat-value", "{stats.failed_today}" }
                span { class: "messaging-stat-label", "Failed" }
            }
            div {
                class: "messaging-stat",
                span { class: "messaging-stat-value", "{stats.queue_depth}" }
                span { class: "messaging-stat-label", "Queued" }
            }
        }
    }
}

fn render_deals(deals: Option<Vec<Deal>>) -> Element {
    let Some(deals) = deals else {
        return rsx! {
            p { class: "card-placeholder", "Loading..." }
        };
    };
    if deals.is_empty() {
        return rsx! {
            p { class: "card-placeholder", "Nothing scraped yet today." }
        };
    }
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Deal" }
                    th { "Source" }
                    th { "Price" }
                    th { "Discount" }
                    th { "Posted" }
                }
            }
            tbody {
                for deal in deals {
                    tr {
                        key: "{deal.id}",
                        td {
                            class: "deal-title",
                            a {
                                href: "{deal.url}",
                                target: "_blank",
                                rel: "noreferrer",
                                "{deal.title}"
                            }
                        }
                        td { "{deal.source}" }
                        td {
                            span { class: "deal-price", {deal.price()} }
                            if let Some(old) = deal.old_price() {
                                span { class: "deal-old-price", {old} }
                            }
                        }
                        td {
                            if let Some(pct) = deal.discount() {
                                span { class: "discount-badge", "-{pct}%" }
                            }
                        }
                        td { {short_time(&deal.posted_at)} }
                    }
                }
            }
        }
    }
}
