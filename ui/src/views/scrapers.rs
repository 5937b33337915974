use api::{ScraperJob, ScraperSource};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::short_time;
use crate::{
    log_activity, surface_error, use_activity_log, use_api, use_auth, use_toast, LogLevel,
    StatusBadge, ToastOptions,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Scraper sources and their run history. A run queued here shows up in the
/// table right away and is replaced by the backend's copy on the next fetch.
#[component]
pub fn ScrapersView() -> Element {
    let client = use_api();
    let run_client = client.clone();
    let auth = use_auth();
    let toasts = use_toast();
    let mut activity_log = use_activity_log();

    let mut sources = use_signal(|| Option::<Vec<ScraperSource>>::None);
    let mut jobs = use_signal(|| Option::<Vec<ScraperJob>>::None);
    // Runs queued from this view, newest first, until the backend lists them.
    let mut launched = use_signal(Vec::<ScraperJob>::new);
    let mut busy_source = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.scraper_sources().await {
                Ok(list) => sources.set(Some(list)),
                Err(err) => surface_error(auth, toasts, &err),
            }
            match client.scraper_jobs(20).await {
                Ok(list) => jobs.set(Some(list)),
                Err(err) => surface_error(auth, toasts, &err),
            }
        }
    });

    let handle_run = move |source: ScraperSource| {
        let client = run_client.clone();
        spawn(async move {
            busy_source.set(Some(source.id.clone()));
            match client.run_scraper(&source.id).await {
                Ok(job) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Queued a run for {}", source.name),
                    );
                    toasts.success(format!("Queued {}", source.name), ToastOptions::new());
                    launched.write().insert(0, job);
                    loader.restart();
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            busy_source.set(None);
        });
    };

    // Optimistic rows first, minus any the backend already returned.
    let run_history = jobs().map(|list| {
        let mut rows: Vec<ScraperJob> = launched
            .read()
            .iter()
            .filter(|job| !list.iter().any(|row| row.id == job.id))
            .cloned()
            .collect();
        rows.extend(list);
        rows
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view scrapers-view",
            div {
                class: "view-header",
                h2 { "Scrapers" }
                div {
                    class: "view-header-tools",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| loader.restart(),
                        "Refresh"
                    }
                }
            }

            div {
                class: "card",
                h3 { "Sources" }
                if let Some(list) = sources() {
                    if list.is_empty() {
                        p { class: "card-placeholder", "No sources configured on the backend." }
                    } else {
                        SourceTable {
                            sources: list,
                            busy: busy_source(),
                            on_run: handle_run,
                        }
                    }
                } else {
                    p { class: "card-placeholder", "Loading..." }
                }
            }

            div {
                class: "card",
                h3 { "Recent runs" }
                {render_jobs(run_history)}
            }
        }
    }
}

#[component]
fn SourceTable(
    sources: Vec<ScraperSource>,
    busy: Option<String>,
    on_run: EventHandler<ScraperSource>,
) -> Element {
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Source" }
                    th { "State" }
                    th { "Last run" }
                    th { "Deals" }
                    th {}
                }
            }
            tbody {
                for source in sources {
                    tr {
                        key: "{source.id}",
                        td {
                            class: "source-name",
                            a {
                                href: "{source.site_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                "{source.name}"
                            }
                        }
                        td {
                            if source.enabled {
                                span { class: "source-state source-state--enabled", "enabled" }
                            } else {
                                span { class: "source-state source-state--disabled", "disabled" }
                            }
                        }
                        td {
                            {source.last_run_at.as_deref().map(short_time).unwrap_or_else(|| "never".to_string())}
                        }
                        td { "{source.deal_count}" }
                        td {
                            class: "row-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: !source.enabled || busy.is_some(),
                                onclick: {
                                    let source = source.clone();
                                    move |_| on_run.call(source.clone())
                                },
                                if busy.as_deref() == Some(source.id.as_str()) {
                                    "Queuing..."
                                } else {
                                    "Run now"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_jobs(jobs: Option<Vec<ScraperJob>>) -> Element {
    let Some(jobs) = jobs else {
        return rsx! {
            p { class: "card-placeholder", "Loading..." }
        };
    };
    if jobs.is_empty() {
        return rsx! {
            p { class: "card-placeholder", "No runs yet." }
        };
    }
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Source" }
                    th { "Status" }
                    th { "Started" }
                    th { "Finished" }
                    th { "Deals" }
                    th { "Error" }
                }
            }
            tbody {
                for job in jobs {
                    tr {
                        key: "{job.id}",
                        td { "{job.source}" }
                        td {
                            StatusBadge { status: job.status }
                        }
                        td { {short_time(&job.started_at)} }
                        td {
                            {job.finished_at.as_deref().map(short_time).unwrap_or_default()}
                        }
                        td { "{job.deals_found}" }
                        td {
                            class: "job-error",
                            {job.error.clone().unwrap_or_default()}
                        }
                    }
                }
            }
        }
    }
}
