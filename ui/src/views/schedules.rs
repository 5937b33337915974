use api::{Schedule, ScheduleInput, ScraperSource};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::{short_time, ModalOverlay};
use crate::{
    log_activity, surface_error, use_activity_log, use_api, use_auth, use_toast, LogLevel,
    ScheduleDialog, ToastOptions,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Recurring scraper runs. Create, edit, pause, and delete schedules; the
/// dialog validates the cron expression before anything goes to the backend.
#[component]
pub fn SchedulesView() -> Element {
    let client = use_api();
    let save_client = client.clone();
    let toggle_client = client.clone();
    let delete_client = client.clone();
    let auth = use_auth();
    let toasts = use_toast();
    let mut activity_log = use_activity_log();

    let mut schedules = use_signal(|| Option::<Vec<Schedule>>::None);
    let mut sources = use_signal(|| Option::<Vec<ScraperSource>>::None);
    let mut dialog_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Schedule>::None);
    let mut delete_target = use_signal(|| Option::<Schedule>::None);
    let mut busy = use_signal(|| false);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.schedules().await {
                Ok(list) => schedules.set(Some(list)),
                Err(err) => surface_error(auth, toasts, &err),
            }
            match client.scraper_sources().await {
                Ok(list) => sources.set(Some(list)),
                Err(err) => surface_error(auth, toasts, &err),
            }
        }
    });

    let handle_save = move |input: ScheduleInput| {
        let client = save_client.clone();
        spawn(async move {
            busy.set(true);
            let target = editing.peek().as_ref().cloned();
            let result = match &target {
                Some(schedule) => client.update_schedule(&schedule.id, &input).await,
                None => client.create_schedule(&input).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if target.is_some() { "Updated" } else { "Created" };
                    log_activity(
                        &mut activity_log,
                        LogLevel::Success,
                        &format!("{verb} schedule {}", saved.name),
                    );
                    toasts.success(format!("{verb} {}", saved.name), ToastOptions::new());
                    dialog_open.set(false);
                    editing.set(None);
                    loader.restart();
                }
                // Leave the dialog open so nothing typed is lost.
                Err(err) => surface_error(auth, toasts, &err),
            }
            busy.set(false);
        });
    };

    let handle_toggle = move |schedule: Schedule| {
        let client = toggle_client.clone();
        spawn(async move {
            match client.toggle_schedule(&schedule.id).await {
                Ok(updated) => {
                    let state = if updated.enabled { "resumed" } else { "paused" };
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Schedule {} {state}", updated.name),
                    );
                    loader.restart();
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
        });
    };

    let confirm_delete = move |_| {
        let client = delete_client.clone();
        spawn(async move {
            let Some(target) = delete_target.peek().as_ref().cloned() else {
                return;
            };
            busy.set(true);
            match client.delete_schedule(&target.id).await {
                Ok(()) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Deleted schedule {}", target.name),
                    );
                    toasts.success(format!("Deleted {}", target.name), ToastOptions::new());
                    delete_target.set(None);
                    loader.restart();
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            busy.set(false);
        });
    };

    let mut close_dialog = move || {
        dialog_open.set(false);
        editing.set(None);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view schedules-view",
            div {
                class: "view-header",
                h2 { "Schedules" }
                div {
                    class: "view-header-tools",
                    Button {
                        onclick: move |_| {
                            editing.set(None);
                            dialog_open.set(true);
                        },
                        "New schedule"
                    }
                }
            }

            div {
                class: "card",
                if let Some(list) = schedules() {
                    if list.is_empty() {
                        p {
                            class: "card-placeholder",
                            "No schedules yet. Scrapers only run when triggered by hand."
                        }
                    } else {
                        ScheduleTable {
                            schedules: list,
                            sources: sources().unwrap_or_default(),
                            on_edit: move |schedule| {
                                editing.set(Some(schedule));
                                dialog_open.set(true);
                            },
                            on_toggle: handle_toggle,
                            on_delete: move |schedule| delete_target.set(Some(schedule)),
                        }
                    }
                } else {
                    p { class: "card-placeholder", "Loading..." }
                }
            }

            if dialog_open() {
                ModalOverlay {
                    on_close: move |_| close_dialog(),
                    ScheduleDialog {
                        sources: sources().unwrap_or_default(),
                        initial: editing(),
                        busy: busy(),
                        on_save: handle_save,
                        on_cancel: move |_| close_dialog(),
                    }
                }
            }

            if let Some(target) = delete_target() {
                ModalOverlay {
                    on_close: move |_| delete_target.set(None),
                    div {
                        class: "dialog-body",
                        h2 { class: "dialog-title", "Delete schedule" }
                        p { "Delete {target.name}? Runs already queued are not affected." }
                        div {
                            class: "dialog-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| delete_target.set(None),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: busy(),
                                onclick: confirm_delete,
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleTable(
    schedules: Vec<Schedule>,
    sources: Vec<ScraperSource>,
    on_edit: EventHandler<Schedule>,
    on_toggle: EventHandler<Schedule>,
    on_delete: EventHandler<Schedule>,
) -> Element {
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Source" }
                    th { "Cron" }
                    th { "State" }
                    th { "Last run" }
                    th { "Next run" }
                    th {}
                }
            }
            tbody {
                for schedule in schedules {
                    tr {
                        key: "{schedule.id}",
                        td { "{schedule.name}" }
                        td { {source_name(&sources, &schedule.source)} }
                        td {
                            code { class: "cron-expr", "{schedule.cron_expr}" }
                        }
                        td {
                            if schedule.enabled {
                                span { class: "sched-state sched-state--on", "active" }
                            } else {
                                span { class: "sched-state sched-state--off", "paused" }
                            }
                        }
                        td {
                            {schedule.last_run_at.as_deref().map(short_time).unwrap_or_else(|| "never".to_string())}
                        }
                        td {
                            {schedule.next_run_at.as_deref().map(short_time).unwrap_or_default()}
                        }
                        td {
                            class: "row-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let schedule = schedule.clone();
                                    move |_| on_toggle.call(schedule.clone())
                                },
                                if schedule.enabled { "Pause" } else { "Resume" }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let schedule = schedule.clone();
                                    move |_| on_edit.call(schedule.clone())
                                },
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let schedule = schedule.clone();
                                    move |_| on_delete.call(schedule.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn source_name(sources: &[ScraperSource], id: &str) -> String {
    sources
        .iter()
        .find(|source| source.id == id)
        .map(|source| source.name.clone())
        .unwrap_or_else(|| id.to_string())
}
