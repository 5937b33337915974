use api::{Schedule, ScheduleInput, ScraperSource};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

/// Form for creating or editing a schedule. Field checks run client side and
/// render inline; the parent owns the actual save call.
#[component]
pub fn ScheduleDialog(
    sources: Vec<ScraperSource>,
    initial: Option<Schedule>,
    #[props(default)] busy: bool,
    on_save: EventHandler<ScheduleInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let seed = initial
        .as_ref()
        .map(ScheduleInput::from)
        .unwrap_or_else(|| ScheduleInput {
            enabled: true,
            ..ScheduleInput::default()
        });

    let mut name = use_signal(|| seed.name.clone());
    let mut source = use_signal(|| seed.source.clone());
    let mut cron_expr = use_signal(|| seed.cron_expr.clone());
    let mut enabled = use_signal(|| seed.enabled);
    let mut problems = use_signal(Vec::<String>::new);

    let handle_submit = move |_| {
        let input = ScheduleInput {
            name: name().trim().to_string(),
            source: source(),
            cron_expr: cron_expr().trim().to_string(),
            enabled: enabled(),
        };
        match input.validate() {
            Ok(()) => {
                problems.set(Vec::new());
                on_save.call(input);
            }
            Err(found) => problems.set(found),
        }
    };

    rsx! {
        div {
            class: "dialog-body",
            h2 {
                class: "dialog-title",
                if editing { "Edit schedule" } else { "New schedule" }
            }

            if !problems().is_empty() {
                ul {
                    class: "form-errors",
                    for problem in problems() {
                        li { "{problem}" }
                    }
                }
            }

            div {
                class: "form-row",
                Label { html_for: "schedule-name", "Name" }
                Input {
                    id: "schedule-name",
                    placeholder: "Morning sweep",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            div {
                class: "form-row",
                Label { html_for: "schedule-source", "Source" }
                select {
                    id: "schedule-source",
                    class: "field-input",
                    value: source(),
                    onchange: move |evt: FormEvent| source.set(evt.value()),
                    option { value: "", "Pick a source" }
                    for src in &sources {
                        option {
                            key: "{src.id}",
                            value: "{src.id}",
                            "{src.name}"
                        }
                    }
                }
            }

            div {
                class: "form-row",
                Label { html_for: "schedule-cron", "Cron expression" }
                Input {
                    id: "schedule-cron",
                    placeholder: "0 6 * * *",
                    value: cron_expr(),
                    oninput: move |evt: FormEvent| cron_expr.set(evt.value()),
                }
                p { class: "form-hint", "minute hour day month weekday" }
            }

            div {
                class: "form-row form-row--inline",
                input {
                    id: "schedule-enabled",
                    r#type: "checkbox",
                    checked: enabled(),
                    onchange: move |evt: FormEvent| enabled.set(evt.checked()),
                }
                Label { html_for: "schedule-enabled", "Enabled" }
            }

            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: busy,
                    onclick: handle_submit,
                    if editing { "Save changes" } else { "Create schedule" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
