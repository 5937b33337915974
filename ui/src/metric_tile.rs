use dioxus::prelude::*;

/// One summary tile. The dot lights up while the value is coming from a
/// live channel rather than the REST snapshot.
#[component]
pub fn MetricTile(
    label: String,
    value: String,
    #[props(default)] live: bool,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        div {
            class: "metric-tile",
            div {
                class: "metric-tile-label",
                "{label}"
                if live {
                    span { class: "metric-tile-live-dot", title: "Live" }
                }
            }
            div { class: "metric-tile-value", "{value}" }
            if !hint.is_empty() {
                div { class: "metric-tile-hint", "{hint}" }
            }
        }
    }
}
