//! Aggregated live-feed status for the dashboard header.

use dioxus::prelude::*;

use crate::icons::{FaBolt, FaPlugCircleExclamation, FaPlugCircleXmark};
use crate::Icon;

/// A small icon summarizing how many live channels are up.
///
/// - all connected: green bolt ("Live")
/// - some connected: orange plug ("Partial feed")
/// - none connected: gray plug ("Offline, showing last snapshot")
#[component]
pub fn ConnectionIndicator(connected: usize, total: usize) -> Element {
    if connected == total && total > 0 {
        rsx! {
            span {
                class: "connection-indicator connection-indicator--live",
                title: "Live",
                Icon { icon: FaBolt, width: 14, height: 14 }
                span { "Live" }
            }
        }
    } else if connected > 0 {
        rsx! {
            span {
                class: "connection-indicator connection-indicator--partial",
                title: "{connected}/{total} channels up",
                Icon { icon: FaPlugCircleExclamation, width: 14, height: 14 }
                span { "Partial feed" }
            }
        }
    } else {
        rsx! {
            span {
                class: "connection-indicator connection-indicator--offline",
                title: "Offline, showing last snapshot",
                Icon { icon: FaPlugCircleXmark, width: 14, height: 14 }
                span { "Offline" }
            }
        }
    }
}
