//! Light/dark/system theme selection.
//!
//! The active theme is a `data-theme` attribute on the document root; the
//! stylesheets key off it. `None` means follow the system preference.

use dioxus::prelude::*;

use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::Icon;

/// Context signal: `None` = system, `Some("light")`, `Some("dark")`.
pub type ThemeSignal = Signal<Option<String>>;

#[cfg(target_arch = "wasm32")]
const THEME_KEY: &str = "dealdeck.theme";

/// Set (or clear) the document theme attribute and remember the choice.
pub fn apply_theme(theme: Option<&str>) {
    let js = match theme {
        Some(t) => format!("document.documentElement.setAttribute('data-theme', '{t}')"),
        None => "document.documentElement.removeAttribute('data-theme')".to_string(),
    };
    let _ = document::eval(&js);
    persist_theme(theme);
}

/// Restore the persisted choice on startup.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    #[cfg(target_arch = "wasm32")]
    if let Some(stored) = read_persisted_theme() {
        apply_theme(Some(&stored));
        theme.set(Some(stored));
        return;
    }
    // Desktop keeps the in-session choice only.
    let _ = theme;
}

/// Compact header button cycling system, light, dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let current = theme().unwrap_or_default();

    let title = match current.as_str() {
        "light" => "Theme: light",
        "dark" => "Theme: dark",
        _ => "Theme: system",
    };
    let current_for_click = current.clone();

    rsx! {
        button {
            class: "theme-toggle",
            title: title,
            onclick: move |_| {
                let next = match current_for_click.as_str() {
                    "" => Some("light".to_string()),
                    "light" => Some("dark".to_string()),
                    _ => None,
                };
                apply_theme(next.as_deref());
                theme.set(next);
            },
            if current == "light" {
                Icon { icon: FaSun, width: 14, height: 14 }
            } else if current == "dark" {
                Icon { icon: FaMoon, width: 14, height: 14 }
            } else {
                Icon { icon: FaCircleHalfStroke, width: 14, height: 14 }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn persist_theme(theme: Option<&str>) {
    if let Some(storage) = local_storage() {
        let result = match theme {
            Some(t) => storage.set_item(THEME_KEY, t),
            None => storage.remove_item(THEME_KEY),
        };
        if result.is_err() {
            tracing::debug!("could not persist theme choice");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_theme(_theme: Option<&str>) {}

#[cfg(target_arch = "wasm32")]
fn read_persisted_theme() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
