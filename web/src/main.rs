use dioxus::prelude::*;

use views::{Dashboard, Integrations, Login, Schedules, Scrapers, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/scrapers")]
        Scrapers {},
        #[route("/schedules")]
        Schedules {},
        #[route("/integrations")]
        Integrations {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Backend endpoints derive from wherever the dashboard is served.
    let config = use_context_provider(detect_config);
    use_context_provider(|| api::Client::new(&config.api_base_url));
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    // Theme context: None = system, Some("dark"), Some("light")
    let mut theme: ui::ThemeSignal = use_context_provider(|| Signal::new(Option::<String>::None));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AuthProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Same origin that serves the page, REST under `/api/v1` and sockets on the
/// matching ws scheme. Falls back to the packaged defaults outside a browser.
fn detect_config() -> store::ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            let ws_base = origin.replacen("http", "ws", 1);
            return store::ClientConfig::new(format!("{origin}/api/v1"), ws_base);
        }
    }
    store::ClientConfig::default()
}

/// Redirect `/` based on the restored session.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().user.is_some() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
