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
    // Endpoints come from the config file, overridable via env vars.
    let config = use_context_provider(store::ClientConfig::load_native);
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
