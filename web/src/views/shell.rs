use dioxus::prelude::*;
use ui::views::{ShellTab, ShellView};

use crate::Route;

/// Router-aware wrapper around the shared shell chrome.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let active = match route {
        Route::Scrapers {} => ShellTab::Scrapers,
        Route::Schedules {} => ShellTab::Schedules,
        Route::Integrations {} => ShellTab::Integrations,
        _ => ShellTab::Dashboard,
    };

    rsx! {
        ShellView {
            active: active,
            on_navigate: move |tab| {
                nav.push(tab_route(tab));
            },
            on_session_end: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

fn tab_route(tab: ShellTab) -> Route {
    match tab {
        ShellTab::Dashboard => Route::Dashboard {},
        ShellTab::Scrapers => Route::Scrapers {},
        ShellTab::Schedules => Route::Schedules {},
        ShellTab::Integrations => Route::Integrations {},
    }
}
