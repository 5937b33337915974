//! Signed-in chrome: top bar with navigation, user area, and the activity
//! log panel. Platform wrappers render their router outlet as children.

use dioxus::prelude::*;

use crate::auth::sign_out;
use crate::{use_api, use_auth, ActivityLogPanel, ActivityLogToggle, ThemeToggle};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellTab {
    Dashboard,
    Scrapers,
    Schedules,
    Integrations,
}

impl ShellTab {
    fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Scrapers => "Scrapers",
            Self::Schedules => "Schedules",
            Self::Integrations => "Integrations",
        }
    }

    const ALL: [ShellTab; 4] = [
        Self::Dashboard,
        Self::Scrapers,
        Self::Schedules,
        Self::Integrations,
    ];
}

#[component]
pub fn ShellView(
    active: ShellTab,
    on_navigate: EventHandler<ShellTab>,
    on_session_end: EventHandler<()>,
    children: Element,
) -> Element {
    let client = use_api();
    let auth = use_auth();

    // Route guard: the session can end underneath us (401 eviction, sign
    // out); the platform wrapper decides where to go.
    use_effect(move || {
        if auth().user.is_none() {
            on_session_end.call(());
        }
    });

    let display_name = auth()
        .user
        .as_ref()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    let handle_sign_out = move |_| {
        let client = client.clone();
        spawn(async move {
            sign_out(auth, client).await;
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "shell",
            header {
                class: "shell-topbar",
                span { class: "shell-brand", "DealDeck" }
                nav {
                    class: "shell-nav",
                    for tab in ShellTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if tab == active { "shell-nav-link active" } else { "shell-nav-link" },
                            onclick: move |_| on_navigate.call(tab),
                            "{tab.label()}"
                        }
                    }
                }
                div {
                    class: "shell-user",
                    ThemeToggle {}
                    ActivityLogToggle {}
                    span { class: "shell-user-name", "{display_name}" }
                    button {
                        class: "shell-sign-out",
                        onclick: handle_sign_out,
                        "Sign out"
                    }
                }
            }
            main {
                class: "shell-main",
                {children}
            }
            ActivityLogPanel {}
        }
    }
}
