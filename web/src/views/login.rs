use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Already signed in: straight to the dashboard.
    use_effect(move || {
        if auth().user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
