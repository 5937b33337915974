//! Toast notifications, context-signal style.
//!
//! Every network call site routes its `Err` through [`surface_error`], which
//! is the whole error-handling story of the dashboard: show the message,
//! keep going. A 401 additionally flips the auth state so the route guards
//! send the operator back to the login screen.

use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;

use crate::auth::AuthState;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const SUCCESS_DURATION: Duration = Duration::from_secs(4);
const ERROR_DURATION: Duration = Duration::from_secs(6);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Per-toast overrides. The defaults are right for almost everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastOptions {
    pub duration: Option<Duration>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Default)]
struct ToastState {
    items: Vec<Toast>,
    counter: u64,
}

/// Handle for pushing toasts; hand out copies freely.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: Signal<ToastState>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Info, message, options);
    }

    pub fn dismiss(&self, id: u64) {
        let mut state = self.state;
        state.write().items.retain(|toast| toast.id != id);
    }

    fn push(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut state = self.state;
        let id = {
            let mut inner = state.write();
            inner.counter += 1;
            let id = inner.counter;
            inner.items.push(Toast { id, kind, message });
            id
        };
        let duration = options.duration.unwrap_or(match kind {
            ToastKind::Error => ERROR_DURATION,
            _ => SUCCESS_DURATION,
        });
        spawn(async move {
            sleep(duration).await;
            state.write().items.retain(|toast| toast.id != id);
        });
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast context and renders the stack above everything else.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        state: Signal::new(ToastState::default()),
    });
    let items = toasts.state.read().items.clone();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        {children}
        div {
            class: "toast-stack",
            for toast in items {
                ToastCard {
                    key: "{toast.id}",
                    toast,
                    on_dismiss: move |id| toasts.dismiss(id),
                }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
        ToastKind::Info => "toast toast--info",
    };
    let id = toast.id;
    rsx! {
        div {
            class: class,
            onclick: move |_| on_dismiss.call(id),
            "{toast.message}"
        }
    }
}

/// Uniform error surfacing for failed calls: toast the message, and treat a
/// 401 as the end of the session.
pub fn surface_error(mut auth: Signal<AuthState>, toasts: Toasts, err: &ApiError) {
    if err.is_unauthorized() {
        auth.set(AuthState::signed_out());
    }
    toasts.error(err.to_string(), ToastOptions::new());
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
