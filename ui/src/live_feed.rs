//! # The `use_live_feed` hook
//!
//! One hook per live channel. It owns the platform driver for the socket and
//! exposes two signals: the latest payload and the connection status.
//!
//! All connect/parse/reconnect decisions are made by [`FeedCore`]; the
//! drivers here only carry them out. The driver runs inside a
//! [`use_resource`] keyed on the auth token, so a token change tears the old
//! connection down and starts a fresh one, and unmounting the component
//! drops the driver mid-await, which closes the socket and orphans any
//! pending reconnect timer.

use api::live::{FeedCommand, FeedCore, FeedEvent, FeedStatus, LiveChannel, RECONNECT_DELAY};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::{use_auth, use_client_config};

/// Live value and connection status for one channel.
pub struct LiveFeedHandle<T: 'static> {
    pub value: Signal<Option<T>>,
    pub status: Signal<FeedStatus>,
}

impl<T> Clone for LiveFeedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LiveFeedHandle<T> {}

/// Subscribe to a live channel. `T` is the channel's payload shape; frames
/// whose `data` does not decode as `T` are dropped with a debug log.
pub fn use_live_feed<T: DeserializeOwned + 'static>(channel: LiveChannel) -> LiveFeedHandle<T> {
    let auth = use_auth();
    let config = use_client_config();
    let log = use_activity_log();
    let value = use_signal(|| None::<T>);
    let status = use_signal(|| FeedStatus::Disconnected);

    // Memoized so that auth updates which keep the same token do not bounce
    // the connection.
    let token = use_memo(move || auth().token.clone());

    let _driver = use_resource(move || {
        let token = token();
        let ws_base = config.ws_base_url.clone();
        async move {
            drive(channel, ws_base, token, value, status, log).await;
        }
    });

    LiveFeedHandle { value, status }
}

fn set_status(
    channel: LiveChannel,
    mut status: Signal<FeedStatus>,
    mut log: Signal<ActivityLog>,
    next: FeedStatus,
) {
    if *status.peek() == next {
        return;
    }
    status.set(next);
    match next {
        FeedStatus::Connected => log_activity(
            &mut log,
            LogLevel::Success,
            &format!("{} feed connected", channel.tag()),
        ),
        FeedStatus::Disconnected => log_activity(
            &mut log,
            LogLevel::Warning,
            &format!("{} feed lost, retrying shortly", channel.tag()),
        ),
    }
}

fn apply_payload<T: DeserializeOwned>(
    channel: LiveChannel,
    payload: serde_json::Value,
    mut value: Signal<Option<T>>,
) {
    match serde_json::from_value::<T>(payload) {
        Ok(parsed) => value.set(Some(parsed)),
        Err(err) => {
            tracing::debug!(channel = channel.tag(), "live payload has the wrong shape: {err}");
        }
    }
}

/// Browser driver: `web_sys::WebSocket` callbacks pump [`FeedEvent`]s into a
/// channel, and the loop below feeds them through the core.
#[cfg(target_arch = "wasm32")]
async fn drive<T: DeserializeOwned + 'static>(
    channel: LiveChannel,
    ws_base: String,
    token: Option<String>,
    value: Signal<Option<T>>,
    status: Signal<FeedStatus>,
    log: Signal<ActivityLog>,
) {
    use futures::channel::mpsc;
    use futures::StreamExt;

    let mut core = FeedCore::new(channel, token.is_some());
    let Some(token) = token else {
        core.start();
        return;
    };
    let url = channel.url(&ws_base, &token);
    let (events_tx, mut events) = mpsc::unbounded::<FeedEvent>();

    // Held here so that cancelling the driver future drops it, silencing the
    // callbacks and closing the socket.
    let mut socket: Option<SocketGuard> = None;

    let mut commands = core.start();
    loop {
        for command in commands.drain(..) {
            match command {
                FeedCommand::Connect => match SocketGuard::open(&url, events_tx.clone()) {
                    Some(guard) => socket = Some(guard),
                    None => {
                        // The constructor itself refused; treat it as a close
                        // so the normal reconnect path takes over.
                        let _ = events_tx.unbounded_send(FeedEvent::Closed);
                    }
                },
                FeedCommand::StartTimer { generation } => {
                    let tx = events_tx.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::sleep(RECONNECT_DELAY).await;
                        let _ = tx.unbounded_send(FeedEvent::TimerFired(generation));
                    });
                }
                FeedCommand::CloseSocket => {
                    // Close without dropping the guard: the close event must
                    // still reach the core to schedule the reconnect.
                    if let Some(guard) = &socket {
                        guard.close();
                    }
                }
            }
        }
        let Some(event) = events.next().await else {
            return;
        };
        let step = core.handle(event);
        set_status(channel, status, log, core.status());
        if let Some(payload) = step.payload {
            apply_payload(channel, payload, value);
        }
        commands = step.commands;
    }
}

#[cfg(target_arch = "wasm32")]
struct SocketGuard {
    socket: web_sys::WebSocket,
    _onopen: wasm_bindgen::closure::Closure<dyn FnMut()>,
    _onmessage: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>,
    _onclose: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::CloseEvent)>,
    _onerror: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl SocketGuard {
    fn open(
        url: &str,
        events: futures::channel::mpsc::UnboundedSender<FeedEvent>,
    ) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let socket = web_sys::WebSocket::new(url).ok()?;

        let tx = events.clone();
        let onopen = Closure::<dyn FnMut()>::new(move || {
            let _ = tx.unbounded_send(FeedEvent::Opened);
        });
        socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));

        let tx = events.clone();
        let onmessage = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| {
                if let Some(text) = event.data().as_string() {
                    let _ = tx.unbounded_send(FeedEvent::Message(text));
                }
            },
        );
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let tx = events.clone();
        let onclose = Closure::<dyn FnMut(web_sys::CloseEvent)>::new(
            move |_: web_sys::CloseEvent| {
                let _ = tx.unbounded_send(FeedEvent::Closed);
            },
        );
        socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        let tx = events;
        let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let _ = tx.unbounded_send(FeedEvent::Errored);
        });
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Some(Self {
            socket,
            _onopen: onopen,
            _onmessage: onmessage,
            _onclose: onclose,
            _onerror: onerror,
        })
    }

    fn close(&self) {
        let _ = self.socket.close();
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for SocketGuard {
    fn drop(&mut self) {
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onclose(None);
        self.socket.set_onerror(None);
        let _ = self.socket.close();
    }
}

/// Desktop driver: a sequential connect/read loop. The awaited sleep *is*
/// the reconnect timer, and dropping the stream *is* the close, so the core
/// sees the same event sequence the browser driver produces.
#[cfg(not(target_arch = "wasm32"))]
async fn drive<T: DeserializeOwned + 'static>(
    channel: LiveChannel,
    ws_base: String,
    token: Option<String>,
    value: Signal<Option<T>>,
    status: Signal<FeedStatus>,
    log: Signal<ActivityLog>,
) {
    use futures::StreamExt;
    use tokio_tungstenite::connect_async;
    use tokio_tungstenite::tungstenite::Message;

    let mut core = FeedCore::new(channel, token.is_some());
    let Some(token) = token else {
        core.start();
        return;
    };
    let url = channel.url(&ws_base, &token);

    if !core.start().contains(&FeedCommand::Connect) {
        return;
    }
    loop {
        match connect_async(url.as_str()).await {
            Ok((mut stream, _)) => {
                core.handle(FeedEvent::Opened);
                set_status(channel, status, log, core.status());
                while let Some(frame) = stream.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            let step = core.handle(FeedEvent::Message(text));
                            if let Some(payload) = step.payload {
                                apply_payload(channel, payload, value);
                            }
                        }
                        Ok(Message::Close(_)) => break,
                        Ok(_) => {}
                        Err(err) => {
                            tracing::debug!(channel = channel.tag(), "socket error: {err}");
                            core.handle(FeedEvent::Errored);
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                tracing::debug!(channel = channel.tag(), "connect failed: {err}");
            }
        }
        let step = core.handle(FeedEvent::Closed);
        set_status(channel, status, log, core.status());
        let Some(&FeedCommand::StartTimer { generation }) = step.commands.first() else {
            return;
        };
        tokio::time::sleep(RECONNECT_DELAY).await;
        if !core
            .handle(FeedEvent::TimerFired(generation))
            .commands
            .contains(&FeedCommand::Connect)
        {
            return;
        }
    }
}
