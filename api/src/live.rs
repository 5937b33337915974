//! # Live feed connector core
//!
//! The dashboard keeps a few tiles fresh over WebSocket channels:
//!
//! | Channel tag      | Path           | Payload                               |
//! |------------------|----------------|---------------------------------------|
//! | `metrics`        | `/ws/metrics`  | [`crate::models::LiveMetrics`]        |
//! | `scraper_status` | `/ws/scrapers` | [`crate::models::ScraperActivity`]    |
//! | `message_stats`  | `/ws/messages` | [`crate::models::MessagingStats`]     |
//!
//! All three share one connection discipline, and that discipline lives here
//! as a pure state machine so it can be unit tested without sockets or
//! timers. [`FeedCore`] consumes [`FeedEvent`]s (what the socket/timer did)
//! and answers with [`FeedCommand`]s (what the platform driver should do
//! next). The drivers in the `ui` crate own the actual `WebSocket` /
//! `tokio-tungstenite` handles and the 5-second timer; they never make
//! decisions of their own.
//!
//! ## The discipline
//!
//! - No token: never connect. The feed stays disconnected until it is torn
//!   down and rebuilt with a token.
//! - Frames are JSON envelopes `{"type": <channel tag>, "data": ...}`. Frames
//!   that fail to parse are dropped without touching state; frames whose tag
//!   belongs to another channel are ignored; a matching frame's `data`
//!   replaces the exposed value wholesale.
//! - Every close schedules exactly one reconnect attempt, a fixed
//!   [`RECONNECT_DELAY`] later. Timers carry a generation number; a timer
//!   whose generation is no longer current fires into the void, so overlapping
//!   close/reconnect sequences can never stack connections. The timer also
//!   does nothing if the socket managed to reopen in the meantime.
//! - A socket error just closes the socket; the close handling above does the
//!   rescheduling. No backoff growth, no jitter, no retry cap.
//! - [`FeedCore::stop`] (unmount) closes the socket and suppresses every
//!   later event, so nothing reconnects after teardown.

use std::time::Duration;

use serde::Deserialize;

/// Fixed delay between a close and the single reconnect attempt it schedules.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// The three live channels the backend publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveChannel {
    Metrics,
    Scrapers,
    Messages,
}

impl LiveChannel {
    /// The `type` tag frames on this channel carry.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Scrapers => "scraper_status",
            Self::Messages => "message_stats",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Metrics => "/ws/metrics",
            Self::Scrapers => "/ws/scrapers",
            Self::Messages => "/ws/messages",
        }
    }

    /// Full connection URL, token passed as a query parameter.
    pub fn url(&self, ws_base: &str, token: &str) -> String {
        format!("{}{}?token={token}", ws_base.trim_end_matches('/'), self.path())
    }
}

/// Whether the feed currently has an open socket behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Connected,
    Disconnected,
}

/// What happened on the platform side.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// The socket finished its handshake.
    Opened,
    /// A text frame arrived.
    Message(String),
    /// The socket closed, cleanly or not.
    Closed,
    /// The socket errored. Drivers report the error and let the core decide.
    Errored,
    /// A reconnect timer fired, carrying the generation it was scheduled with.
    TimerFired(u64),
}

/// What the platform driver must do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedCommand {
    /// Open a socket to [`LiveChannel::url`].
    Connect,
    /// Start a [`RECONNECT_DELAY`] timer that reports back
    /// [`FeedEvent::TimerFired`] with this generation.
    StartTimer { generation: u64 },
    /// Close the current socket.
    CloseSocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SocketState {
    Idle,
    Connecting,
    Open,
}

/// Result of feeding one event through the core.
#[derive(Debug, Default)]
pub struct Step {
    pub commands: Vec<FeedCommand>,
    /// Present when the event was a frame for this channel: the new value.
    pub payload: Option<serde_json::Value>,
}

impl Step {
    fn none() -> Self {
        Self::default()
    }

    fn run(command: FeedCommand) -> Self {
        Self {
            commands: vec![command],
            payload: None,
        }
    }
}

/// Connection state machine for one live channel.
pub struct FeedCore {
    channel: LiveChannel,
    has_token: bool,
    status: FeedStatus,
    socket: SocketState,
    timer_generation: u64,
    stopped: bool,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl FeedCore {
    pub fn new(channel: LiveChannel, has_token: bool) -> Self {
        Self {
            channel,
            has_token,
            status: FeedStatus::Disconnected,
            socket: SocketState::Idle,
            timer_generation: 0,
            stopped: false,
        }
    }

    pub fn channel(&self) -> LiveChannel {
        self.channel
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    /// First commands after construction. Without a token this is empty and
    /// the feed stays disconnected for its whole life.
    pub fn start(&mut self) -> Vec<FeedCommand> {
        if !self.has_token {
            tracing::debug!(channel = self.channel.tag(), "no token, feed stays offline");
            return Vec::new();
        }
        self.socket = SocketState::Connecting;
        vec![FeedCommand::Connect]
    }

    /// Tear down. Every event handled after this is a no-op.
    pub fn stop(&mut self) -> Vec<FeedCommand> {
        self.stopped = true;
        self.status = FeedStatus::Disconnected;
        if self.socket == SocketState::Idle {
            Vec::new()
        } else {
            vec![FeedCommand::CloseSocket]
        }
    }

    pub fn handle(&mut self, event: FeedEvent) -> Step {
        match event {
            FeedEvent::Opened => {
                if self.stopped {
                    return Step::run(FeedCommand::CloseSocket);
                }
                self.socket = SocketState::Open;
                self.status = FeedStatus::Connected;
                tracing::debug!(channel = self.channel.tag(), "feed connected");
                Step::none()
            }
            FeedEvent::Message(text) => {
                if self.stopped || self.socket != SocketState::Open {
                    return Step::none();
                }
                Step {
                    commands: Vec::new(),
                    payload: self.parse(&text),
                }
            }
            FeedEvent::Closed => {
                self.status = FeedStatus::Disconnected;
                self.socket = SocketState::Idle;
                if self.stopped || !self.has_token {
                    return Step::none();
                }
                self.timer_generation += 1;
                tracing::debug!(
                    channel = self.channel.tag(),
                    generation = self.timer_generation,
                    "feed closed, reconnecting in {}s",
                    RECONNECT_DELAY.as_secs()
                );
                Step::run(FeedCommand::StartTimer {
                    generation: self.timer_generation,
                })
            }
            FeedEvent::Errored => {
                if self.socket == SocketState::Idle {
                    return Step::none();
                }
                tracing::debug!(channel = self.channel.tag(), "feed errored, closing socket");
                Step::run(FeedCommand::CloseSocket)
            }
            FeedEvent::TimerFired(generation) => {
                if self.stopped
                    || !self.has_token
                    || generation != self.timer_generation
                    || self.socket != SocketState::Idle
                {
                    return Step::none();
                }
                self.socket = SocketState::Connecting;
                Step::run(FeedCommand::Connect)
            }
        }
    }

    /// Parse a frame; `None` for anything that is not a matching envelope.
    fn parse(&self, text: &str) -> Option<serde_json::Value> {
        let envelope: Envelope = match serde_json::from_str(text) {
            Ok(envelope) => envelope,
            Err(_) => {
                tracing::debug!(channel = self.channel.tag(), "dropping unparseable frame");
                return None;
            }
        };
        if envelope.kind != self.channel.tag() {
            return None;
        }
        Some(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> FeedCore {
        let mut core = FeedCore::new(LiveChannel::Metrics, true);
        assert_eq!(core.start(), vec![FeedCommand::Connect]);
        core.handle(FeedEvent::Opened);
        assert_eq!(core.status(), FeedStatus::Connected);
        core
    }

    #[test]
    fn without_a_token_nothing_ever_connects() {
        let mut core = FeedCore::new(LiveChannel::Metrics, false);
        assert!(core.start().is_empty());
        assert_eq!(core.status(), FeedStatus::Disconnected);

        // Whatever trickles in, the feed never asks to connect.
        assert!(core.handle(FeedEvent::Closed).commands.is_empty());
        assert!(core.handle(FeedEvent::TimerFired(1)).commands.is_empty());
        assert!(core.handle(FeedEvent::Errored).commands.is_empty());
        assert_eq!(core.status(), FeedStatus::Disconnected);
    }

    #[test]
    fn open_marks_the_feed_connected() {
        connected();
    }

    #[test]
    fn close_schedules_exactly_one_reconnect_timer() {
        let mut core = connected();
        let step = core.handle(FeedEvent::Closed);
        assert_eq!(step.commands, vec![FeedCommand::StartTimer { generation: 1 }]);
        assert_eq!(core.status(), FeedStatus::Disconnected);

        let step = core.handle(FeedEvent::TimerFired(1));
        assert_eq!(step.commands, vec![FeedCommand::Connect]);
    }

    #[test]
    fn a_second_close_invalidates_the_earlier_timer() {
        let mut core = connected();
        core.handle(FeedEvent::Closed);
        core.handle(FeedEvent::TimerFired(1));
        core.handle(FeedEvent::Opened);
        let step = core.handle(FeedEvent::Closed);
        assert_eq!(step.commands, vec![FeedCommand::StartTimer { generation: 2 }]);

        // The generation-1 timer is stale now; only generation 2 connects.
        assert!(core.handle(FeedEvent::TimerFired(1)).commands.is_empty());
        assert_eq!(
            core.handle(FeedEvent::TimerFired(2)).commands,
            vec![FeedCommand::Connect]
        );
    }

    #[test]
    fn timer_fires_only_while_still_disconnected() {
        let mut core = connected();
        core.handle(FeedEvent::Closed);
        core.handle(FeedEvent::TimerFired(1));

        // Already connecting; a duplicate fire must not open a second socket.
        assert!(core.handle(FeedEvent::TimerFired(1)).commands.is_empty());

        core.handle(FeedEvent::Opened);
        assert!(core.handle(FeedEvent::TimerFired(1)).commands.is_empty());
    }

    #[test]
    fn unparseable_frames_are_discarded() {
        let mut core = connected();
        for frame in ["not json at all", "{\"type\":", ""] {
            let step = core.handle(FeedEvent::Message(frame.to_string()));
            assert!(step.payload.is_none());
            assert!(step.commands.is_empty());
        }
        assert_eq!(core.status(), FeedStatus::Connected);
    }

    #[test]
    fn frames_for_another_channel_are_ignored() {
        let mut core = connected();
        let step = core.handle(FeedEvent::Message(
            r#"{"type": "message_stats", "data": {"sent_today": 9}}"#.to_string(),
        ));
        assert!(step.payload.is_none());
    }

    #[test]
    fn matching_frames_yield_their_payload() {
        let mut core = connected();
        let step = core.handle(FeedEvent::Message(
            r#"{"type": "metrics", "data": {"deals_today": 41}}"#.to_string(),
        ));
        assert_eq!(step.payload, Some(serde_json::json!({"deals_today": 41})));
    }

    #[test]
    fn frames_before_the_socket_opens_are_ignored() {
        let mut core = FeedCore::new(LiveChannel::Metrics, true);
        core.start();
        let step = core.handle(FeedEvent::Message(
            r#"{"type": "metrics", "data": {}}"#.to_string(),
        ));
        assert!(step.payload.is_none());
    }

    #[test]
    fn stop_closes_and_never_reconnects() {
        let mut core = connected();
        assert_eq!(core.stop(), vec![FeedCommand::CloseSocket]);

        // The close confirmation arrives after teardown; no timer, no connect.
        assert!(core.handle(FeedEvent::Closed).commands.is_empty());
        assert!(core.handle(FeedEvent::TimerFired(1)).commands.is_empty());
        assert_eq!(core.status(), FeedStatus::Disconnected);
    }

    #[test]
    fn stop_before_any_connection_is_quiet() {
        let mut core = FeedCore::new(LiveChannel::Scrapers, false);
        core.start();
        assert!(core.stop().is_empty());
    }

    #[test]
    fn errors_close_the_socket_proactively() {
        let mut core = connected();
        let step = core.handle(FeedEvent::Errored);
        assert_eq!(step.commands, vec![FeedCommand::CloseSocket]);

        // Still counts as connected until the close actually lands.
        let step = core.handle(FeedEvent::Closed);
        assert_eq!(step.commands, vec![FeedCommand::StartTimer { generation: 1 }]);
    }

    #[test]
    fn channel_urls_carry_the_token() {
        assert_eq!(
            LiveChannel::Scrapers.url("wss://api.dealdeck.app/", "t-9"),
            "wss://api.dealdeck.app/ws/scrapers?token=t-9"
        );
    }
}
