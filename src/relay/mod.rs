//! Device relay push
//!
//! Playlists reach physical screens through a third-party WebSocket relay.
//! A push is a single best-effort text frame:
//! - No acknowledgment, retry or queueing
//! - Connection opened on the first push and kept until shutdown
//! - A reader task answers pings and notices when the relay hangs up; the
//!   next push then opens a fresh connection
//! - A failed send drops the connection and surfaces the error
//! - Per-device cooldown so the same playlist isn't pushed twice in a row

use async_trait::async_trait;
use futures::stream::{SplitSink, StreamExt};
use futures::SinkExt;
use serde_json::Value;
use signage_types::RelayMessage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Campaign already sent to device, Pls try again in less than {minutes} minutes")]
    CoolingDown { device_id: String, minutes: u64 },

    #[error("Campaign is already being sent to this device")]
    InFlight { device_id: String },

    #[error("Could not reach the device relay: {0}")]
    Connect(#[source] tungstenite::Error),

    #[error("Sending to the device relay failed: {0}")]
    Send(#[source] tungstenite::Error),

    #[error("Could not encode relay message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outbound side of the relay connection.
#[async_trait]
pub trait RelaySink: Send + Sync {
    async fn send_text(&self, text: String) -> Result<(), RelayError>;

    async fn close(&self);
}

type RelayStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Write half of an open relay connection plus the task draining its read half.
struct Connection {
    writer: SplitSink<RelayStream, Message>,
    alive: Arc<AtomicBool>,
    reader: JoinHandle<()>,
}

impl Connection {
    async fn open(url: &str) -> Result<Self, RelayError> {
        let (stream, _) = connect_async(url).await.map_err(RelayError::Connect)?;
        let (writer, mut read) = stream.split();
        let alive = Arc::new(AtomicBool::new(true));

        let flag = alive.clone();
        let url = url.to_string();
        // Reading also flushes the pongs tungstenite queues for incoming pings
        let reader = tokio::spawn(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(Message::Close(frame)) => {
                        info!(%url, ?frame, "Device relay closed the connection");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(%url, error = %e, "Device relay connection failed");
                        break;
                    }
                }
            }
            flag.store(false, Ordering::SeqCst);
        });

        Ok(Self {
            writer,
            alive,
            reader,
        })
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst) && !self.reader.is_finished()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

/// Lazily connected WebSocket to the relay URL.
pub struct WebSocketSink {
    url: String,
    conn: tokio::sync::Mutex<Option<Connection>>,
}

impl WebSocketSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            conn: tokio::sync::Mutex::new(None),
        }
    }
}

#[async_trait]
impl RelaySink for WebSocketSink {
    async fn send_text(&self, text: String) -> Result<(), RelayError> {
        let mut conn = self.conn.lock().await;

        if conn.as_ref().is_some_and(|c| !c.is_alive()) {
            debug!(url = %self.url, "Discarding closed relay connection");
            *conn = None;
        }

        if conn.is_none() {
            *conn = Some(Connection::open(&self.url).await?);
            info!(url = %self.url, "Connected to device relay");
        }

        let Some(connection) = conn.as_mut() else {
            return Ok(());
        };

        if let Err(e) = connection.writer.send(Message::text(text)).await {
            warn!(url = %self.url, error = %e, "Relay send failed, dropping connection");
            *conn = None;
            return Err(RelayError::Send(e));
        }
        Ok(())
    }

    async fn close(&self) {
        if let Some(mut connection) = self.conn.lock().await.take() {
            if let Err(e) = connection.writer.close().await {
                debug!(error = %e, "Relay close handshake failed");
            }
            info!("Device relay connection closed");
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    /// A push is being prepared or sent
    Pending,
    Sent(Instant),
}

/// Per-device push bookkeeping. Checking and claiming a device happen under
/// one lock, so concurrent pushes to the same device cannot both proceed.
pub struct Cooldown {
    window: Duration,
    slots: Mutex<HashMap<String, Slot>>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claim `device_id` for a push, failing while it is cooling down or
    /// another push to it is still running.
    fn claim(&self, device_id: &str) -> Result<(), RelayError> {
        let mut slots = self.slots();
        let window = self.window;
        slots.retain(|_, slot| match slot {
            Slot::Pending => true,
            Slot::Sent(at) => at.elapsed() < window,
        });

        match slots.get(device_id) {
            Some(Slot::Pending) => Err(RelayError::InFlight {
                device_id: device_id.to_string(),
            }),
            Some(Slot::Sent(at)) => {
                debug!(
                    device_id,
                    remaining_secs = window.saturating_sub(at.elapsed()).as_secs(),
                    "Push rejected, cooling down"
                );
                Err(RelayError::CoolingDown {
                    device_id: device_id.to_string(),
                    minutes: self.minutes(),
                })
            }
            None => {
                slots.insert(device_id.to_string(), Slot::Pending);
                Ok(())
            }
        }
    }

    fn mark_sent(&self, device_id: &str) {
        self.slots()
            .insert(device_id.to_string(), Slot::Sent(Instant::now()));
    }

    fn release(&self, device_id: &str) {
        let mut slots = self.slots();
        if matches!(slots.get(device_id), Some(Slot::Pending)) {
            slots.remove(device_id);
        }
    }

    /// True when a push to `device_id` would be accepted right now.
    pub fn is_ready(&self, device_id: &str) -> bool {
        match self.slots().get(device_id) {
            None => true,
            Some(Slot::Pending) => false,
            Some(Slot::Sent(at)) => at.elapsed() >= self.window,
        }
    }

    fn minutes(&self) -> u64 {
        self.window.as_secs().div_ceil(60)
    }
}

/// Exclusive right to push to one device.
///
/// Dropping it without a successful [`PushPermit::send`] frees the device
/// again, so a failed payload fetch or send can be retried right away.
pub struct PushPermit {
    device_id: String,
    cooldown: Arc<Cooldown>,
    sink: Arc<dyn RelaySink>,
    sent: bool,
}

impl PushPermit {
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Forward `payload` verbatim to the device; starts the cooldown on success.
    pub async fn send(mut self, payload: Value) -> Result<(), RelayError> {
        let message = RelayMessage::send_to_device(&self.device_id, payload);
        let text = serde_json::to_string(&message)?;
        self.sink.send_text(text).await?;

        self.cooldown.mark_sent(&self.device_id);
        self.sent = true;
        info!(device_id = %self.device_id, "Campaign data sent to device relay");
        Ok(())
    }
}

impl Drop for PushPermit {
    fn drop(&mut self) {
        if !self.sent {
            self.cooldown.release(&self.device_id);
        }
    }
}

/// Pushes computed playlists to devices through the relay.
pub struct DeviceRelay {
    sink: Arc<dyn RelaySink>,
    cooldown: Arc<Cooldown>,
}

impl DeviceRelay {
    pub fn new(sink: Arc<dyn RelaySink>, cooldown: Duration) -> Self {
        Self {
            sink,
            cooldown: Arc::new(Cooldown::new(cooldown)),
        }
    }

    pub fn connect_lazily(url: &str, cooldown: Duration) -> Self {
        Self::new(Arc::new(WebSocketSink::new(url)), cooldown)
    }

    /// Claim `device_id` before fetching its payload.
    pub fn reserve(&self, device_id: &str) -> Result<PushPermit, RelayError> {
        self.cooldown.claim(device_id)?;
        Ok(PushPermit {
            device_id: device_id.to_string(),
            cooldown: self.cooldown.clone(),
            sink: self.sink.clone(),
            sent: false,
        })
    }

    pub fn is_ready(&self, device_id: &str) -> bool {
        self.cooldown.is_ready(device_id)
    }

    pub async fn push(&self, device_id: &str, payload: Value) -> Result<(), RelayError> {
        self.reserve(device_id)?.send(payload).await
    }

    pub async fn close(&self) {
        self.sink.close().await;
    }
}
