//! Realtime channel buffers for live dashboard panels.
//!
//! DESIGN
//! ======
//! Channels are keyed by caller-supplied id in a `HashMap`. Each channel owns
//! a [`RingBuffer`] of data points bounded by its `max_data_points`, so the
//! bound holds after every write, single or batched. The store never opens
//! sockets or schedules timers: an external stream manager reports status and
//! pushes samples, and reads `auto_reconnect` / `reconnect_interval_ms` to
//! drive its own retries.
//!
//! Writes aimed at an unknown channel are dropped. A stream callback firing
//! after `unsubscribe` is an expected race, not an error.


mod ring;

pub use ring::RingBuffer;

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::{Clock, SystemClock};
use crate::config::{DEFAULT_AUTO_RECONNECT, DEFAULT_RECONNECT_INTERVAL_MS, StoreConfig};
use crate::id;

// =============================================================================
// TYPES
// =============================================================================

/// Perceived link state of a channel or of the whole store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// One stored sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: String,
    pub timestamp: f64,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// A sample as delivered by a stream, before the store assigns its id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPointInput {
    pub timestamp: f64,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl DataPointInput {
    #[must_use]
    pub fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value, metadata: None }
    }

    fn stamp(self) -> DataPoint {
        DataPoint {
            id: id::generate(id::DATA_POINT_PREFIX),
            timestamp: self.timestamp,
            value: self.value,
            metadata: self.metadata,
        }
    }
}

/// Options for [`RealtimeStore::subscribe`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Display name; the channel id when absent.
    pub name: Option<String>,
    /// Buffer bound; the store default when absent.
    pub max_data_points: Option<NonZeroUsize>,
}

/// Live state of one subscribed stream.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeChannel {
    pub id: String,
    pub name: String,
    pub status: ConnectionStatus,
    pub data: RingBuffer<DataPoint>,
    /// Milliseconds since the Unix epoch of the last write, `None` until data arrives.
    pub last_updated: Option<i64>,
    pub error_count: u32,
    pub max_data_points: NonZeroUsize,
}

impl RealtimeChannel {
    fn new(id: String, config: ChannelConfig, default_max: NonZeroUsize) -> Self {
        let max_data_points = config.max_data_points.unwrap_or(default_max);
        Self {
            name: config.name.unwrap_or_else(|| id.clone()),
            id,
            status: ConnectionStatus::Connecting,
            data: RingBuffer::new(max_data_points),
            last_updated: None,
            error_count: 0,
            max_data_points,
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&DataPoint> {
        self.data.last()
    }

    fn mark_received(&mut self, now_ms: i64) {
        self.last_updated = Some(now_ms);
        self.status = ConnectionStatus::Connected;
    }
}

// =============================================================================
// REALTIME STORE
// =============================================================================

/// All subscribed channels plus store-wide connection settings.
#[derive(Clone)]
pub struct RealtimeStore {
    channels: HashMap<String, RealtimeChannel>,
    global_status: ConnectionStatus,
    last_error: Option<String>,
    auto_reconnect: bool,
    reconnect_interval_ms: u64,
    config: StoreConfig,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for RealtimeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealtimeStore")
            .field("channels", &self.channels)
            .field("global_status", &self.global_status)
            .field("last_error", &self.last_error)
            .field("auto_reconnect", &self.auto_reconnect)
            .field("reconnect_interval_ms", &self.reconnect_interval_ms)
            .finish_non_exhaustive()
    }
}

impl Default for RealtimeStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl RealtimeStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            channels: HashMap::new(),
            global_status: ConnectionStatus::Disconnected,
            last_error: None,
            auto_reconnect: config.auto_reconnect,
            reconnect_interval_ms: config.reconnect_interval_ms,
            config,
            clock,
        }
    }

    // -------------------------------------------------------------------------
    // channel lifecycle
    // -------------------------------------------------------------------------

    /// Create `channel_id` in the `connecting` state. An existing channel is
    /// left exactly as it is.
    pub fn subscribe(&mut self, channel_id: &str, config: ChannelConfig) {
        if self.channels.contains_key(channel_id) {
            tracing::trace!(channel = %channel_id, "already subscribed");
            return;
        }
        let channel = RealtimeChannel::new(channel_id.to_owned(), config, self.config.default_max_data_points);
        tracing::debug!(channel = %channel_id, max_data_points = channel.max_data_points.get(), "channel subscribed");
        self.channels.insert(channel_id.to_owned(), channel);
    }

    pub fn unsubscribe(&mut self, channel_id: &str) {
        if self.channels.remove(channel_id).is_some() {
            tracing::debug!(channel = %channel_id, "channel unsubscribed");
        }
    }

    /// Set a channel's status. Each transition to `Error` bumps `error_count`.
    pub fn set_channel_status(&mut self, channel_id: &str, status: ConnectionStatus) {
        let Some(channel) = self.channels.get_mut(channel_id) else {
            tracing::trace!(channel = %channel_id, ?status, "status for unknown channel dropped");
            return;
        };
        channel.status = status;
        if status == ConnectionStatus::Error {
            channel.error_count = channel.error_count.saturating_add(1);
            tracing::warn!(channel = %channel_id, errors = channel.error_count, "channel error");
        } else {
            tracing::debug!(channel = %channel_id, ?status, "channel status");
        }
    }

    // -------------------------------------------------------------------------
    // data ingestion
    // -------------------------------------------------------------------------

    /// Append one sample, evicting the oldest when the buffer is full.
    pub fn add_data_point(&mut self, channel_id: &str, point: DataPointInput) {
        self.add_data_points(channel_id, std::iter::once(point));
    }

    /// Append samples in order as one update: `last_updated` and `status`
    /// change once for the whole batch.
    pub fn add_data_points<I>(&mut self, channel_id: &str, points: I)
    where
        I: IntoIterator<Item = DataPointInput>,
    {
        let Some(channel) = self.channels.get_mut(channel_id) else {
            tracing::trace!(channel = %channel_id, "data for unknown channel dropped");
            return;
        };
        channel.data.extend(points.into_iter().map(DataPointInput::stamp));
        channel.mark_received(self.clock.now_ms());
    }

    /// Drop buffered samples; status and error count are kept.
    pub fn clear_channel_data(&mut self, channel_id: &str) {
        if let Some(channel) = self.channels.get_mut(channel_id) {
            channel.data.clear();
            channel.last_updated = None;
        }
    }

    // -------------------------------------------------------------------------
    // global fields
    // -------------------------------------------------------------------------

    pub fn set_global_status(&mut self, status: ConnectionStatus) {
        self.global_status = status;
    }

    /// Replace the last error message. `None` clears it.
    pub fn set_error(&mut self, message: Option<String>) {
        if let Some(msg) = &message {
            tracing::warn!(error = %msg, "realtime error");
        }
        self.last_error = message;
    }

    pub fn toggle_auto_reconnect(&mut self) {
        self.auto_reconnect = !self.auto_reconnect;
    }

    pub fn set_reconnect_interval(&mut self, interval_ms: u64) {
        self.reconnect_interval_ms = interval_ms;
    }

    /// Drop every channel and restore the global fields to their defaults.
    /// Only `default_max_data_points` survives from the construction config.
    pub fn reset(&mut self) {
        tracing::debug!(channels = self.channels.len(), "realtime store reset");
        self.channels.clear();
        self.global_status = ConnectionStatus::Disconnected;
        self.last_error = None;
        self.auto_reconnect = DEFAULT_AUTO_RECONNECT;
        self.reconnect_interval_ms = DEFAULT_RECONNECT_INTERVAL_MS;
    }

    // -------------------------------------------------------------------------
    // reads
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn channel(&self, channel_id: &str) -> Option<&RealtimeChannel> {
        self.channels.get(channel_id)
    }

    #[must_use]
    pub fn latest_data_point(&self, channel_id: &str) -> Option<&DataPoint> {
        self.channels.get(channel_id).and_then(RealtimeChannel::latest)
    }

    #[must_use]
    pub fn latest_value(&self, channel_id: &str) -> Option<f64> {
        self.latest_data_point(channel_id).map(|p| p.value)
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Subscribed channel ids, sorted.
    #[must_use]
    pub fn channel_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn global_status(&self) -> ConnectionStatus {
        self.global_status
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn auto_reconnect(&self) -> bool {
        self.auto_reconnect
    }

    #[must_use]
    pub fn reconnect_interval_ms(&self) -> u64 {
        self.reconnect_interval_ms
    }

    /// How long a stream manager should wait before reconnecting, or `None`
    /// when auto-reconnect is off.
    #[must_use]
    pub fn reconnect_delay(&self) -> Option<Duration> {
        self.auto_reconnect
            .then(|| Duration::from_millis(self.reconnect_interval_ms))
    }
}
