//! # dashboard-state
//!
//! Client-side state stores for the admin dashboard: the modal stack and the
//! realtime channel buffers that back live panels.
//!
//! DESIGN
//! ======
//! Each store is a plain struct with synchronous, infallible operations. The
//! UI layer owns one instance of each, wrapped in a `RwSignal` and provided
//! through Leptos context (see [`context`]). Tests construct isolated
//! instances directly. Browser side effects (scroll lock, wall clock) sit
//! behind small traits so native builds and tests never touch `web-sys`.

pub mod clock;
pub mod config;
pub mod context;
pub mod id;
pub mod modal;
pub mod realtime;
pub mod scroll;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, StoreConfig};
pub use modal::{ModalConfig, ModalKind, ModalOptions, ModalStore};
pub use realtime::{
    ChannelConfig, ConnectionStatus, DataPoint, DataPointInput, RealtimeChannel, RealtimeStore, RingBuffer,
};
pub use scroll::{PageScrollLock, ScrollLock};
