//! Prefixed unique ids for modals and data points.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

use uuid::Uuid;

/// Prefix for ids minted by [`crate::ModalStore::open_modal`].
pub const MODAL_PREFIX: &str = "modal";

/// Prefix for ids stamped onto data points by [`crate::RealtimeStore`].
pub const DATA_POINT_PREFIX: &str = "dp";

/// Mint an id of the form `{prefix}-{uuid}` that is unique for the process
/// lifetime.
#[must_use]
pub fn generate(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
