//! Leptos context wiring for the stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` component calls [`provide_stores`] once; any descendant
//! component fetches the same signals with [`use_modal_store`] /
//! [`use_realtime_store`] and mutates them with `RwSignal::update`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::config::StoreConfig;
use crate::modal::ModalStore;
use crate::realtime::RealtimeStore;

/// Create both stores and register them in the current reactive owner.
pub fn provide_stores(config: StoreConfig) -> (RwSignal<ModalStore>, RwSignal<RealtimeStore>) {
    let modals = RwSignal::new(ModalStore::new());
    let realtime = RwSignal::new(RealtimeStore::new(config));

    provide_context(modals);
    provide_context(realtime);

    (modals, realtime)
}

/// Modal stack provided by an ancestor. Panics outside [`provide_stores`].
pub fn use_modal_store() -> RwSignal<ModalStore> {
    expect_context::<RwSignal<ModalStore>>()
}

/// Realtime store provided by an ancestor. Panics outside [`provide_stores`].
pub fn use_realtime_store() -> RwSignal<RealtimeStore> {
    expect_context::<RwSignal<RealtimeStore>>()
}
