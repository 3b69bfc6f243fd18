//! Page scroll lock applied while modals are open.
//!
//! TRADE-OFFS
//! ==========
//! Locking is best-effort browser-only behavior: without the `hydrate`
//! feature (SSR, native tests) [`PageScrollLock`] does nothing.

/// Side effect that disables and re-enables page scrolling.
pub trait ScrollLock: Send + Sync {
    /// Disable page scrolling. Calling it while already locked is harmless.
    fn lock(&self);
    /// Re-enable page scrolling. Calling it while unlocked is harmless.
    fn unlock(&self);
}

/// Toggles `overflow: hidden` on `document.body`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageScrollLock;

impl ScrollLock for PageScrollLock {
    fn lock(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", "hidden");
            }
        }
    }

    fn unlock(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().remove_property("overflow");
            }
        }
    }
}
