//! Modal dialog stack.
//!
//! DESIGN
//! ======
//! The stack is a `Vec<ModalConfig>` in opening order; the last element is
//! the frontmost dialog. The active modal is read off the top of the stack
//! and never stored separately. Dialogs are a closed enum of the dashboard's
//! modal kinds with typed payloads; `Custom` carries free-form props for
//! one-off dialogs.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id;
use crate::scroll::{PageScrollLock, ScrollLock};

// =============================================================================
// MODAL KIND
// =============================================================================

/// Which dialog to render, with the props that dialog needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalKind {
    /// Yes/no prompt before an action.
    Confirm {
        title: String,
        message: String,
        confirm_label: String,
        /// Render the confirm button in the danger style.
        destructive: bool,
    },
    /// Informational message with a single dismiss button.
    Alert { title: String, message: String },
    /// Create (`None`) or edit a user account.
    UserEditor { user_id: Option<String> },
    /// Create (`None`) or edit a role and its permissions.
    RoleEditor { role_id: Option<String> },
    /// Create (`None`) or edit a scheduled task.
    TaskEditor { task_id: Option<String> },
    /// Two-factor enrollment flow for a user.
    TwoFactorSetup { user_id: String },
    /// Any other dialog, addressed by name.
    Custom { name: String, props: Map<String, Value> },
}

impl ModalKind {
    /// Short stable label, used in logs.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Confirm { .. } => "confirm",
            Self::Alert { .. } => "alert",
            Self::UserEditor { .. } => "user_editor",
            Self::RoleEditor { .. } => "role_editor",
            Self::TaskEditor { .. } => "task_editor",
            Self::TwoFactorSetup { .. } => "two_factor_setup",
            Self::Custom { name, .. } => name.as_str(),
        }
    }
}

// =============================================================================
// OPTIONS / CONFIG
// =============================================================================

/// Per-modal behavior flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalOptions {
    pub close_on_overlay_click: bool,
    pub close_on_escape: bool,
    /// Lock page scrolling while this modal is open.
    pub prevent_scroll: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            close_on_overlay_click: true,
            close_on_escape: true,
            prevent_scroll: true,
        }
    }
}

/// One open modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModalConfig {
    pub id: String,
    #[serde(flatten)]
    pub kind: ModalKind,
    pub options: ModalOptions,
}

// =============================================================================
// MODAL STORE
// =============================================================================

/// Stack of open modals plus the scroll-lock side effect.
#[derive(Clone)]
pub struct ModalStore {
    modals: Vec<ModalConfig>,
    scroll: Arc<dyn ScrollLock>,
}

impl fmt::Debug for ModalStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalStore")
            .field("modals", &self.modals)
            .finish_non_exhaustive()
    }
}

impl Default for ModalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStore {
    /// Empty stack that locks the page body.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scroll_lock(Arc::new(PageScrollLock))
    }

    #[must_use]
    pub fn with_scroll_lock(scroll: Arc<dyn ScrollLock>) -> Self {
        Self { modals: Vec::new(), scroll }
    }

    /// Push a modal with default options and return its id.
    pub fn open_modal(&mut self, kind: ModalKind) -> String {
        self.open_modal_with(kind, ModalOptions::default())
    }

    /// Push a modal on top of the stack and return its id.
    pub fn open_modal_with(&mut self, kind: ModalKind, options: ModalOptions) -> String {
        let id = id::generate(id::MODAL_PREFIX);
        tracing::debug!(modal_id = %id, kind = kind.label(), depth = self.modals.len() + 1, "modal opened");
        if options.prevent_scroll {
            self.scroll.lock();
        }
        self.modals.push(ModalConfig { id: id.clone(), kind, options });
        id
    }

    /// Remove the modal with `id`. Unknown ids are ignored.
    pub fn close_modal(&mut self, id: &str) {
        let Some(index) = self.modals.iter().position(|m| m.id == id) else {
            tracing::trace!(modal_id = %id, "close ignored for unknown modal");
            return;
        };
        self.modals.remove(index);
        tracing::debug!(modal_id = %id, depth = self.modals.len(), "modal closed");
        if self.modals.is_empty() {
            self.scroll.unlock();
        }
    }

    /// Remove the frontmost modal, if any.
    pub fn close_top_modal(&mut self) {
        if let Some(id) = self.active_modal_id().map(str::to_owned) {
            self.close_modal(&id);
        }
    }

    /// Remove every modal and unlock scrolling.
    pub fn close_all_modals(&mut self) {
        if !self.modals.is_empty() {
            tracing::debug!(count = self.modals.len(), "all modals closed");
        }
        self.modals.clear();
        self.scroll.unlock();
    }

    /// Escape key handler: closes the top modal when it allows it.
    pub fn dismiss_on_escape(&mut self) -> bool {
        let closable = self.active_modal().is_some_and(|top| top.options.close_on_escape);
        if closable {
            self.close_top_modal();
        }
        closable
    }

    /// Backdrop click handler. Only the frontmost modal's overlay is clickable.
    pub fn dismiss_on_overlay_click(&mut self, id: &str) -> bool {
        let closable = self
            .active_modal()
            .is_some_and(|top| top.id == id && top.options.close_on_overlay_click);
        if closable {
            self.close_modal(id);
        }
        closable
    }

    #[must_use]
    pub fn is_modal_open(&self, id: &str) -> bool {
        self.modals.iter().any(|m| m.id == id)
    }

    #[must_use]
    pub fn modal_count(&self) -> usize {
        self.modals.len()
    }

    /// Id of the frontmost modal, `None` when the stack is empty.
    #[must_use]
    pub fn active_modal_id(&self) -> Option<&str> {
        self.modals.last().map(|m| m.id.as_str())
    }

    #[must_use]
    pub fn active_modal(&self) -> Option<&ModalConfig> {
        self.modals.last()
    }

    #[must_use]
    pub fn modal(&self, id: &str) -> Option<&ModalConfig> {
        self.modals.iter().find(|m| m.id == id)
    }

    /// Open modals, bottom of the stack first.
    #[must_use]
    pub fn modals(&self) -> &[ModalConfig] {
        &self.modals
    }
}
