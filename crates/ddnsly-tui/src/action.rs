//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;

use ddnsly_core::{Client, ClientDraft, ClientId, Statistics};

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Pending delete confirmation — selecting a record for deletion is
/// distinct from committing the removal.
#[derive(Debug, Clone)]
pub struct ConfirmRemove {
    pub id: ClientId,
    pub name: String,
    pub ddns_link: String,
}

impl fmt::Display for ConfirmRemove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delete {}? This cannot be undone.", self.name)
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Roster snapshots (from the registry, after every mutation) ─
    RosterUpdated {
        clients: Vec<Client>,
        stats: Statistics,
    },

    // ── Forms ──────────────────────────────────────────────────────
    OpenAddForm,
    OpenEditForm(ClientId),
    SubmitAdd(ClientDraft),
    SubmitEdit(ClientId, ClientDraft),
    CloseForm,

    // ── Deletion (two-step confirm/commit) ─────────────────────────
    RequestRemove(ClientId),
    ShowConfirm(ConfirmRemove),
    ConfirmYes,
    ConfirmNo,

    // ── External actions ───────────────────────────────────────────
    OpenLink(ClientId),

    // ── Help ───────────────────────────────────────────────────────
    ToggleHelp,

    // ── Notifications ──────────────────────────────────────────────
    Notify(Notification),
    DismissNotification,
}
