// ── Domain model ──
//
// The canonical types every consumer (CLI/TUI) depends on. A `Client` is
// only ever constructed by the registry's validated operations; the
// `ClientDraft` is the shape the UI hands in.

pub mod client;
pub mod client_id;
pub mod equipment;

// ── Re-exports ──────────────────────────────────────────────────────

pub use client::{Client, ClientDraft};
pub use client_id::ClientId;
pub use equipment::Equipment;
