//! Domain model and business logic for the ddnsly workspace.
//!
//! This crate owns everything the UI layers (CLI / TUI) consume:
//!
//! - **[`ClientRegistry`]** — The authoritative, insertion-ordered roster of
//!   client records. All mutations go through validated operations
//!   ([`add`](ClientRegistry::add), [`update`](ClientRegistry::update),
//!   [`remove`](ClientRegistry::remove)); every operation either fully
//!   succeeds or fully aborts with a descriptive error list.
//!
//! - **Validation** ([`validate`]) — The static rules a candidate client must
//!   pass: required name, required DDNS link, domain-label grammar for the
//!   link, required equipment. Violations are collected, never short-circuited.
//!
//! - **Statistics** ([`stats`]) — Derived counts over the roster, recomputed
//!   from scratch on every read. The roster is small and single-threaded, so
//!   there is nothing to cache or invalidate.
//!
//! - **Domain model** ([`model`]) — [`Client`], the candidate shape
//!   [`ClientDraft`], the closed [`Equipment`] enumeration, and the opaque
//!   [`ClientId`] identifier.
//!
//! The registry is deliberately synchronous: state lives for the process
//! lifetime, is mutated only by user-initiated operations, and is never
//! shared across threads.

pub mod error;
pub mod link;
pub mod model;
pub mod registry;
pub mod stats;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::RegistryError;
pub use model::{Client, ClientDraft, ClientId, Equipment};
pub use registry::ClientRegistry;
pub use stats::{EquipmentCount, Statistics};
pub use validate::{ValidationError, validate};
