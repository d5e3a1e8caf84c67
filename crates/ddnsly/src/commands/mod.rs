//! Command handlers, one module per top-level command.

pub mod clients;
pub mod config_cmd;
pub mod open_cmd;
pub mod stats;

use ddnsly_core::{Client, ClientRegistry};

/// Resolve a client by id (UUID) or by case-insensitive name.
pub fn find_client<'a>(registry: &'a ClientRegistry, needle: &str) -> Option<&'a Client> {
    registry
        .clients()
        .iter()
        .find(|c| c.id.to_string() == needle || c.name.eq_ignore_ascii_case(needle))
}
