//! The client registry — authoritative, insertion-ordered roster with
//! validated mutations.
//!
//! Every operation is synchronous and atomic: it either fully applies or
//! leaves the roster untouched and hands back the reasons. Reads hand out
//! slices in insertion order.

use tracing::debug;

use crate::error::RegistryError;
use crate::model::{Client, ClientDraft, ClientId};
use crate::stats::Statistics;
use crate::validate::validate;

/// In-memory roster of client records.
///
/// Insertion order is preserved: `add` appends, `update` replaces in
/// place, `remove` closes the gap. State lives for the process lifetime
/// and is never persisted.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate without touching the roster. Empty vec means
    /// the candidate would be accepted.
    pub fn validate(draft: &ClientDraft) -> Vec<crate::validate::ValidationError> {
        validate(draft)
    }

    /// Validate and append a new client.
    ///
    /// On success the stored record carries a freshly generated unique id
    /// and trimmed name/link. On failure the roster is unchanged and every
    /// violation is returned.
    pub fn add(&mut self, draft: &ClientDraft) -> Result<&Client, RegistryError> {
        let client = build_client(ClientId::generate(), draft)?;
        debug!(id = %client.id, name = %client.name, "client added");
        self.clients.push(client);
        let idx = self.clients.len() - 1;
        Ok(&self.clients[idx])
    }

    /// Validate and replace an existing client wholesale, preserving its
    /// id and position.
    ///
    /// Returns `NotFound` for a stale id — callers treat that as a no-op,
    /// since the UI only ever targets live selections.
    pub fn update(&mut self, id: ClientId, draft: &ClientDraft) -> Result<&Client, RegistryError> {
        let idx = self
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(RegistryError::NotFound { id })?;

        let client = build_client(id, draft)?;
        debug!(id = %id, name = %client.name, "client updated");
        self.clients[idx] = client;
        Ok(&self.clients[idx])
    }

    /// Remove a client unconditionally, returning the removed record.
    ///
    /// `None` when the id is absent. The two-step confirm/commit protocol
    /// around deletion is a UI concern — the registry only commits.
    pub fn remove(&mut self, id: ClientId) -> Option<Client> {
        let idx = self.clients.iter().position(|c| c.id == id)?;
        let removed = self.clients.remove(idx);
        debug!(id = %id, name = %removed.name, "client removed");
        Some(removed)
    }

    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// The roster in insertion order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Derived statistics, recomputed on every call.
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.clients)
    }
}

/// Validate a draft and construct the record that would be stored.
///
/// Equipment is guaranteed present when the violation list is empty, so
/// the match arms cover every case without unwrapping.
fn build_client(id: ClientId, draft: &ClientDraft) -> Result<Client, RegistryError> {
    let errors = validate(draft);
    match draft.equipment {
        Some(equipment) if errors.is_empty() => Ok(Client {
            id,
            name: draft.name.trim().to_owned(),
            ddns_link: draft.ddns_link.trim().to_owned(),
            equipment,
        }),
        _ => Err(RegistryError::Invalid(errors)),
    }
}
