// ── Client domain types ──

use serde::{Deserialize, Serialize};

use super::client_id::ClientId;
use super::equipment::Equipment;

/// The canonical client record.
///
/// Only the registry constructs these, and only through its validated
/// operations — so a `Client` always carries a trimmed, non-empty name,
/// a trimmed link that passed the domain grammar, and one of the four
/// known equipment values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub ddns_link: String,
    pub equipment: Equipment,
}

/// The candidate shape accepted by `validate` / `add` / `update`.
///
/// Mirrors a half-filled form: free text for name and link, and an
/// equipment that may not have been selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub ddns_link: String,
    pub equipment: Option<Equipment>,
}

impl ClientDraft {
    pub fn new(
        name: impl Into<String>,
        ddns_link: impl Into<String>,
        equipment: Option<Equipment>,
    ) -> Self {
        Self {
            name: name.into(),
            ddns_link: ddns_link.into(),
            equipment,
        }
    }
}

impl From<&Client> for ClientDraft {
    /// Pre-fill a draft from an existing record (the edit-form case).
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            ddns_link: client.ddns_link.clone(),
            equipment: Some(client.equipment),
        }
    }
}
