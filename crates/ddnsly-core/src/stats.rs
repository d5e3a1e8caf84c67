//! Derived roster statistics.
//!
//! Recomputed from the current roster on every read — the collection is
//! small and single-threaded, so there is no caching and nothing to
//! invalidate.

use serde::Serialize;

use crate::model::{Client, Equipment};

/// Count of records carrying one equipment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentCount {
    pub equipment: Equipment,
    pub count: usize,
}

/// Snapshot of the roster's derived numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Total number of client records.
    pub total_clients: usize,
    /// Number of distinct equipment values present.
    pub unique_equipments: usize,
    /// Per-equipment counts in the fixed enumeration order
    /// (fortigate, mikrotik, pfsense, unifi); zero-count variants omitted.
    pub equipment_distribution: Vec<EquipmentCount>,
}

impl Statistics {
    /// Compute statistics over a roster snapshot.
    pub fn compute(clients: &[Client]) -> Self {
        let equipment_distribution: Vec<EquipmentCount> = Equipment::ALL
            .into_iter()
            .filter_map(|equipment| {
                let count = clients.iter().filter(|c| c.equipment == equipment).count();
                (count > 0).then_some(EquipmentCount { equipment, count })
            })
            .collect();

        Self {
            total_clients: clients.len(),
            unique_equipments: equipment_distribution.len(),
            equipment_distribution,
        }
    }
}
