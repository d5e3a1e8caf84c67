// ── Equipment enumeration ──

use serde::{Deserialize, Serialize};

/// The category of network device behind a client's DDNS link.
///
/// A closed enumeration: exactly these four values are ever stored. There
/// is no default or "unknown" variant — a candidate without an equipment
/// selection fails validation instead.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Equipment {
    Fortigate,
    Mikrotik,
    Pfsense,
    Unifi,
}

impl Equipment {
    /// All variants in the fixed enumeration order used for statistics.
    pub const ALL: [Equipment; 4] = [
        Self::Fortigate,
        Self::Mikrotik,
        Self::Pfsense,
        Self::Unifi,
    ];

    /// Vendor-cased label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fortigate => "Fortigate",
            Self::Mikrotik => "Mikrotik",
            Self::Pfsense => "pfSense",
            Self::Unifi => "UniFi",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_round_trips_through_display() {
        for equipment in Equipment::ALL {
            let parsed = Equipment::from_str(&equipment.to_string()).unwrap();
            assert_eq!(parsed, equipment);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            Equipment::from_str("Fortigate").unwrap(),
            Equipment::Fortigate
        );
        assert_eq!(Equipment::from_str("UNIFI").unwrap(), Equipment::Unifi);
    }

    #[test]
    fn parse_rejects_unknown_vendor() {
        assert!(Equipment::from_str("cisco").is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Equipment::Pfsense).unwrap();
        assert_eq!(json, "\"pfsense\"");
    }
}
