//! Static validation rules for candidate clients.
//!
//! All violations are collected into a list — the UI renders every
//! problem at once instead of making the user fix them one by one.

use thiserror::Error;

use crate::model::ClientDraft;

/// A single user-correctable problem with a candidate client.
///
/// The `Display` strings are the exact messages surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("client name is required")]
    NameRequired,

    #[error("DDNS link is required")]
    LinkRequired,

    #[error("DDNS link must be a valid domain")]
    LinkNotADomain,

    #[error("equipment is required")]
    EquipmentRequired,
}

/// Check a candidate against every rule. Returns the empty vec when the
/// candidate is acceptable.
pub fn validate(draft: &ClientDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    let link = draft.ddns_link.trim();
    if link.is_empty() {
        errors.push(ValidationError::LinkRequired);
    } else if !is_valid_domain(link) {
        errors.push(ValidationError::LinkNotADomain);
    }

    if draft.equipment.is_none() {
        errors.push(ValidationError::EquipmentRequired);
    }

    errors
}

/// Loose domain-label grammar: one or more labels separated by `.`, each
/// label 1–63 ASCII alphanumeric-or-hyphen characters, not starting or
/// ending with a hyphen. An `http://` / `https://` prefix is stripped
/// before checking.
///
/// Intentionally NOT a DNS-compliant validator — no TLD list, no
/// DDNS-provider suffix enforcement. Tightening it would reject
/// addresses users have always been able to enter.
pub fn is_valid_domain(link: &str) -> bool {
    let host = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .unwrap_or(link);

    !host.is_empty() && host.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Equipment;
    use pretty_assertions::assert_eq;

    fn draft(name: &str, link: &str, equipment: Option<Equipment>) -> ClientDraft {
        ClientDraft::new(name, link, equipment)
    }

    #[test]
    fn accepts_a_complete_candidate() {
        let errors = validate(&draft(
            "Acme Corp",
            "client1.ddns.net",
            Some(Equipment::Fortigate),
        ));
        assert_eq!(errors, vec![]);
    }

    #[test]
    fn accepts_a_schemed_link() {
        let errors = validate(&draft(
            "Acme Corp",
            "https://client2.ddns.net",
            Some(Equipment::Mikrotik),
        ));
        assert_eq!(errors, vec![]);
    }

    #[test]
    fn empty_name_is_reported() {
        let errors = validate(&draft("", "client1.ddns.net", Some(Equipment::Unifi)));
        assert!(errors.contains(&ValidationError::NameRequired));
    }

    #[test]
    fn whitespace_name_is_reported() {
        let errors = validate(&draft("   ", "client1.ddns.net", Some(Equipment::Unifi)));
        assert!(errors.contains(&ValidationError::NameRequired));
    }

    #[test]
    fn empty_link_reports_required_not_grammar() {
        let errors = validate(&draft("Acme", "  ", Some(Equipment::Pfsense)));
        assert!(errors.contains(&ValidationError::LinkRequired));
        assert!(!errors.contains(&ValidationError::LinkNotADomain));
    }

    #[test]
    fn malformed_link_is_reported() {
        let errors = validate(&draft("Acme", "not a domain!!", Some(Equipment::Pfsense)));
        assert!(errors.contains(&ValidationError::LinkNotADomain));
    }

    #[test]
    fn missing_equipment_is_reported() {
        let errors = validate(&draft("Acme", "client1.ddns.net", None));
        assert_eq!(errors, vec![ValidationError::EquipmentRequired]);
    }

    #[test]
    fn all_violations_are_collected_together() {
        let errors = validate(&draft("", "", None));
        assert_eq!(
            errors,
            vec![
                ValidationError::NameRequired,
                ValidationError::LinkRequired,
                ValidationError::EquipmentRequired,
            ]
        );
    }

    // ── Domain grammar edge cases ────────────────────────────────────

    #[test]
    fn single_label_hosts_are_allowed() {
        assert!(is_valid_domain("localhost"));
        assert!(is_valid_domain("router1"));
    }

    #[test]
    fn hyphens_inside_labels_are_allowed() {
        assert!(is_valid_domain("my-client.ddns.net"));
    }

    #[test]
    fn labels_cannot_start_or_end_with_hyphen() {
        assert!(!is_valid_domain("-client.ddns.net"));
        assert!(!is_valid_domain("client-.ddns.net"));
    }

    #[test]
    fn empty_labels_are_rejected() {
        assert!(!is_valid_domain("client..ddns.net"));
        assert!(!is_valid_domain(".ddns.net"));
        assert!(!is_valid_domain("client1.ddns.net."));
    }

    #[test]
    fn labels_longer_than_63_chars_are_rejected() {
        let long_label = "a".repeat(64);
        assert!(!is_valid_domain(&format!("{long_label}.ddns.net")));
        assert!(is_valid_domain(&format!("{}.ddns.net", "a".repeat(63))));
    }

    #[test]
    fn scheme_is_stripped_before_checking() {
        assert!(is_valid_domain("http://client1.ddns.net"));
        assert!(is_valid_domain("https://client1.ddns.net"));
        // A bare scheme leaves an empty host behind.
        assert!(!is_valid_domain("https://"));
    }

    #[test]
    fn non_ascii_and_punctuation_are_rejected()  {
        assert!(!is_valid_domain("client_1.ddns.net"));
        assert!(!is_valid_domain("clïent.ddns.net"));
        assert!(!is_valid_domain("client1.ddns.net/path"));
    }
}
