//! DDNS link normalization for the "open in browser" action.

/// Prefix `https://` when the link carries no scheme; schemed links pass
/// through untouched. The stored link is already trimmed, but inputs from
/// other sources are trimmed here too.
pub fn normalize(link: &str) -> String {
    let link = link.trim();
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_owned()
    } else {
        format!("https://{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_domains_get_https() {
        assert_eq!(normalize("client1.ddns.net"), "https://client1.ddns.net");
    }

    #[test]
    fn schemed_links_are_untouched() {
        assert_eq!(
            normalize("https://client2.ddns.net"),
            "https://client2.ddns.net"
        );
        assert_eq!(normalize("http://client2.ddns.net"), "http://client2.ddns.net");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize("  client1.ddns.net "), "https://client1.ddns.net");
    }
}
