use regex::Regex;

/// An interface name paired with one of its IPv4 addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub iface: String,
    pub address: String,
}

/// Pick the first tunnel-looking address out of an `ip -4 addr show`
/// listing.
///
/// Scans top to bottom, tracking the interface announced by the last
/// header line (`<index>: <name>: ...`). The first `inet a.b.c.d/len`
/// line under an interface whose lower-cased name contains any of the
/// given tokens wins and scanning stops there. Address lines seen before
/// any header are ignored. Returns None when nothing matches.
pub fn find_tunnel_address(listing: &str, vpn_tokens: &[String]) -> Option<InterfaceAddress> {
    let header_re = Regex::new(r"^\d+:\s+([^:]+):").unwrap();
    let inet_re = Regex::new(r"inet\s+([0-9.]+)/\d+").unwrap();

    let mut current_iface: Option<&str> = None;

    for raw in listing.lines() {
        let line = raw.trim();

        if let Some(caps) = header_re.captures(line) {
            if let Some(name) = caps.get(1) {
                current_iface = Some(name.as_str());
            }
            continue;
        }

        let address = match inet_re.captures(line).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => continue,
        };

        if let Some(iface) = current_iface {
            if is_tunnel_name(iface, vpn_tokens) {
                return Some(InterfaceAddress {
                    iface: iface.to_string(),
                    address: address.to_string(),
                });
            }
        }
    }

    None
}

/// Case-insensitive substring match against the tunnel naming tokens.
pub fn is_tunnel_name(name: &str, vpn_tokens: &[String]) -> bool {
    let lower = name.to_lowercase();
    vpn_tokens.iter().any(|t| lower.contains(&t.to_lowercase()))
}

/// Interface name fragments conventionally used by tunnel drivers.
pub fn default_vpn_tokens() -> Vec<String> {
    ["tun", "tap", "ppp", "vpn", "wg", "utun"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
