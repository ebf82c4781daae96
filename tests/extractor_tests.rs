use vpn_probe::netinfo::extractor::{
    InterfaceAddress, default_vpn_tokens, find_tunnel_address, is_tunnel_name,
};

// ============================================================================
// Helper listings
// ============================================================================

fn listing_with_tunnel() -> &'static str {
    concat!(
        "1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN group default qlen 1000\n",
        "    inet 127.0.0.1/8 scope host lo\n",
        "       valid_lft forever preferred_lft forever\n",
        "24: wlan0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc mq state UP group default qlen 3000\n",
        "    inet 192.168.1.77/24 brd 192.168.1.255 scope global wlan0\n",
        "       valid_lft forever preferred_lft forever\n",
        "42: tun0: <POINTOPOINT,MULTICAST,NOARP,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UNKNOWN group default qlen 500\n",
        "    inet 10.8.0.2/24 scope global tun0\n",
        "       valid_lft forever preferred_lft forever\n",
    )
}

fn listing_without_tunnel() -> &'static str {
    concat!(
        "1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN\n",
        "    inet 127.0.0.1/8 scope host lo\n",
        "24: wlan0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc mq state UP\n",
        "    inet 192.168.1.77/24 brd 192.168.1.255 scope global wlan0\n",
    )
}

fn tokens() -> Vec<String> {
    default_vpn_tokens()
}

// ============================================================================
// 1. A tunnel interface with an address is found
// ============================================================================

#[test]
fn finds_tunnel_address() {
    let found = find_tunnel_address(listing_with_tunnel(), &tokens());
    assert_eq!(
        found,
        Some(InterfaceAddress {
            iface: "tun0".into(),
            address: "10.8.0.2".into(),
        })
    );
}

// ============================================================================
// 2. Physical interfaces alone yield nothing
// ============================================================================

#[test]
fn physical_interfaces_only() {
    assert_eq!(find_tunnel_address(listing_without_tunnel(), &tokens()), None);
}

// ============================================================================
// 3. The first matching tunnel wins
// ============================================================================

#[test]
fn first_tunnel_wins() {
    let listing = concat!(
        "3: tun0: <UP>\n",
        "    inet 10.8.0.2/24 scope global tun0\n",
        "4: wg0: <UP>\n",
        "    inet 10.9.0.7/32 scope global wg0\n",
    );
    let found = find_tunnel_address(listing, &tokens()).unwrap();
    assert_eq!(found.iface, "tun0");
    assert_eq!(found.address, "10.8.0.2");
}

// ============================================================================
// 4. Addresses before any interface header are ignored
// ============================================================================

#[test]
fn address_without_header_ignored() {
    let listing = "    inet 10.8.0.2/24 scope global tun0\n";
    assert_eq!(find_tunnel_address(listing, &tokens()), None);
}

// ============================================================================
// 5. Interface names match case-insensitively
// ============================================================================

#[test]
fn iface_match_case_insensitive() {
    let listing = concat!("7: TUN0: <UP>\n", "    inet 10.8.0.2/24 scope global tun0\n");
    let found = find_tunnel_address(listing, &tokens()).unwrap();
    assert_eq!(found.iface, "TUN0");
}

// ============================================================================
// 6. A tunnel header without an inet line is skipped over
// ============================================================================

#[test]
fn tunnel_without_address() {
    let listing = concat!(
        "3: tun0: <DOWN>\n",
        "24: wlan0: <UP>\n",
        "    inet 192.168.1.77/24 scope global wlan0\n",
    );
    assert_eq!(find_tunnel_address(listing, &tokens()), None);
}

// ============================================================================
// 7. Addresses stay with the interface that announced them
// ============================================================================

#[test]
fn addresses_stay_with_their_interface() {
    let listing = concat!(
        "24: wlan0: <UP>\n",
        "    inet 192.168.1.77/24 scope global wlan0\n",
        "3: tun0: <DOWN>\n",
    );
    assert_eq!(find_tunnel_address(listing, &tokens()), None);
}

// ============================================================================
// 8. Custom tokens widen the match
// ============================================================================

#[test]
fn custom_tokens() {
    let listing = concat!(
        "9: rmnet_data1: <UP>\n",
        "    inet 10.64.12.3/30 scope global rmnet_data1\n",
    );
    assert_eq!(find_tunnel_address(listing, &tokens()), None);

    let custom = vec!["rmnet".to_string()];
    let found = find_tunnel_address(listing, &custom).unwrap();
    assert_eq!(found.iface, "rmnet_data1");
    assert_eq!(found.address, "10.64.12.3");
}

// ============================================================================
// 9. An inet line without a prefix length does not count
// ============================================================================

#[test]
fn inet_requires_prefix_length() {
    let listing = concat!("3: tun0: <UP>\n", "    inet 10.8.0.2 peer 10.8.0.1\n");
    assert_eq!(find_tunnel_address(listing, &tokens()), None);
}

// ============================================================================
// 10. Empty input yields nothing
// ============================================================================

#[test]
fn empty_listing() {
    assert_eq!(find_tunnel_address("", &tokens()), None);
}

// ============================================================================
// 11. Name matching is substring-based
// ============================================================================

#[test]
fn name_matching_substrings() {
    let tokens = tokens();
    assert!(is_tunnel_name("tun0", &tokens));
    assert!(is_tunnel_name("utun5", &tokens));
    assert!(is_tunnel_name("wg-home", &tokens));
    assert!(is_tunnel_name("ppp0", &tokens));
    assert!(!is_tunnel_name("eth0", &tokens));
    assert!(!is_tunnel_name("wlan0", &tokens));
    assert!(!is_tunnel_name("lo", &tokens));
}

// ============================================================================
// 12. Default tokens cover the common tunnel drivers
// ============================================================================

#[test]
fn default_token_set() {
    let tokens = default_vpn_tokens();
    for expected in ["tun", "tap", "ppp", "vpn", "wg", "utun"] {
        assert!(
            tokens.iter().any(|t| t == expected),
            "missing token '{}'",
            expected
        );
    }
}
