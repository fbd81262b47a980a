//! Host allowlist matching.
//!
//! Entries are classified at match time, not parse time: the `localhost`
//! keyword, a CIDR network (contains `/`), an exact IP literal, or an opaque
//! hostname compared verbatim. Nothing caches the classification; it is
//! re-derived per comparison over the immutable config snapshot.

use std::net::IpAddr;

use ipnet::IpNet;

/// Peer strings accepted for the `localhost` keyword.
const LOCALHOST_ALIASES: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// True when `client_ip` matches at least one allowlist entry.
///
/// A client that does not parse as an IP address falls back to literal
/// string comparison against every entry (the transport may report a non-IP
/// peer identifier). An empty list never matches anything. Mixed-family
/// comparisons (IPv4 client against an IPv6 entry and vice versa) never
/// match outside the localhost alias set.
pub fn host_matches(client_ip: &str, allowed_hosts: &[String]) -> bool {
    let Ok(client_addr) = client_ip.parse::<IpAddr>() else {
        return allowed_hosts.iter().any(|entry| entry == client_ip);
    };

    allowed_hosts
        .iter()
        .any(|entry| entry_matches(entry, client_ip, client_addr))
}

fn entry_matches(entry: &str, raw: &str, addr: IpAddr) -> bool {
    if entry.eq_ignore_ascii_case("localhost") {
        let canonical = addr.to_string();
        return LOCALHOST_ALIASES.contains(&raw)
            || LOCALHOST_ALIASES.contains(&canonical.as_str());
    }

    if entry.contains('/') {
        return match entry.parse::<IpNet>() {
            // Containment is against the masked network, so entries with
            // host bits set ("192.168.1.1/24") are tolerated.
            Ok(net) => net.contains(&addr),
            // A malformed network must not abort the scan; it can still
            // match verbatim.
            Err(_) => entry == raw,
        };
    }

    match entry.parse::<IpAddr>() {
        Ok(allowed) => allowed == addr,
        Err(_) => entry == raw,
    }
}
