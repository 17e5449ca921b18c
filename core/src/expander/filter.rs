//! Deduplication, exclusion and ordering of an expanded host list.

use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Removes repeated hosts, keeping the first occurrence of each.
pub fn dedup(mut hosts: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(hosts.len());
    hosts.retain(|host| seen.insert(host.clone()));
    hosts
}

/// Removes every host found in `excluded`.
///
/// The survivors come back sorted as strings, so `10.0.0.10` lands before
/// `10.0.0.9`. Use [`sort_numeric`] for address order.
pub fn exclude(hosts: Vec<String>, excluded: &[String]) -> Vec<String> {
    let mut remaining: HashSet<String> = hosts.into_iter().collect();
    for host in excluded {
        remaining.remove(host);
    }

    let mut hosts: Vec<String> = remaining.into_iter().collect();
    hosts.sort();
    hosts
}

/// Sorts dotted quads by numeric value, followed by hostnames in string order.
pub fn sort_numeric(hosts: &mut [String]) {
    hosts.sort_by_cached_key(|host| match host.parse::<Ipv4Addr>() {
        Ok(ip) => (false, ip, String::new()),
        Err(_) => (true, Ipv4Addr::UNSPECIFIED, host.clone()),
    });
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
