use std::collections::HashSet;
use std::net::Ipv4Addr;

use hostexpand_common::error::{ExpandError, HOST_FORMATS, SkipReason};
use hostexpand_common::network::expansion::Expansion;
use hostexpand_core::expander::Expander;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn expand(hosts: &str) -> Result<Expansion, ExpandError> {
    Expander::seeded(0x5eed).expand(hosts, None, None)
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn single_addresses_expand_to_themselves() {
    for host in ["1.2.3.4", "10.0.0.1", "172.16.254.3", "192.168.1.1", "255.255.255.254"] {
        let expansion = expand(host).expect("literal address should resolve");
        assert_eq!(expansion.hosts, vec![host.to_string()]);
    }
}

#[test]
fn cidr_blocks_cover_exactly_their_network() {
    for (block, base, prefix) in [
        ("10.1.2.3/16", Ipv4Addr::new(10, 1, 0, 0), 16u32),
        ("192.168.7.77/20", Ipv4Addr::new(192, 168, 0, 0), 20),
        ("172.20.1.0/24", Ipv4Addr::new(172, 20, 1, 0), 24),
        ("8.8.8.8/30", Ipv4Addr::new(8, 8, 8, 8), 30),
        ("8.8.8.8/32", Ipv4Addr::new(8, 8, 8, 8), 32),
    ] {
        let expansion = expand(block).unwrap();
        let size = 1u32 << (32 - prefix);
        assert_eq!(expansion.hosts.len() as u32, size, "{block}");

        let first = u32::from(base);
        let last = first + (size - 1);
        for host in &expansion.hosts {
            let ip = u32::from(host.parse::<Ipv4Addr>().unwrap());
            assert!((first..=last).contains(&ip), "{host} outside {block}");
        }
    }
}

#[test]
fn slash_eight_is_sampled() {
    let expansion = expand("10.0.0.0/8").unwrap();
    assert_eq!(expansion.hosts.len(), 10 * 65_536);

    let mut subnets = HashSet::new();
    for host in &expansion.hosts {
        let octets = host.parse::<Ipv4Addr>().unwrap().octets();
        assert_eq!(octets[0], 10);
        subnets.insert((octets[1], octets[2]));
    }
    assert_eq!(subnets.len(), 65_536);
}

#[test]
fn slash_eight_with_injected_rng() {
    let mut expander = Expander::with_rng(StdRng::seed_from_u64(3));
    let sampled = expander.expand_token("44.1.1.1/8").unwrap();
    assert_eq!(&sampled[..4], &strings(&["44.0.0.1", "44.0.0.2", "44.0.0.4", "44.0.0.5"])[..]);
    assert_eq!(sampled[9], "44.0.0.254");
}

#[test]
fn full_range_in_increasing_order() {
    let expected = strings(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5"]);
    assert_eq!(expand("10.0.0.1-10.0.0.5").unwrap().hosts, expected);
    assert_eq!(expand("10.0.0.1-5").unwrap().hosts, expected);
}

#[test]
fn inverted_range_resolves_nothing() {
    let mut expander = Expander::seeded(0);
    let skipped = expander.expand_token("10.0.0.5-10.0.0.1").unwrap_err();
    assert_eq!(
        skipped,
        SkipReason::InvertedRange {
            start: Ipv4Addr::new(10, 0, 0, 5),
            end: Ipv4Addr::new(10, 0, 0, 1),
        }
    );
    assert!(matches!(expand("10.0.0.5-10.0.0.1"), Err(ExpandError::NoHostsResolved)));
}

#[test]
fn duplicates_collapse() {
    assert_eq!(expand("192.168.1.1,192.168.1.1").unwrap().hosts, strings(&["192.168.1.1"]));
    assert_eq!(
        expand("10.0.0.1-3,10.0.0.2,10.0.0.0/30").unwrap().hosts,
        strings(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.0"])
    );
}

#[test]
fn exclusion_subtracts() {
    let expansion = Expander::seeded(0)
        .expand("10.0.0.1,10.0.0.2", None, Some("10.0.0.1"))
        .unwrap();
    assert_eq!(expansion.hosts, strings(&["10.0.0.2"]));

    let expansion = Expander::seeded(0)
        .expand("10.0.0.0/24", None, Some("10.0.0.0,10.0.0.255,10.0.0.10-99"))
        .unwrap();
    assert_eq!(expansion.hosts.len(), 256 - 2 - 90);
    assert!(!expansion.hosts.contains(&"10.0.0.50".to_string()));
}

#[test]
fn unresolvable_input_reports_formats() {
    let err = expand("999.999.999.999").unwrap_err();
    assert!(matches!(err, ExpandError::NoHostsResolved));
    assert_eq!(err.to_string(), HOST_FORMATS);
}

#[test]
fn partial_failures_still_resolve() -> anyhow::Result<()> {
    let expansion = expand("10.0.0.1,999.0.0.1,1.2.3.4/40,10.0.0.9-3")?;
    assert_eq!(expansion.hosts, strings(&["10.0.0.1"]));

    let tokens: Vec<&str> = expansion.skipped.iter().map(|s| s.token.as_str()).collect();
    assert_eq!(tokens, vec!["999.0.0.1", "1.2.3.4/40", "10.0.0.9-3"]);
    Ok(())
}

#[test]
fn host_with_port_sets_default_ports() -> anyhow::Result<()> {
    let expansion = expand("192.168.1.1-2:22")?;
    assert_eq!(expansion.hosts, strings(&["192.168.1.1", "192.168.1.2"]));
    assert_eq!(expansion.default_ports.as_deref(), Some("22"));
    Ok(())
}
