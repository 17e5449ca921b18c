//! Dash ranges: `10.0.0.1-10.0.0.20` and the last-octet shorthand `10.0.0.1-20`.

use std::net::Ipv4Addr;

use hostexpand_common::error::SkipReason;
use hostexpand_common::network::range::Ipv4Range;
use tracing::info;

/// End parts shorter than this are read as a bare last octet.
const SHORTHAND_MAX_LEN: usize = 4;

/// Parses a token containing `-` into the range it denotes.
///
/// Only the text up to a second `-` is looked at.
pub fn parse(token: &str) -> Result<Ipv4Range, SkipReason> {
    let (start_str, rest) = token.split_once('-').ok_or(SkipReason::MalformedRange)?;
    let end_str = rest.split('-').next().unwrap_or(rest);

    let range = if end_str.len() < SHORTHAND_MAX_LEN {
        parse_shorthand(start_str, end_str)?
    } else {
        parse_full(start_str, end_str)?
    };

    info!("Generated address range {range} ({} addresses)", range.size());
    Ok(range)
}

/// Expands a dash range into its addresses, in increasing order.
pub fn expand(token: &str) -> Result<Vec<String>, SkipReason> {
    parse(token).map(|range| range.to_hosts())
}

/// `a.b.c.d-n` covering `a.b.c.d` up to `a.b.c.n`.
fn parse_shorthand(start_str: &str, end_str: &str) -> Result<Ipv4Range, SkipReason> {
    let start_addr = start_str
        .parse::<Ipv4Addr>()
        .map_err(|_| SkipReason::MalformedRange)?;
    let last_octet = end_str
        .parse::<u8>()
        .map_err(|_| SkipReason::MalformedRange)?;

    let mut end_octets = start_addr.octets();
    end_octets[3] = last_octet;

    Ipv4Range::from_bounds(start_addr.octets(), end_octets)
}

/// `a.b.c.d-e.f.g.h`, each side written out in full.
fn parse_full(start_str: &str, end_str: &str) -> Result<Ipv4Range, SkipReason> {
    let start = parse_octets(start_str)?;
    let end = parse_octets(end_str)?;

    Ipv4Range::from_bounds(start, end)
}

fn parse_octets(s: &str) -> Result<[u8; 4], SkipReason> {
    let octets: Vec<u8> = s
        .split('.')
        .map(|octet| octet.parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| SkipReason::MalformedRange)?;

    octets.try_into().map_err(|_| SkipReason::MalformedRange)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
