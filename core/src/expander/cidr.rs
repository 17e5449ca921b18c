use hostexpand_common::error::SkipReason;
use hostexpand_common::network::range::Ipv4Range;
use pnet::ipnetwork::Ipv4Network;
use tracing::info;

/// Resolves a CIDR token into the range from its network base to its broadcast address.
pub fn resolve(token: &str) -> Result<Ipv4Range, SkipReason> {
    let network = token
        .parse::<Ipv4Network>()
        .map_err(|e| SkipReason::InvalidCidr(e.to_string()))?;

    let cidr_range = Ipv4Range::from(network);
    info!(
        "Resolved CIDR {token} to range {cidr_range} ({} addresses)",
        cidr_range.size()
    );

    Ok(cidr_range)
}

pub fn expand(token: &str) -> Result<Vec<String>, SkipReason> {
    resolve(token).map(|range| range.to_hosts())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
