//! # IPv4 Range Model
//!
//! A continuous, inclusive range of IPv4 addresses.
//!
//! Every range form the expander accepts (`1.2.3.4-1.2.3.9`, `1.2.3.4-9` and CIDR
//! blocks) is reduced to an [`Ipv4Range`] before enumeration, so ordering checks
//! and iteration share one numeric representation.

use std::fmt;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::SkipReason;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Builds a range from two sets of octets, requiring every start octet to be
    /// lower than or equal to the matching end octet.
    pub fn from_bounds(start: [u8; 4], end: [u8; 4]) -> Result<Self, SkipReason> {
        let start_addr = Ipv4Addr::from(start);
        let end_addr = Ipv4Addr::from(end);

        if start.iter().zip(end.iter()).any(|(s, e)| s > e) {
            return Err(SkipReason::InvertedRange {
                start: start_addr,
                end: end_addr,
            });
        }

        Ok(Self::new(start_addr, end_addr))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses covered, zero when start is above end.
    pub fn size(&self) -> u64 {
        let start = u64::from(u32::from(self.start_addr));
        let end = u64::from(u32::from(self.end_addr));
        (end + 1).saturating_sub(start)
    }

    /// Renders every address of the range in dotted-quad form.
    pub fn to_hosts(&self) -> Vec<String> {
        self.iter().map(|ip| ip.to_string()).collect()
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_addr, self.end_addr)
    }
}

/// The range from a network's base to its broadcast address (e.g. 192.168.1.0/24).
impl From<Ipv4Network> for Ipv4Range {
    fn from(network: Ipv4Network) -> Self {
        Self::new(network.network(), network.broadcast())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
