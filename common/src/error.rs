//! # Expansion Errors
//!
//! Two tiers of failure exist:
//! * [`SkipReason`]: one token could not be expanded. It is logged and recorded,
//!   and the remaining tokens are still processed.
//! * [`ExpandError`]: the whole call failed and the caller must be told.

use std::io;
use std::net::Ipv4Addr;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::network::expansion::Expansion;

/// Reference of every accepted host form, shown when nothing could be resolved.
pub const HOST_FORMATS: &str = "no hosts could be resolved\n\
supported formats:\n\
192.168.1.1                   (single address)\n\
192.168.1.1/8                 (/8 network, sampled)\n\
192.168.1.1/16                (/16 network)\n\
192.168.1.1/24                (/24 network)\n\
192.168.1.1,192.168.1.2       (address list)\n\
192.168.1.1-192.168.255.255   (address range)\n\
192.168.1.1-255               (last octet shorthand range)\n\
192 | 172 | 10                (private network aliases)\n\
example.com                   (hostname, passed through)\n\
192.168.1.1:8080              (host with default ports)\n\
file: one of the above per line, optionally suffixed with :port";

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("{}", HOST_FORMATS)]
    NoHostsResolved,

    /// The host file could not be opened or was only partially read.
    ///
    /// `partial` holds everything resolved before the failure.
    #[error("failed to read host file {}: {source}", path.display())]
    HostFile {
        path: PathBuf,
        #[source]
        source: io::Error,
        partial: Box<Expansion>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("invalid IPv4 address")]
    InvalidAddress,

    #[error("invalid CIDR block: {0}")]
    InvalidCidr(String),

    #[error("malformed address range")]
    MalformedRange,

    #[error("range start {start} is above range end {end}")]
    InvertedRange { start: Ipv4Addr, end: Ipv4Addr },

    #[error("expected a single ':' between host and ports")]
    MalformedHostPort,

    #[error("invalid port: {0}")]
    InvalidPort(#[source] PortError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("'{text}' is not a number")]
    NotANumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{0} is outside 1-65535")]
    OutOfRange(u64),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
