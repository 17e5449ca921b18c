//! # Expansion Result
//!
//! What one expansion call hands back to its caller: the plain address list,
//! the port bindings read from a host file, the default ports taken from a
//! `host:port` argument and a record of every token that had to be skipped.

use std::fmt;

use crate::error::SkipReason;
use crate::network::port::HostPort;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Deduplicated addresses (and pass-through hostnames).
    pub hosts: Vec<String>,
    /// `address:port` bindings from `host:port` lines of a host file.
    pub host_ports: Vec<HostPort>,
    /// Port text following the `:` of a `host:port` host argument.
    ///
    /// Kept verbatim since it may name several ports, e.g. `80,443`.
    pub default_ports: Option<String>,
    pub skipped: Vec<Skipped>,
}

impl Expansion {
    /// True when neither plain hosts nor port bindings were produced.
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.host_ports.is_empty()
    }
}

/// A token that contributed nothing, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub token: String,
    pub reason: SkipReason,
}

impl Skipped {
    pub fn new(token: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            token: token.into(),
            reason,
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.reason)
    }
}
