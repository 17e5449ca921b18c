//! The host expansion pipeline.
//!
//! A host argument is split on commas, every token is classified
//! ([`classify`]) and handed to the matching expander ([`range`], [`cidr`],
//! [`sampler`]). Host files are read line by line ([`aggregate`]), and the
//! merged list is filtered and deduplicated ([`filter`]).
//!
//! A malformed token never aborts the call: it is logged, recorded in
//! [`Expansion::skipped`] and the remaining tokens are still expanded.

use std::mem;
use std::net::Ipv4Addr;
use std::path::Path;

use hostexpand_common::config::Config;
use hostexpand_common::error::{ExpandError, SkipReason};
use hostexpand_common::network::expansion::Expansion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

pub mod aggregate;
pub mod cidr;
pub mod classify;
pub mod filter;
pub mod range;
pub mod sampler;

use classify::TokenKind;

/// Expands host descriptions into addresses.
///
/// The random source only feeds the /8 sampler. Seed it (see [`Expander::seeded`])
/// when the output has to be reproducible.
pub struct Expander<R = StdRng> {
    rng: R,
}

impl Expander<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(cfg: &Config) -> Self {
        match cfg.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for Expander<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Expander<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Expands a host argument, an optional host file and an optional exclusion list.
    ///
    /// Without a host file, a host argument of the form `host:ports` expands `host`
    /// and reports `ports` through [`Expansion::default_ports`].
    ///
    /// # Errors
    ///
    /// * [`ExpandError::HostFile`] when the host file cannot be opened or read. It
    ///   carries whatever was resolved before the failure.
    /// * [`ExpandError::NoHostsResolved`] when something was asked for but neither
    ///   a host nor a port binding came out of it.
    pub fn expand(
        &mut self,
        hosts: &str,
        host_file: Option<&Path>,
        exclude: Option<&str>,
    ) -> Result<Expansion, ExpandError> {
        let host_file = host_file.filter(|path| !path.as_os_str().is_empty());
        let mut expansion = Expansion::default();
        let mut file_error = None;

        match host_file {
            None if hosts.contains(':') => self.expand_with_default_ports(hosts, &mut expansion),
            _ => {
                self.expand_list(hosts, &mut expansion);

                if let Some(path) = host_file {
                    if let Err(source) = self.read_host_file(path, &mut expansion) {
                        error!("Failed to read host file {}: {source}", path.display());
                        file_error = Some((path.to_path_buf(), source));
                    }
                }
            }
        }

        if let Some(exclude) = exclude.filter(|spec| !spec.is_empty()) {
            self.apply_exclusion(exclude, &mut expansion);
        }

        expansion.hosts = filter::dedup(mem::take(&mut expansion.hosts));
        info!("Final host count: {}", expansion.hosts.len());

        if let Some((path, source)) = file_error {
            return Err(ExpandError::HostFile {
                path,
                source,
                partial: Box::new(expansion),
            });
        }

        if expansion.is_empty() && (!hosts.is_empty() || host_file.is_some()) {
            return Err(ExpandError::NoHostsResolved);
        }

        Ok(expansion)
    }

    /// Expands one comma-free token.
    pub fn expand_token(&mut self, token: &str) -> Result<Vec<String>, SkipReason> {
        match classify::classify(token) {
            TokenKind::PrivateAlias(block) => self.expand_token(block),
            TokenKind::SampledNetwork(base) => sampler::sample(base, &mut self.rng),
            TokenKind::Cidr(block) => cidr::expand(block),
            TokenKind::Hostname(name) => Ok(vec![name.to_string()]),
            TokenKind::Range(span) => range::expand(span),
            TokenKind::Literal(addr) => addr
                .parse::<Ipv4Addr>()
                .map(|_| vec![addr.to_string()])
                .map_err(|_| SkipReason::InvalidAddress),
        }
    }

    fn expand_with_default_ports(&mut self, hosts: &str, into: &mut Expansion) {
        let parts: Vec<&str> = hosts.split(':').collect();
        match parts.as_slice() {
            [host, ports] => {
                self.expand_list(host, into);
                into.default_ports = Some(ports.to_string());
                info!("Parsed host and port pair, default ports set to {ports}");
            }
            _ => aggregate::record_skip(into, hosts, SkipReason::MalformedHostPort),
        }
    }

    fn apply_exclusion(&mut self, exclude: &str, into: &mut Expansion) {
        let mut excluded = Expansion::default();
        self.expand_list(exclude, &mut excluded);
        into.skipped.append(&mut excluded.skipped);

        if excluded.hosts.is_empty() {
            return;
        }

        into.hosts = filter::exclude(mem::take(&mut into.hosts), &excluded.hosts);
        info!("Excluded {} hosts", excluded.hosts.len());
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
