//! Comma lists and host files.
//!
//! Host files hold one entry per line, in any of the forms a host argument
//! accepts. A line with a single `:` binds every address it expands to the port
//! after the colon:
//!
//! ```text
//! 192.168.1.0/30
//! 10.0.0.1-5
//! 172.16.0.10:8080
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hostexpand_common::error::SkipReason;
use hostexpand_common::network::expansion::{Expansion, Skipped};
use hostexpand_common::network::port::{HostPort, PortSpec};
use rand::Rng;
use tracing::{debug, error, info, warn};

use super::Expander;

impl<R: Rng> Expander<R> {
    /// Expands every comma separated token of `list` into `into`, in order.
    pub fn expand_list(&mut self, list: &str, into: &mut Expansion) {
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match self.expand_token(token) {
                Ok(hosts) => into.hosts.extend(hosts),
                Err(reason) => record_skip(into, token, reason),
            }
        }
    }

    /// Reads a host file into `into`, returning how many plain hosts it added.
    pub fn read_host_file(&mut self, path: &Path, into: &mut Expansion) -> io::Result<usize> {
        let file = File::open(path)?;
        let added = self.read_host_lines(BufReader::new(file), into)?;
        info!("Loaded {added} additional hosts from {}", path.display());
        Ok(added)
    }

    /// Reads host entries line by line.
    ///
    /// Lines read before an I/O error stay in `into`.
    pub fn read_host_lines<B: BufRead>(&mut self, reader: B, into: &mut Expansion) -> io::Result<usize> {
        let before = into.hosts.len();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match split_host_port(line) {
                Some((host, port)) => self.bind_port(line, host, port, into),
                None => {
                    self.expand_list(line, into);
                    debug!("Parsed host line: {line}");
                }
            }
        }

        Ok(into.hosts.len() - before)
    }

    fn bind_port(&mut self, line: &str, host: &str, port_text: &str, into: &mut Expansion) {
        let port_text = port_text.split(' ').next().unwrap_or(port_text);
        let port = match port_text.parse::<PortSpec>() {
            Ok(port) => port,
            Err(e) => return record_skip(into, line, SkipReason::InvalidPort(e)),
        };

        let mut bound = Expansion::default();
        self.expand_list(host, &mut bound);

        into.host_ports
            .extend(bound.hosts.into_iter().map(|host| HostPort::new(host, port)));
        into.skipped.append(&mut bound.skipped);
        info!("Parsed host and port binding: {line}");
    }
}

/// Splits `host:port` lines, leaving anything without exactly one `:` alone.
fn split_host_port(line: &str) -> Option<(&str, &str)> {
    if line.matches(':').count() != 1 {
        return None;
    }
    line.split_once(':')
}

/// Logs a token that expanded to nothing and keeps it for the caller.
pub(crate) fn record_skip(into: &mut Expansion, token: &str, reason: SkipReason) {
    let skipped = Skipped::new(token, reason);
    match skipped.reason {
        SkipReason::InvalidPort(_) => warn!("Ignoring entry with invalid port, {skipped}"),
        _ => error!("Skipping {skipped}"),
    }
    into.skipped.push(skipped);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
