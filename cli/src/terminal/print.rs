//! Terminal output.
//!
//! Results go to stdout, one per line, so they can be piped into other tools.
//! Headers and summaries go through stderr or the log.

use colored::*;
use hostexpand_common::network::expansion::Expansion;
use tracing::{info, warn};
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub fn line(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    eprintln!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    );
}

pub fn summary(expansion: &Expansion, count_only: bool) {
    let hosts: usize = expansion.hosts.len();
    let bindings: usize = expansion.host_ports.len();

    if count_only {
        line(&format!("{hosts} hosts, {bindings} host:port bindings"));
    }

    let unit: &str = if hosts == 1 { "host has" } else { "hosts have" };
    info!(
        "{} {unit} been resolved, {} with explicit ports",
        hosts.to_string().green().bold(),
        bindings.to_string().green().bold()
    );

    if let Some(ports) = &expansion.default_ports {
        info!("Default ports: {}", ports.yellow().bold());
    }

    if !expansion.skipped.is_empty() {
        warn!(
            "{} entries were skipped",
            expansion.skipped.len().to_string().yellow().bold()
        );
    }
}
