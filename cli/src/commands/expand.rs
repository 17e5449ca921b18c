use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use hostexpand_common::config::Config;
use hostexpand_common::error::ExpandError;
use hostexpand_common::network::expansion::Expansion;
use hostexpand_core::expander::{Expander, filter};

use crate::terminal::print;

#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Hosts to expand, e.g. 192.168.1.1-20,10.0.0.0/24 or 192.168.1.1:80
    #[arg(required_unless_present = "file")]
    pub hosts: Option<String>,

    /// File with one host entry per line, optionally suffixed with :port
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Hosts to leave out of the result, in the same formats
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Seed for /8 sampling, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sort addresses numerically
    #[arg(long)]
    pub numeric: bool,

    /// Only print how many hosts were resolved
    #[arg(short, long)]
    pub count: bool,
}

pub fn expand(args: ExpandArgs, cfg: &Config) -> anyhow::Result<()> {
    let mut expander = Expander::from_config(cfg);
    let hosts = args.hosts.as_deref().unwrap_or_default();

    let result = expander.expand(hosts, args.file.as_deref(), args.exclude.as_deref());
    let expansion = match result {
        Ok(expansion) => expansion,
        Err(ExpandError::HostFile {
            path,
            source,
            partial,
        }) => {
            report(*partial, args.count, cfg);
            return Err(source).with_context(|| format!("reading host file {}", path.display()));
        }
        Err(e) => return Err(e.into()),
    };

    report(expansion, args.count, cfg);
    Ok(())
}

fn report(mut expansion: Expansion, count_only: bool, cfg: &Config) {
    if cfg.sort_numeric {
        filter::sort_numeric(&mut expansion.hosts);
    }

    if !count_only {
        for host in &expansion.hosts {
            print::line(host);
        }
        for binding in &expansion.host_ports {
            print::line(&binding.to_string());
        }
    }

    print::summary(&expansion, count_only);
}
