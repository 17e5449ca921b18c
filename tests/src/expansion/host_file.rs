use std::io;
use std::path::Path;

use hostexpand_common::error::{ExpandError, SkipReason};
use hostexpand_core::expander::Expander;

use crate::utils::{TempHostFile, bindings};

#[test]
fn host_port_line_only_binds() -> anyhow::Result<()> {
    let file = TempHostFile::new("192.168.1.1:8080\n")?;
    let expansion = Expander::seeded(0).expand("", Some(file.path()), None)?;

    assert!(expansion.hosts.is_empty());
    assert_eq!(bindings(&expansion), vec!["192.168.1.1:8080"]);
    Ok(())
}

#[test]
fn file_hosts_merge_after_inline_hosts() -> anyhow::Result<()> {
    let file = TempHostFile::new(
        "\n\
         10.0.0.1\n\
         \t10.0.0.3-4   \n\
         \n\
         10.0.0.2,10.0.0.8/31\n\
         10.0.1.1-2:443\n",
    )?;
    let expansion = Expander::seeded(0).expand("10.0.0.2", Some(file.path()), None)?;

    assert_eq!(
        expansion.hosts,
        vec!["10.0.0.2", "10.0.0.1", "10.0.0.3", "10.0.0.4", "10.0.0.8", "10.0.0.9"]
    );
    assert_eq!(bindings(&expansion), vec!["10.0.1.1:443", "10.0.1.2:443"]);
    assert_eq!(expansion.default_ports, None);
    Ok(())
}

#[test]
fn colon_in_host_argument_is_not_a_port_when_a_file_is_given() -> anyhow::Result<()> {
    let file = TempHostFile::new("10.0.0.1\n")?;
    let expansion = Expander::seeded(0).expand("10.0.0.7:22", Some(file.path()), None)?;

    // The host argument goes through the normal grammar and fails as a literal.
    assert_eq!(expansion.hosts, vec!["10.0.0.1"]);
    assert_eq!(expansion.default_ports, None);
    assert_eq!(expansion.skipped[0].token, "10.0.0.7:22");
    Ok(())
}

#[test]
fn bound_ports_print_as_numbers() -> anyhow::Result<()> {
    let file = TempHostFile::new("10.0.0.1:08080\n10.0.0.2:+80\n")?;
    let expansion = Expander::seeded(0).expand("", Some(file.path()), None)?;

    assert_eq!(bindings(&expansion), vec!["10.0.0.1:8080", "10.0.0.2:80"]);
    Ok(())
}

#[test]
fn invalid_ports_are_skipped_not_fatal() -> anyhow::Result<()> {
    let file = TempHostFile::new("10.0.0.1:99999\n10.0.0.2:0 \n10.0.0.3\n")?;
    let expansion = Expander::seeded(0).expand("", Some(file.path()), None)?;

    assert_eq!(expansion.hosts, vec!["10.0.0.3"]);
    assert!(expansion.host_ports.is_empty());
    assert_eq!(expansion.skipped.len(), 2);
    assert!(matches!(expansion.skipped[1].reason, SkipReason::InvalidPort(_)));
    Ok(())
}

#[test]
fn exclusion_applies_to_file_hosts() -> anyhow::Result<()> {
    let file = TempHostFile::new("10.0.0.1-4\n")?;
    let expansion = Expander::seeded(0).expand("", Some(file.path()), Some("10.0.0.2-3"))?;

    assert_eq!(expansion.hosts, vec!["10.0.0.1", "10.0.0.4"]);
    Ok(())
}

#[test]
fn empty_file_resolves_nothing() -> anyhow::Result<()> {
    let file = TempHostFile::new("\n   \n")?;
    let result = Expander::seeded(0).expand("", Some(file.path()), None);

    assert!(matches!(result, Err(ExpandError::NoHostsResolved)));
    Ok(())
}

#[test]
fn missing_file_keeps_inline_hosts() {
    let path = Path::new("/nonexistent/hostexpand/hosts.txt");
    let result = Expander::seeded(0).expand("10.0.0.1-2", Some(path), None);

    match result {
        Err(ExpandError::HostFile {
            path: failed,
            partial,
            ..
        }) => {
            assert_eq!(failed, path);
            assert_eq!(partial.hosts, vec!["10.0.0.1", "10.0.0.2"]);
        }
        other => panic!("expected a host file error, got {other:?}"),
    }
}

#[test]
fn read_failure_keeps_lines_read_so_far() -> anyhow::Result<()> {
    let file = TempHostFile::from_bytes(b"10.0.0.3\n10.0.0.4-5\n10.0.1.1:22\n\xff\xfe\n10.0.0.9\n")?;
    let result = Expander::seeded(0).expand("10.0.0.1", Some(file.path()), None);

    match result {
        Err(ExpandError::HostFile {
            path,
            source,
            partial,
        }) => {
            assert_eq!(path, file.path());
            assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            assert_eq!(partial.hosts, vec!["10.0.0.1", "10.0.0.3", "10.0.0.4", "10.0.0.5"]);
            assert_eq!(bindings(&partial), vec!["10.0.1.1:22"]);
            assert!(!partial.hosts.contains(&"10.0.0.9".to_string()));
        }
        other => panic!("expected a host file error, got {other:?}"),
    }
    Ok(())
}
