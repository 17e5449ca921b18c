//! # Hostexpand Core
//!
//! Turns compact host descriptions (`10.0.0.1-20`, `192.168.0.0/16`, `hosts.txt`, ...)
//! into the literal IPv4 addresses they denote. See [`expander::Expander`].

pub mod expander;
