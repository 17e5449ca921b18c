//! # Hostexpand Common
//!
//! Value types shared by the expansion engine and its front ends.
//!
//! * **[`network`]**: address ranges, port bindings and the expansion result.
//! * **[`error`]**: the errors surfaced to callers and the reasons a token is skipped.
//! * **[`config`]**: runtime options collected by the CLI.

pub mod config;
pub mod error;
pub mod network;
