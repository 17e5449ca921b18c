//! End-to-end tests driving `Expander::expand` the way the CLI does.

#[cfg(test)]
mod utils;
