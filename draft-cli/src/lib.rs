//! Command line front end for draft detection, import and listing.
//!
//! The `drafts` binary is a thin wrapper over [`cli::run`]; commands write to
//! any `Write` so they can be driven from tests.

pub mod cli;
pub mod commands;
pub mod fetch;
pub mod logging;
