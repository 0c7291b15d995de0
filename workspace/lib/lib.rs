//! Shared plumbing for the binaries in this package: console tables,
//! command-line options, and log setup.

pub mod cli;
pub mod logging;
pub mod table;
