//! Command implementations for the CLI
//!
//! - start: run the HTTP server
//! - test: check configuration and catalog
//! - config: configuration display and validation
//! - catalog: print the price table
//! - estimate: compute a quote from the command line

pub mod catalog;
pub mod config;
pub mod estimate;
pub mod start;
