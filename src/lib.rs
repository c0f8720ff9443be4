//! Test harness for the U compiler toolchain.
//!
//! Discovers `.u` test sources, drives the external compiler on each one,
//! runs the produced artifact, and classifies what happened into a closed
//! outcome taxonomy, reported one colored line per case.

pub mod cli;
pub mod compile;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod execute;
pub mod outcome;
pub mod process;
pub mod report;

pub use crate::config::HarnessConfig;
pub use crate::errors::HarnessError;
pub use crate::outcome::Outcome;
