//! Kizami CLI library
//!
//! This library provides the command-line interface for the kizami
//! document preprocessing system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
