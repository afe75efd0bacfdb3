//! `flora-shell`
//!
//! **Responsibility:** text front-end for the storefront.
//!
//! Reads one command per line, dispatches it to a [`flora_storefront::Storefront`]
//! session and re-renders the affected view. All state is in memory and ends with
//! the process.

pub mod command;
pub mod config;
pub mod render;
pub mod repl;

pub use command::{Command, CommandParseError};
pub use config::{ConfigError, ShellConfig};
pub use repl::run;
