//! LinkedIn Relay Library
//!
//! This library implements a small HTTP relay in front of the LinkedIn API. It
//! runs the three-legged OAuth 2.0 authorization-code exchange, keeps the
//! resulting bearer token in memory and in a flat `.env` style file, and
//! forwards authenticated profile lookups and comment creation upstream.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local relay server
//! - `cli` - Command-line interface implementations
//! - `config` - Persistent `KEY=VALUE` store and resolved settings
//! - `error` - Error kinds shared by the relay core
//! - `linkedin` - OAuth handshake and LinkedIn API client
//! - `management` - Token holder and OAuth state ledger
//! - `server` - Router assembly and listener
//! - `types` - Data structures and upstream wire shapes
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use linkedin_relay::{config::ConfigStore, management::TokenHolder};
//!
//! #[tokio::main]
//! async fn main() -> linkedin_relay::Res<()> {
//!     let store = Arc::new(ConfigStore::load(ConfigStore::default_path()).await);
//!     let holder = Arc::new(TokenHolder::from_store(&store));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod linkedin;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the binary edge (server startup, CLI plumbing) where any error is
/// reported and ends the process. The relay core returns
/// [`error::RelayError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup failures in the binary. Request-handling
/// code must never call it; the relay keeps serving on every core error.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for failures the relay swallows on purpose: config file I/O and the
/// best-effort profile lookup after a code exchange.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
