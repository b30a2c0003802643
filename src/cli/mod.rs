//! # CLI Module
//!
//! Command implementations behind the `linkedin-relay` binary.
//!
//! - [`serve`] - loads the config file, seeds the token holder from it and
//!   runs the relay server, optionally opening the consent flow in a browser
//! - [`status`] - reports whether a token and actor URN are stored
//!
//! Both commands read the same `KEY=VALUE` file, by default
//! `linkedin-relay/.env` in the platform's local data directory.
//!
//! ```bash
//! linkedin-relay serve --open          # start and connect LinkedIn
//! linkedin-relay status                # inspect stored credentials
//! ```

mod serve;
mod status;

pub use serve::serve;
pub use status::status;
