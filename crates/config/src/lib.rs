#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `config` locates and validates the JSON document that tells `skip-rm`
//! which command to wrap, how to read its pattern list, and whether that
//! list names arguments to skip (`blacklist`) or to keep (`whitelist`).
//!
//! ```json
//! {
//!     "command": "rm",
//!     "matcher": "glob",
//!     "mode": "blacklist",
//!     "blacklist": "~/.config/skip-rm/blacklist",
//!     "whitelist": "~/.config/skip-rm/whitelist"
//! }
//! ```
//!
//! # Search order
//!
//! When [`CONFIG_ENV`] is set, only that file is tried. Otherwise
//! `~/.config/skip-rm/skip-rm.conf` is tried before
//! `/etc/skip-rm/skip-rm.conf`. The first file that can be read wins, and a
//! malformed document in it is an error rather than a reason to keep
//! searching.
//!
//! # Errors
//!
//! Every failure is a [`ConfigError`]; callers treat all of them as fatal
//! before the wrapped command starts.

mod error;
mod model;
mod search;

use std::env;

use filters::PathContext;

pub use error::ConfigError;
pub use model::{Config, RawConfig};
pub use search::{CONFIG_ENV, SYSTEM_CONFIG, USER_CONFIG, load_first, search_paths};

/// Loads the configuration using the process environment and the home
/// directory captured in `context`.
pub fn load(context: &PathContext) -> Result<Config, ConfigError> {
    let candidates = search_paths(env::var_os(CONFIG_ENV), context.home());
    load_first(&candidates)
}
