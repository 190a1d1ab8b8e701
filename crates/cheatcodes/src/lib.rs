//! # feltforge-cheatcodes
//!
//! The cheat-code layer for simulated contract execution: intercepts a
//! contract's environment queries and external calls, substitutes
//! test-controlled values (spoofed callers, overridden block context,
//! canned call results), and falls back to the real engine on every
//! miss.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod backend;
pub use backend::SyscallBackend;

mod config;
pub use config::CheatsConfig;

mod error;
pub use error::{CheatcodeError, Error, Result};

mod handler;
pub use handler::CheatcodeHandler;

mod state;
pub use state::Cheatcodes;
