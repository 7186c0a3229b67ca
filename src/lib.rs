//! Library entrypoint for userlog-bootstrap.
//!
//! The binary is a thin wrapper; keeping the bootstrap logic here lets the
//! integration tests under `tests/` drive it with their own `Provisioner`.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BootstrapError, Step};
