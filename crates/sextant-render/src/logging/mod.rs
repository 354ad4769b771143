//! Logging setup.
//!
//! The crate itself only talks to the `log` facade. Hosts that have no logger
//! of their own can install `env_logger` through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
