//! Logging bootstrap.
//!
//! The engine itself only talks to the `log` facade; binaries call
//! [`init_logging`] once to route records to `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
