//! Structured logging built on `tracing`.
//!
//! Every layer of the crate emits `tracing` spans and events: `debug_span!`
//! around event handling and filtering, `debug!` on state changes and `warn!`
//! where a persistence failure is swallowed. This module installs the
//! subscriber that collects them.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter (or stderr)
//! ```
//!
//! # Features
//!
//! - **File Output**: Plain-text events appended to the configured `trace_file`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
