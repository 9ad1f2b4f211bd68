//! Shared library for the errno CLI.
//!
//! - [`table`]: the compiled-in errno table for the host platform
//! - [`lookup`]: token classification and table lookups
//! - [`report`]: descriptions, report lines and the processing loop
//! - [`config`] / [`logging`]: environment settings and diagnostic logging

pub mod config;
pub mod logging;
pub mod lookup;
pub mod report;
pub mod table;

pub use logging::{LogConfig, LogFormat, LoggingError, init_logging};
pub use lookup::{LookupError, TokenKind, classify, parse_leading_code};
pub use report::{Reporter, describe, exit_code};
pub use table::{ErrnoEntry, ErrnoTable};
