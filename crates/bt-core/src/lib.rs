//! # bt-core
//!
//! Error types and precondition macros shared by the bt workspace.
//!
//! The business-hours engine itself is infallible; errors only arise when a
//! caller tries to install an inconsistent configuration (for example a
//! business day that ends before it starts).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
