//! Error types for the bt workspace.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report. The `ensure!` and `fail!` macros are shorthand for the
//! precondition checks performed when a configuration is mutated.

use thiserror::Error;

/// The top-level error type used throughout the bt workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// An inconsistent configuration was rejected at setup time.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the bt workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Config(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bt_core::errors::Result;
/// use bt_core::ensure;
/// fn span(start: u32, end: u32) -> Result<u32> {
///     ensure!(start < end, "start {start} must precede end {end}");
///     Ok(end - start)
/// }
/// assert!(span(9, 17).is_ok());
/// assert!(span(17, 9).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Config(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bt_core::errors::Result;
/// use bt_core::fail;
/// fn always_err() -> Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
