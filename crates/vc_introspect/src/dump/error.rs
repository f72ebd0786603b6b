use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure while writing a field tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DumpError {
    #[error("failed to write the field tree")]
    Format(#[from] fmt::Error),

    #[cfg(feature = "std")]
    #[error("failed to write the field tree: {0}")]
    Io(#[from] std::io::Error),
}
