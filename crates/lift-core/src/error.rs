//! Framework error type.
//!
//! Sub-crates define their own error enums (`DispatchError`, `SimError`,
//! `OutputError`) and either convert `LiftError` via `From` or wrap it as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
