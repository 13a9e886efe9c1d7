//! Error types for lift-dispatch.
//!
//! The handshake itself has no error path — every wait is eventually
//! satisfied by its counterpart, by contract.  The only representable error
//! is caller misuse: addressing a passenger slot the table does not have.

use thiserror::Error;

use lift_core::PassengerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{passenger} is out of range for a table of {count} slots")]
    PassengerOutOfRange {
        passenger: PassengerId,
        count:     usize,
    },
}

/// Alias for `Result<T, DispatchError>`.
pub type DispatchResult<T> = Result<T, DispatchError>;
