use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match expected count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("{role} thread {index} panicked")]
    AgentPanicked {
        role:  &'static str,
        index: usize,
    },

    #[error("run finished with {completed} completed trips, expected {expected}")]
    QuotaMismatch {
        expected:  u64,
        completed: u64,
    },
}

pub type SimResult<T> = Result<T, SimError>;
