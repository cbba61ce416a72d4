use thiserror::Error;

use crate::selection::Ticket;

/// Failures of the draw itself.
///
/// `Exhausted` is the only one a user can provoke; `InvalidTicket` means the
/// caller broke the request/commit contract.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("every entry of the roster has already been drawn")]
    Exhausted,

    #[error("ticket {0} is unknown or was already committed")]
    InvalidTicket(u64),
}

#[derive(Error, Debug)]
pub enum SequencerError {
    /// The offered ticket is handed back so the caller can discard it.
    #[error("an extraction animation is already running")]
    AlreadyRunning(Ticket),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
