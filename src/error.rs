use thiserror::Error;

/// Convenience result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Error type returned by the free-function operation surface.
///
/// This is a single error enum shared across every operation in [`crate::ops`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// The receiver sequence was not supplied (`None`).
    ///
    /// Raised before any element is processed; no operation performs partial
    /// work on an undefined receiver.
    #[error("receiver sequence is not defined")]
    UndefinedReceiver,
}
