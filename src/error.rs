use thiserror::Error;

/// Errors surfaced by the gesture state machine.
///
/// All variants indicate a caller-side sequencing bug rather than a
/// recoverable runtime condition; events that are merely out of order
/// (a release with no active session, a move while idle) are ignored
/// instead of reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DragDropError {
    /// A grab arrived while another drag session was still active.
    #[error("a drag session is already active")]
    SessionActive,

    /// A placeholder was created while a previous one was still live.
    #[error("a placeholder already exists for this session")]
    PlaceholderExists,

    /// A placeholder was disposed without a live one.
    #[error("no live placeholder to dispose")]
    NoPlaceholder,
}
