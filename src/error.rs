//! Error types for the tutorial core.

use thiserror::Error;

/// Failure reported by the host clipboard capability.
///
/// This is the only fallible operation in the system. It is always recovered
/// locally: the view records [`CopyOutcome::Failed`](crate::CopyOutcome) and
/// shows a transient inline message, it never propagates further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard capability exists in the host environment.
    #[error("clipboard is unavailable in this environment")]
    Unavailable,
    /// The host rejected the write (permission denied or a thrown fault).
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "clipboard is unavailable in this environment"
        );
        assert_eq!(
            ClipboardError::WriteFailed("permission denied".to_string()).to_string(),
            "clipboard write failed: permission denied"
        );
    }
}
