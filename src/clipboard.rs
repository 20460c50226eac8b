//! Clipboard capability seam.
//!
//! The tutorial never implements a clipboard; it only invokes one the host
//! provides. Hosts with a synchronous capability implement [`Clipboard`] and
//! drive copies through [`copy_text`]. Hosts whose clipboard is asynchronous
//! (the browser's `navigator.clipboard`) perform the write themselves and
//! record the resolved outcome with
//! [`TutorialState::record_copy`](crate::TutorialState::record_copy).

use crate::error::ClipboardError;
use crate::state::{CopyOutcome, CopyTarget, CopyToken, TutorialState};

/// Clipboard capability provided by the embedding environment.
pub trait Clipboard {
    /// Place `text` on the system clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text` through `clipboard` and record the outcome on `state`.
///
/// Returns the token guarding this copy's pending status clear, together
/// with the capability result so the caller can report the fault to its
/// diagnostics sink. The failure itself is already absorbed into the state:
/// the view shows it as transient inline text and nothing propagates.
pub fn copy_text(
    state: &mut TutorialState,
    clipboard: &mut dyn Clipboard,
    text: &str,
    target: CopyTarget,
) -> (CopyToken, Result<(), ClipboardError>) {
    let result = clipboard.write_text(text);
    let outcome = match result {
        Ok(()) => CopyOutcome::Copied,
        Err(_) => CopyOutcome::Failed,
    };
    (state.record_copy(target, outcome), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CopyStatus;

    /// Capability that always succeeds, counting invocations.
    struct AlwaysOk {
        writes: usize,
    }

    impl Clipboard for AlwaysOk {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            self.writes += 1;
            Ok(())
        }
    }

    /// Capability that always fails, counting invocations.
    struct AlwaysFail {
        writes: usize,
    }

    impl Clipboard for AlwaysFail {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            self.writes += 1;
            Err(ClipboardError::WriteFailed("permission denied".to_string()))
        }
    }

    #[test]
    fn test_copy_success_records_status() {
        let mut state = TutorialState::default();
        let mut clipboard = AlwaysOk { writes: 0 };

        let (token, result) = copy_text(&mut state, &mut clipboard, "x", CopyTarget::StepCode);

        assert!(result.is_ok());
        assert_eq!(clipboard.writes, 1);
        assert_eq!(
            state.copy_status(),
            Some(&CopyStatus {
                target: CopyTarget::StepCode,
                outcome: CopyOutcome::Copied,
            })
        );

        // Simulates the delayed clear elapsing.
        state.clear_copy(token);
        assert!(state.copy_status().is_none());
    }

    #[test]
    fn test_copy_failure_records_status_and_reports_fault() {
        let mut state = TutorialState::default();
        let mut clipboard = AlwaysFail { writes: 0 };

        let (_token, result) = copy_text(&mut state, &mut clipboard, "x", CopyTarget::DemoCode);

        // One write attempt, one fault for the caller's diagnostics sink.
        assert_eq!(clipboard.writes, 1);
        assert_eq!(
            result,
            Err(ClipboardError::WriteFailed("permission denied".to_string()))
        );
        assert_eq!(
            state.copy_status(),
            Some(&CopyStatus {
                target: CopyTarget::DemoCode,
                outcome: CopyOutcome::Failed,
            })
        );
    }

    #[test]
    fn test_copy_never_touches_navigation() {
        let mut state = TutorialState::default();
        state.select_step(4);
        state.toggle_demo();
        let mut clipboard = AlwaysOk { writes: 0 };

        copy_text(&mut state, &mut clipboard, "x", CopyTarget::DemoCode);

        assert_eq!(state.active_step(), 4);
        assert!(state.show_demo());
    }
}
