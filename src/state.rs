//! Tutorial view state and its transitions.
//!
//! The state is a plain value; every user event maps to one `&mut self`
//! transition. Transitions are total: out-of-range step selection is a
//! no-op and navigation clamps at the boundaries, so the active step index
//! is always valid.
//!
//! Copy status is transient. Each recorded copy bumps an epoch counter and
//! returns a [`CopyToken`]; the delayed clear the view schedules must present
//! that token back, and a stale token is ignored. This keeps an older copy's
//! pending clear from wiping out the status of a newer one.

use crate::content;

/// How long a recorded copy outcome stays visible before the view clears it,
/// in milliseconds.
pub const COPY_STATUS_CLEAR_MS: u32 = 2_000;

/// Which copy button a clipboard action belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    /// The code block of the active step.
    StepCode,
    /// The full demo document.
    DemoCode,
}

/// Result of a clipboard copy as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Transient indicator for the most recent clipboard copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyStatus {
    pub target: CopyTarget,
    pub outcome: CopyOutcome,
}

/// Opaque guard for a pending copy-status clear.
///
/// Obtained from [`TutorialState::record_copy`]; only the token from the most
/// recent copy can clear the status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyToken(u64);

/// UI state of the tutorial view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialState {
    active_step: usize,
    show_demo: bool,
    copy_status: Option<CopyStatus>,
    copy_epoch: u64,
    step_count: usize,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(content::STEPS.len())
    }
}

impl TutorialState {
    /// Create a fresh state over `step_count` steps (must be non-zero).
    pub fn new(step_count: usize) -> Self {
        Self {
            active_step: 0,
            show_demo: false,
            copy_status: None,
            copy_epoch: 0,
            step_count,
        }
    }

    /// Index of the step currently shown. Always in `0..step_count`.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Number of steps in the tutorial.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether the demo document replaces the step view.
    pub fn show_demo(&self) -> bool {
        self.show_demo
    }

    /// Outcome of the most recent copy, if still visible.
    pub fn copy_status(&self) -> Option<&CopyStatus> {
        self.copy_status.as_ref()
    }

    /// Token of the most recent copy. Changes on every [`record_copy`].
    ///
    /// [`record_copy`]: Self::record_copy
    pub fn copy_token(&self) -> CopyToken {
        CopyToken(self.copy_epoch)
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select_step(&mut self, index: usize) {
        if index < self.step_count {
            self.active_step = index;
        }
    }

    /// Advance one step, staying on the last step at the end.
    pub fn next_step(&mut self) {
        self.active_step = (self.active_step + 1).min(self.step_count.saturating_sub(1));
    }

    /// Go back one step, staying on the first step at the start.
    pub fn previous_step(&mut self) {
        self.active_step = self.active_step.saturating_sub(1);
    }

    /// Whether `next_step` would move.
    pub fn has_next(&self) -> bool {
        self.active_step + 1 < self.step_count
    }

    /// Whether `previous_step` would move.
    pub fn has_previous(&self) -> bool {
        self.active_step > 0
    }

    /// Flip between the step view and the demo document.
    pub fn toggle_demo(&mut self) {
        self.show_demo = !self.show_demo;
    }

    /// Record the outcome of a clipboard copy.
    ///
    /// Supersedes any previously visible status and returns the token the
    /// caller must present to [`clear_copy`](Self::clear_copy) once the
    /// display delay elapses.
    pub fn record_copy(&mut self, target: CopyTarget, outcome: CopyOutcome) -> CopyToken {
        self.copy_epoch += 1;
        self.copy_status = Some(CopyStatus { target, outcome });
        CopyToken(self.copy_epoch)
    }

    /// Clear the copy status guarded by `token`.
    ///
    /// A stale token (one superseded by a later copy) is ignored, so a
    /// delayed clear can never wipe out a newer status.
    pub fn clear_copy(&mut self, token: CopyToken) {
        if token.0 == self.copy_epoch {
            self.copy_status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = TutorialState::default();
        assert_eq!(state.active_step(), 0);
        assert_eq!(state.step_count(), 8);
        assert!(!state.show_demo());
        assert!(state.copy_status().is_none());
    }

    #[test]
    fn test_select_step_valid_indices() {
        let mut state = TutorialState::new(8);
        for i in 0..8 {
            state.select_step(i);
            assert_eq!(state.active_step(), i);
        }
    }

    #[test]
    fn test_select_step_out_of_range_is_noop() {
        let mut state = TutorialState::new(8);
        state.select_step(3);
        state.select_step(8);
        assert_eq!(state.active_step(), 3);
        state.select_step(usize::MAX);
        assert_eq!(state.active_step(), 3);
    }

    #[test]
    fn test_previous_at_lower_boundary() {
        let mut state = TutorialState::new(8);
        let before = state.clone();
        state.previous_step();
        assert_eq!(state, before);
    }

    #[test]
    fn test_next_at_upper_boundary() {
        let mut state = TutorialState::new(8);
        state.select_step(7);
        let before = state.clone();
        state.next_step();
        assert_eq!(state, before);
    }

    #[test]
    fn test_next_clamps_after_repeated_calls() {
        let mut state = TutorialState::new(8);
        for _ in 0..10 {
            state.next_step();
        }
        assert_eq!(state.active_step(), 7);
    }

    #[test]
    fn test_boundary_flags() {
        let mut state = TutorialState::new(8);
        assert!(!state.has_previous());
        assert!(state.has_next());
        state.select_step(7);
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn test_toggle_demo_is_involution() {
        let mut state = TutorialState::new(8);
        state.toggle_demo();
        assert!(state.show_demo());
        state.toggle_demo();
        assert!(!state.show_demo());
    }

    #[test]
    fn test_toggle_demo_leaves_active_step_alone() {
        let mut state = TutorialState::new(8);
        state.select_step(5);
        state.toggle_demo();
        assert_eq!(state.active_step(), 5);
    }

    #[test]
    fn test_record_and_clear_copy() {
        let mut state = TutorialState::new(8);
        let token = state.record_copy(CopyTarget::StepCode, CopyOutcome::Copied);
        assert_eq!(
            state.copy_status(),
            Some(&CopyStatus {
                target: CopyTarget::StepCode,
                outcome: CopyOutcome::Copied,
            })
        );
        state.clear_copy(token);
        assert!(state.copy_status().is_none());
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let mut state = TutorialState::new(8);
        let first = state.record_copy(CopyTarget::StepCode, CopyOutcome::Failed);
        let second = state.record_copy(CopyTarget::DemoCode, CopyOutcome::Copied);

        // The first copy's delayed clear fires after the second copy: the
        // newer status must survive.
        state.clear_copy(first);
        assert_eq!(
            state.copy_status(),
            Some(&CopyStatus {
                target: CopyTarget::DemoCode,
                outcome: CopyOutcome::Copied,
            })
        );

        state.clear_copy(second);
        assert!(state.copy_status().is_none());
    }

    #[test]
    fn test_clear_after_clear_is_noop() {
        let mut state = TutorialState::new(8);
        let token = state.record_copy(CopyTarget::DemoCode, CopyOutcome::Copied);
        state.clear_copy(token);
        state.clear_copy(token);
        assert!(state.copy_status().is_none());
    }
}
