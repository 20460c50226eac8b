//! # gsi-tutorial-rs
//!
//! Core of an interactive walkthrough for configuring Google Sign-In with
//! Google Identity Services: eight instructional steps with copyable code
//! snippets and a toggleable complete demo page.
//!
//! This crate holds everything that can be tested without a rendering
//! surface:
//!
//! - **Static content**: the step list, the demo document, and the page
//!   chrome data, all `'static` constants.
//! - **View state**: [`TutorialState`] with clamped step navigation, the
//!   demo toggle, and the transient, token-guarded copy status.
//! - **Clipboard seam**: the [`Clipboard`] capability trait; the system
//!   invokes a host clipboard, it never implements one.
//!
//! The `wasm-ui` workspace member renders this state with Yew and wires the
//! browser clipboard, timer, and console to it.
//!
//! ## Example
//!
//! ```
//! use gsi_tutorial_rs::{CopyOutcome, CopyTarget, TutorialState};
//!
//! let mut state = TutorialState::default();
//! state.next_step();
//! assert_eq!(state.active_step(), 1);
//!
//! // Navigation clamps instead of overflowing.
//! for _ in 0..20 {
//!     state.next_step();
//! }
//! assert_eq!(state.active_step(), state.step_count() - 1);
//!
//! // Copy outcomes are transient and keyed by token: only the most recent
//! // copy's token can clear the status.
//! let stale = state.record_copy(CopyTarget::StepCode, CopyOutcome::Failed);
//! let fresh = state.record_copy(CopyTarget::DemoCode, CopyOutcome::Copied);
//! state.clear_copy(stale);
//! assert!(state.copy_status().is_some());
//! state.clear_copy(fresh);
//! assert!(state.copy_status().is_none());
//! ```

pub mod clipboard;
pub mod content;
pub mod error;
pub mod state;

pub use clipboard::{Clipboard, copy_text};
pub use content::{
    CONSOLE_URL, DEMO_DOCUMENT, DOCS_URL, HIGHLIGHTS, Highlight, QUICK_START, STEPS, Step,
};
pub use error::ClipboardError;
pub use state::{
    COPY_STATUS_CLEAR_MS, CopyOutcome, CopyStatus, CopyTarget, CopyToken, TutorialState,
};
