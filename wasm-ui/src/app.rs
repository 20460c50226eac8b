//! Main application component.

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use gsi_tutorial_rs::{
    CONSOLE_URL, COPY_STATUS_CLEAR_MS, CopyOutcome, CopyTarget, CopyToken, DEMO_DOCUMENT, DOCS_URL,
    HIGHLIGHTS, STEPS, TutorialState,
};

use crate::clipboard;
use crate::components::{DemoPanel, StepNav, StepPanel};

/// Events applied to the tutorial state.
pub enum Msg {
    /// Jump to a step from the navigator.
    SelectStep(usize),
    /// Go back one step.
    PreviousStep,
    /// Advance one step.
    NextStep,
    /// Flip between the step view and the demo document.
    ToggleDemo,
    /// A clipboard write resolved with the given outcome.
    CopyResolved {
        target: CopyTarget,
        outcome: CopyOutcome,
    },
    /// The display delay for the copy guarded by this token elapsed.
    ClearCopy(CopyToken),
}

/// Main application state.
///
/// A thin reducer store over the core state: dispatch applies each event to
/// the latest state, which is what lets the token check in `clear_copy`
/// reject a superseded copy's delayed clear.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    pub tutorial: TutorialState,
}

impl Reducible for AppState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Msg) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::SelectStep(index) => next.tutorial.select_step(index),
            Msg::PreviousStep => next.tutorial.previous_step(),
            Msg::NextStep => next.tutorial.next_step(),
            Msg::ToggleDemo => next.tutorial.toggle_demo(),
            Msg::CopyResolved { target, outcome } => {
                next.tutorial.record_copy(target, outcome);
            }
            Msg::ClearCopy(token) => next.tutorial.clear_copy(token),
        }
        next.into()
    }
}

/// Text behind each copy button.
fn copy_source(state: &TutorialState, target: CopyTarget) -> &'static str {
    match target {
        CopyTarget::StepCode => STEPS
            .get(state.active_step())
            .map(|step| step.code)
            .unwrap_or_default(),
        CopyTarget::DemoCode => DEMO_DOCUMENT,
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    let on_select_step = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(Msg::SelectStep(index)))
    };

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Msg::PreviousStep))
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Msg::NextStep))
    };

    let on_toggle_demo = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Msg::ToggleDemo))
    };

    // Copy flow: await the browser clipboard, log a failure once, then
    // record the resolved outcome. The auto-clear is scheduled by the
    // effect below once the new status lands.
    let on_copy = {
        let state = state.clone();
        Callback::from(move |target: CopyTarget| {
            let state = state.clone();
            let text = copy_source(&state.tutorial, target);
            spawn_local(async move {
                let outcome = match clipboard::write_text(text).await {
                    Ok(()) => CopyOutcome::Copied,
                    Err(err) => {
                        gloo::console::error!(format!("Failed to copy text: {err}"));
                        CopyOutcome::Failed
                    }
                };
                state.dispatch(Msg::CopyResolved { target, outcome });
            });
        })
    };

    // Copy-status timer: whenever a new status lands (the token changes), a
    // fresh timeout is scheduled and the superseded one is cancelled by the
    // effect cleanup. A clear that still fires late is rejected by its
    // stale token.
    {
        let state = state.clone();
        let has_status = state.tutorial.copy_status().is_some();
        let token = state.tutorial.copy_token();

        use_effect_with((has_status, token), move |(has_status, token)| {
            let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

            if *has_status {
                let token = *token;
                let handle = Timeout::new(COPY_STATUS_CLEAR_MS, move || {
                    state.dispatch(Msg::ClearCopy(token));
                });
                *timeout_handle.borrow_mut() = Some(handle);
            }

            let cleanup_handle = timeout_handle.clone();
            move || {
                if let Some(handle) = cleanup_handle.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }

    let tutorial = &state.tutorial;
    let copy_status = tutorial.copy_status().copied();

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "Google Login Tutorial" }</h1>
                    <p class="subtitle">{ "Complete guide to implementing Google OAuth Sign-In" }</p>
                </div>
                <div class="header-right">
                    <a class="header-link" href={DOCS_URL} target="_blank" rel="noopener noreferrer">
                        { "Official Docs" }
                    </a>
                    <a class="header-link" href={CONSOLE_URL} target="_blank" rel="noopener noreferrer">
                        { "Google Console" }
                    </a>
                </div>
            </header>

            <main class="main">
                <div class="layout">
                    <aside class="sidebar">
                        <StepNav
                            active_step={tutorial.active_step()}
                            on_select={on_select_step}
                        />
                        <button class="demo-toggle" onclick={on_toggle_demo}>
                            { if tutorial.show_demo() { "Hide Demo" } else { "Show Complete Demo" } }
                        </button>
                    </aside>

                    <section class="content">
                        if tutorial.show_demo() {
                            <DemoPanel
                                copy_status={copy_status}
                                on_copy={on_copy.clone()}
                            />
                        } else {
                            <StepPanel
                                step_index={tutorial.active_step()}
                                has_previous={tutorial.has_previous()}
                                has_next={tutorial.has_next()}
                                copy_status={copy_status}
                                on_previous={on_previous}
                                on_next={on_next}
                                on_copy={on_copy.clone()}
                            />
                        }
                    </section>
                </div>

                <div class="highlights">
                    { for HIGHLIGHTS.iter().map(|card| html! {
                        <div class="highlight-card">
                            <h3>{ card.title }</h3>
                            <p>{ card.blurb }</p>
                        </div>
                    })}
                </div>
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span>{ "Google Identity Services | OAuth 2.0 | Client-side walkthrough" }</span>
                </div>
                <div class="footer-row">
                    <span class="footer-left">{ "MIT License" }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AppState, msg: Msg) -> AppState {
        (*Rc::new(state).reduce(msg)).clone()
    }

    #[test]
    fn test_reduce_navigation() {
        let state = reduce(AppState::default(), Msg::NextStep);
        assert_eq!(state.tutorial.active_step(), 1);

        let state = reduce(state, Msg::SelectStep(7));
        assert_eq!(state.tutorial.active_step(), 7);

        // Clamped at the upper boundary.
        let state = reduce(state, Msg::NextStep);
        assert_eq!(state.tutorial.active_step(), 7);

        let state = reduce(state, Msg::PreviousStep);
        assert_eq!(state.tutorial.active_step(), 6);
    }

    #[test]
    fn test_reduce_toggle_demo() {
        let state = reduce(AppState::default(), Msg::ToggleDemo);
        assert!(state.tutorial.show_demo());

        let state = reduce(state, Msg::ToggleDemo);
        assert!(!state.tutorial.show_demo());
    }

    #[test]
    fn test_reduce_copy_lifecycle() {
        let state = reduce(
            AppState::default(),
            Msg::CopyResolved {
                target: CopyTarget::StepCode,
                outcome: CopyOutcome::Copied,
            },
        );
        let token = state.tutorial.copy_token();
        assert!(state.tutorial.copy_status().is_some());

        // A later copy supersedes the pending clear.
        let state = reduce(
            state,
            Msg::CopyResolved {
                target: CopyTarget::DemoCode,
                outcome: CopyOutcome::Failed,
            },
        );
        let state = reduce(state, Msg::ClearCopy(token));
        assert!(state.tutorial.copy_status().is_some());

        let token = state.tutorial.copy_token();
        let state = reduce(state, Msg::ClearCopy(token));
        assert!(state.tutorial.copy_status().is_none());
    }

    #[test]
    fn test_copy_source_tracks_active_step() {
        let mut tutorial = TutorialState::default();
        assert_eq!(copy_source(&tutorial, CopyTarget::StepCode), STEPS[0].code);

        tutorial.select_step(5);
        assert_eq!(copy_source(&tutorial, CopyTarget::StepCode), STEPS[5].code);

        assert_eq!(copy_source(&tutorial, CopyTarget::DemoCode), DEMO_DOCUMENT);
    }
}
