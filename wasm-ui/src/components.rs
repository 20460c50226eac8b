//! UI components for the tutorial view.

use yew::prelude::*;

use gsi_tutorial_rs::{
    CopyOutcome, CopyStatus, CopyTarget, DEMO_DOCUMENT, QUICK_START, STEPS,
};

/// Copy-button label derived from the transient copy status.
///
/// Only the button whose target matches the recorded status shows an
/// outcome; every other button keeps its resting label.
fn copy_label(status: Option<&CopyStatus>, target: CopyTarget) -> &'static str {
    match status {
        Some(status) if status.target == target => match status.outcome {
            CopyOutcome::Copied => "\u{2713} Copied!",
            CopyOutcome::Failed => "\u{2717} Failed",
        },
        _ => "Copy Code",
    }
}

/// Step list sidebar.
#[derive(Properties, PartialEq)]
pub struct StepNavProps {
    pub active_step: usize,
    pub on_select: Callback<usize>,
}

#[function_component(StepNav)]
pub fn step_nav(props: &StepNavProps) -> Html {
    html! {
        <nav class="step-nav">
            <h2>{ "Tutorial Steps" }</h2>
            { for STEPS.iter().enumerate().map(|(index, step)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(index));
                let class = if props.active_step == index {
                    "step-button active"
                } else {
                    "step-button"
                };

                html! {
                    <button {class} {onclick}>
                        <span class="step-number">{ index + 1 }</span>
                        <span class="step-title">{ step.title }</span>
                    </button>
                }
            })}
        </nav>
    }
}

/// Instructional panel for the active step.
#[derive(Properties, PartialEq)]
pub struct StepPanelProps {
    pub step_index: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub copy_status: Option<CopyStatus>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_copy: Callback<CopyTarget>,
}

#[function_component(StepPanel)]
pub fn step_panel(props: &StepPanelProps) -> Html {
    let Some(step) = STEPS.get(props.step_index) else {
        return Html::default();
    };

    let on_previous_click = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_| on_previous.emit(()))
    };

    let on_next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_| on_next.emit(()))
    };

    let on_copy_click = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_| on_copy.emit(CopyTarget::StepCode))
    };

    html! {
        <div class="panel step-panel">
            <div class="panel-header">
                <h2>{ format!("Step {}: {}", props.step_index + 1, step.title) }</h2>
                <p class="step-description">{ step.description }</p>
            </div>
            <div class="panel-content">
                <div class="instructions-box">
                    <h3>{ "Step-by-Step Instructions" }</h3>
                    <ol class="instructions">
                        { for step.instructions.iter().enumerate().map(|(index, line)| html! {
                            <li>
                                <span class="instruction-number">{ index + 1 }</span>
                                <span>{ *line }</span>
                            </li>
                        })}
                    </ol>
                </div>

                <div class="code-block">
                    <div class="code-header">
                        <span class="code-title">{ "Code Example" }</span>
                        <button class="copy-button" onclick={on_copy_click}>
                            { copy_label(props.copy_status.as_ref(), CopyTarget::StepCode) }
                        </button>
                    </div>
                    <pre class="code-sample">{ step.code }</pre>
                </div>

                <div class="step-controls">
                    <button
                        class="nav-button previous"
                        onclick={on_previous_click}
                        disabled={!props.has_previous}
                    >
                        { "Previous" }
                    </button>
                    <button
                        class="nav-button next"
                        onclick={on_next_click}
                        disabled={!props.has_next}
                    >
                        { "Next" }
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Complete working example panel.
#[derive(Properties, PartialEq)]
pub struct DemoPanelProps {
    pub copy_status: Option<CopyStatus>,
    pub on_copy: Callback<CopyTarget>,
}

#[function_component(DemoPanel)]
pub fn demo_panel(props: &DemoPanelProps) -> Html {
    let on_copy_click = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_| on_copy.emit(CopyTarget::DemoCode))
    };

    html! {
        <div class="panel demo-panel">
            <div class="panel-header">
                <h2>{ "Complete Working Example" }</h2>
            </div>
            <div class="panel-content">
                <div class="code-block">
                    <div class="code-header">
                        <span class="code-title">{ "Full HTML Example" }</span>
                        <button class="copy-button" onclick={on_copy_click}>
                            { copy_label(props.copy_status.as_ref(), CopyTarget::DemoCode) }
                        </button>
                    </div>
                    <pre class="code-sample demo-sample">{ DEMO_DOCUMENT }</pre>
                </div>

                <div class="quick-start">
                    <h3>{ "Quick Start Guide" }</h3>
                    <ol>
                        { for QUICK_START.iter().map(|item| html! {
                            <li>{ *item }</li>
                        })}
                    </ol>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_label_resting() {
        assert_eq!(copy_label(None, CopyTarget::StepCode), "Copy Code");
        assert_eq!(copy_label(None, CopyTarget::DemoCode), "Copy Code");
    }

    #[test]
    fn test_copy_label_shows_outcome_for_matching_target() {
        let status = CopyStatus {
            target: CopyTarget::StepCode,
            outcome: CopyOutcome::Copied,
        };
        assert_eq!(
            copy_label(Some(&status), CopyTarget::StepCode),
            "\u{2713} Copied!"
        );

        let status = CopyStatus {
            target: CopyTarget::StepCode,
            outcome: CopyOutcome::Failed,
        };
        assert_eq!(
            copy_label(Some(&status), CopyTarget::StepCode),
            "\u{2717} Failed"
        );
    }

    #[test]
    fn test_copy_label_ignores_other_target() {
        let status = CopyStatus {
            target: CopyTarget::DemoCode,
            outcome: CopyOutcome::Copied,
        };
        assert_eq!(copy_label(Some(&status), CopyTarget::StepCode), "Copy Code");
    }
}
