use yew::prelude::*;

use crate::config::StepConfig;
use crate::reveal::{use_reveal, RevealOptions, Visibility};

pub const TRANSITION_MS: u32 = 1000;

pub fn reveal_class(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Pending => "step-pending",
        Visibility::Revealed => "step-revealed",
    }
}

pub fn reveal_options(step: &StepConfig) -> RevealOptions {
    step.reveal_threshold
        .map(RevealOptions::with_threshold)
        .unwrap_or_default()
}

pub fn transition_style(delay_ms: u32) -> String {
    format!("transition-duration: {}ms; transition-delay: {}ms;", TRANSITION_MS, delay_ms)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedStepProps {
    pub step: StepConfig,
}

/// One explainer card. Slides up and fades in the first time it scrolls
/// into view.
#[function_component(AnimatedStep)]
pub fn animated_step(props: &AnimatedStepProps) -> Html {
    let step = &props.step;
    let (node, visibility) = use_reveal(reveal_options(step));

    html! {
        <div
            ref={node}
            class={classes!("animated-step", reveal_class(visibility))}
            style={transition_style(step.delay_ms)}
        >
            <div class="step-image-frame">
                <div class="step-image-backdrop"></div>
                <img
                    src={step.image.url.clone()}
                    alt={step.image.alt.clone()}
                    width={step.image.width.to_string()}
                    height={step.image.height.to_string()}
                    loading="lazy"
                    class="step-image"
                />
            </div>
            <h3 class="step-title">{&step.title}</h3>
            <p class="step-description">{&step.description}</p>
        </div>
    }
}
