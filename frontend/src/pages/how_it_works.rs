use std::rc::Rc;

use yew::prelude::*;

use crate::components::animated_step::AnimatedStep;
use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub site: Rc<SiteConfig>,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    let site = &props.site;

    html! {
        <section id={site.how_it_works_anchor.clone()} class="how-it-works">
            <div class="how-it-works-content">
                <div class="how-it-works-header">
                    <h2 class="how-it-works-eyebrow">{"Simple & Transparent"}</h2>
                    <p class="how-it-works-title">{format!("How {} works", site.brand)}</p>
                </div>

                <div class="steps-grid">
                    { for site.steps.iter().map(|step| html! {
                        <AnimatedStep key={step.title.clone()} step={step.clone()} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .how-it-works {
                        padding: 6rem 1rem;
                        background: rgba(30, 41, 59, 0.5);
                    }

                    .how-it-works-content {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .how-it-works-header {
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                        text-align: center;
                    }

                    .how-it-works-eyebrow {
                        font-size: 1rem;
                        font-weight: 600;
                        letter-spacing: 0.025em;
                        text-transform: uppercase;
                        color: #818cf8;
                        margin: 0;
                    }

                    .how-it-works-title {
                        margin-top: 0.5rem;
                        font-size: 1.875rem;
                        font-weight: 800;
                        letter-spacing: -0.025em;
                        color: white;
                    }

                    .steps-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }

                    .animated-step {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        transition-property: opacity, transform;
                        transition-timing-function: ease-out;
                    }

                    .step-pending {
                        opacity: 0;
                        transform: translateY(5rem);
                    }

                    .step-revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .step-image-frame {
                        position: relative;
                        width: 100%;
                        max-width: 20rem;
                        aspect-ratio: 4 / 3;
                        margin-bottom: 1.5rem;
                    }

                    .step-image-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(49, 46, 129, 0.3);
                        border-radius: 1rem;
                        transform: rotate(3deg);
                        transition: transform 0.3s ease;
                    }

                    .step-image-frame:hover .step-image-backdrop {
                        transform: rotate(6deg);
                    }

                    .step-image {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 1rem;
                        background: #1e293b;
                        border: 1px solid #334155;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }

                    .step-title {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: white;
                        margin: 0 0 0.5rem;
                    }

                    .step-description {
                        max-width: 20rem;
                        color: #cbd5e1;
                        line-height: 1.625;
                        margin: 0;
                    }

                    @media (min-width: 640px) {
                        .how-it-works-title {
                            font-size: 2.25rem;
                        }
                    }

                    @media (min-width: 768px) {
                        .steps-grid {
                            grid-template-columns: repeat(3, 1fr);
                            gap: 2rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
