use std::rc::Rc;

use yew::prelude::*;

use crate::components::cta::{JoinButton, JoinButtonProps};
use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub site: Rc<SiteConfig>,
}

pub fn join_button_props(site: &SiteConfig) -> JoinButtonProps {
    JoinButtonProps {
        checkout_url: site.checkout_url.clone().into(),
        price_note: site.price_note.clone().into(),
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let site = &props.site;

    html! {
        <section id="waitlist" class="hero">
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="badge-pulse">
                        <span class="badge-ping"></span>
                        <span class="badge-dot"></span>
                    </span>
                    {"Beta Access Now Open"}
                </div>
                <h1 class="hero-title">
                    <span class="hero-title-line">{"Never overpay for"}</span>
                    {" "}
                    <span class="hero-title-line hero-title-accent">{"gas again."}</span>
                </h1>
                <p class="hero-subtitle">
                    {format!(
                        "{} is the private membership that pays you back the difference between what you paid and the cheapest gas in your area.",
                        site.brand
                    )}
                </p>
                <div class="hero-cta">
                    <JoinButton ..join_button_props(site) />
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        padding: 8rem 1rem 5rem;
                        overflow: hidden;
                    }

                    .hero-content {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        background: rgba(49, 46, 129, 0.3);
                        border: 1px solid #3730a3;
                        color: #a5b4fc;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .badge-pulse {
                        position: relative;
                        display: flex;
                        width: 0.5rem;
                        height: 0.5rem;
                    }

                    .badge-ping {
                        position: absolute;
                        display: inline-flex;
                        width: 100%;
                        height: 100%;
                        border-radius: 9999px;
                        background: #818cf8;
                        opacity: 0.75;
                        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }

                    .badge-dot {
                        position: relative;
                        display: inline-flex;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #818cf8;
                    }

                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }

                    .hero-title {
                        font-size: 2.25rem;
                        font-weight: 800;
                        letter-spacing: -0.025em;
                        color: white;
                        margin: 0;
                    }

                    .hero-title-line {
                        display: block;
                    }

                    .hero-title-accent {
                        color: #818cf8;
                    }

                    .hero-subtitle {
                        margin-top: 0.75rem;
                        font-size: 1rem;
                        color: #cbd5e1;
                    }

                    .hero-cta {
                        margin-top: 2rem;
                    }

                    @media (min-width: 640px) {
                        .hero-title {
                            font-size: 3rem;
                        }

                        .hero-subtitle {
                            margin: 1.25rem auto 0;
                            max-width: 36rem;
                            font-size: 1.125rem;
                        }
                    }

                    @media (min-width: 1024px) {
                        .hero {
                            padding: 10rem 2rem 7rem;
                        }
                    }

                    @media (min-width: 1280px) {
                        .hero-title {
                            font-size: 3.75rem;
                        }

                        .hero-title-line {
                            display: inline;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
