use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

#[derive(Properties, PartialEq)]
pub struct JoinButtonProps {
    pub checkout_url: AttrValue,
    pub price_note: AttrValue,
}

/// Main call to action. A plain outbound link: the checkout itself happens
/// on the payment provider's page.
#[function_component(JoinButton)]
pub fn join_button(props: &JoinButtonProps) -> Html {
    html! {
        <div class="join-wrapper">
            <a href={props.checkout_url.clone()} class="join-button">
                <span class="join-label">
                    {"Join Founder's Club"}
                    <Icon kind={IconKind::ArrowRight} class={classes!("join-arrow")} />
                </span>
                <div class="join-shine"></div>
            </a>

            <div class="join-notes">
                <div class="join-note">
                    <Icon kind={IconKind::ShieldCheck} class={classes!("note-shield")} />
                    <span>{"Risk-free. Cancel anytime."}</span>
                </div>
                <div class="join-note-dot"></div>
                <div class="join-note">
                    <Icon kind={IconKind::CreditCard} />
                    <span>{props.price_note.clone()}</span>
                </div>
            </div>

            <style>
                {r#"
                    .join-wrapper {
                        width: 100%;
                        max-width: 28rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .join-button {
                        position: relative;
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #6366f1;
                        color: white;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        transition: all 0.3s ease;
                    }

                    .join-button:hover {
                        background: #818cf8;
                        box-shadow: 0 10px 15px rgba(99, 102, 241, 0.25);
                    }

                    .join-label {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .join-arrow {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.2s ease;
                    }

                    .join-button:hover .join-arrow {
                        transform: translateX(0.25rem);
                    }

                    .join-shine {
                        position: absolute;
                        inset: 0;
                        transform: translateX(-100%);
                        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
                    }

                    .join-button:hover .join-shine {
                        animation: shimmer 1.5s infinite;
                    }

                    @keyframes shimmer {
                        100% { transform: translateX(100%); }
                    }

                    .join-notes {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }

                    .join-note {
                        display: flex;
                        align-items: center;
                        gap: 0.375rem;
                    }

                    .join-note .icon {
                        width: 1rem;
                        height: 1rem;
                    }

                    .note-shield {
                        color: #4ade80;
                    }

                    .join-note-dot {
                        display: none;
                        width: 0.25rem;
                        height: 0.25rem;
                        background: #334155;
                        border-radius: 9999px;
                    }

                    @media (min-width: 640px) {
                        .join-button {
                            width: auto;
                        }

                        .join-notes {
                            flex-direction: row;
                        }

                        .join-note-dot {
                            display: block;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
