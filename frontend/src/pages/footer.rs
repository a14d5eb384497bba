use std::rc::Rc;

use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: Vec<FooterLink>,
}

fn link(label: &'static str, href: impl Into<String>) -> FooterLink {
    FooterLink { label, href: href.into() }
}

pub fn footer_columns(site: &SiteConfig) -> Vec<FooterColumn> {
    vec![
        FooterColumn {
            heading: "Product",
            links: vec![
                link("How It Works", site.anchor_href()),
                link("Join Beta", &site.checkout_url),
            ],
        },
        FooterColumn {
            heading: "Support",
            links: vec![link("Contact Us", site.contact_href())],
        },
        FooterColumn {
            heading: "Legal",
            links: vec![
                link("Privacy Policy", &site.legal.privacy_url),
                link("Terms of Service", &site.legal.terms_url),
            ],
        },
    ]
}

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub site: Rc<SiteConfig>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let site = &props.site;
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-brand-name">{&site.brand}</span>
                        <p class="footer-tagline">{&site.tagline}</p>
                    </div>
                    { for footer_columns(site).into_iter().map(|column| html! {
                        <div>
                            <h4 class="footer-heading">{column.heading}</h4>
                            <ul class="footer-list">
                                { for column.links.into_iter().map(|link| html! {
                                    <li><a href={link.href}>{link.label}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    {copyright_line(year, &site.brand)}
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: #0f172a;
                        color: #cbd5e1;
                        padding: 3rem 1rem;
                        border-top: 1px solid #1e293b;
                    }

                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .footer-brand-name {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: white;
                    }

                    .footer-tagline {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }

                    .footer-heading {
                        color: white;
                        font-weight: 600;
                        margin: 0 0 1rem;
                    }

                    .footer-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        font-size: 0.875rem;
                    }

                    .footer-list li {
                        margin-bottom: 0.5rem;
                    }

                    .footer-list a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-list a:hover {
                        color: white;
                    }

                    .footer-bottom {
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1e293b;
                        text-align: center;
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }

                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
