use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config::SiteConfig;

/// Open/closed state of the mobile dropdown. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Jumps within the page.
    Anchor,
    /// Leaves the site (checkout).
    External,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub kind: LinkKind,
}

pub fn how_it_works_link(site: &SiteConfig) -> NavLink {
    NavLink {
        label: "How It Works",
        href: site.anchor_href(),
        kind: LinkKind::Anchor,
    }
}

pub fn desktop_links(site: &SiteConfig) -> Vec<NavLink> {
    vec![
        how_it_works_link(site),
        NavLink {
            label: "Get Early Access",
            href: site.checkout_url.clone(),
            kind: LinkKind::External,
        },
    ]
}

/// Links shown in the dropdown, or `None` when the menu is closed and the
/// panel should not be rendered at all.
pub fn mobile_panel(menu: MenuState, site: &SiteConfig) -> Option<Vec<NavLink>> {
    if !menu.is_open() {
        return None;
    }
    Some(vec![
        how_it_works_link(site),
        NavLink {
            label: "Join Founder's Club",
            href: site.checkout_url.clone(),
            kind: LinkKind::External,
        },
    ])
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub site: Rc<SiteConfig>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let site = &props.site;
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            debug!("Mobile menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    // Following a dropdown link should also fold the menu away.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let desktop = desktop_links(site)
        .into_iter()
        .map(|link| {
            let class = match link.kind {
                LinkKind::Anchor => "nav-link",
                LinkKind::External => "nav-cta",
            };
            html! { <a href={link.href} class={class}>{link.label}</a> }
        })
        .collect::<Html>();

    let panel = mobile_panel(*menu, site).map(|links| {
        html! {
            <div class="mobile-menu">
                <div class="mobile-menu-links">
                    { for links.into_iter().map(|link| {
                        let class = match link.kind {
                            LinkKind::Anchor => "mobile-link",
                            LinkKind::External => "mobile-link mobile-link-cta",
                        };
                        html! { <a href={link.href} class={class} onclick={close_menu.clone()}>{link.label}</a> }
                    }) }
                </div>
            </div>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-brand">
                    <div class="nav-logo">
                        <Icon kind={IconKind::Zap} />
                    </div>
                    <span class="nav-brand-name">{&site.brand}</span>
                </div>

                <div class="nav-links">
                    { desktop }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    if menu.is_open() {
                        <Icon kind={IconKind::Close} />
                    } else {
                        <Icon kind={IconKind::Menu} />
                    }
                </button>
            </div>

            { panel.unwrap_or_default() }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(15, 23, 42, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #1e293b;
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 4rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .nav-logo {
                        width: 2rem;
                        height: 2rem;
                        background: #6366f1;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                    }

                    .nav-logo .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .nav-brand-name {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: white;
                    }

                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #cbd5e1;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #818cf8;
                    }

                    .nav-cta {
                        background: #6366f1;
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: all 0.2s ease;
                    }

                    .nav-cta:hover {
                        background: #818cf8;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
                    }

                    .burger-menu {
                        background: none;
                        border: none;
                        color: #cbd5e1;
                        cursor: pointer;
                        padding: 0;
                    }

                    .burger-menu:hover {
                        color: white;
                    }

                    .burger-menu .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .mobile-menu {
                        position: absolute;
                        width: 100%;
                        background: #0f172a;
                        border-top: 1px solid #1e293b;
                    }

                    .mobile-menu-links {
                        padding: 0.5rem 0.5rem 0.75rem;
                    }

                    .mobile-link {
                        display: block;
                        padding: 0.5rem 0.75rem;
                        color: #cbd5e1;
                        font-weight: 500;
                        text-decoration: none;
                    }

                    .mobile-link:hover {
                        color: #818cf8;
                    }

                    .mobile-link-cta {
                        color: #818cf8;
                        font-weight: 700;
                    }

                    @media (min-width: 768px) {
                        .nav-links {
                            display: flex;
                        }

                        .burger-menu,
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
