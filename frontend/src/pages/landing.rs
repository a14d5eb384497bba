use std::rc::Rc;

use yew::prelude::*;

use crate::components::nav::Navigation;
use crate::config::SiteConfig;
use crate::pages::{footer::Footer, hero::Hero, how_it_works::HowItWorks};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: Rc<SiteConfig>,
}

/// The whole page, top to bottom: navigation, hero, explainer, footer.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <div class="landing-page">
            <Navigation site={props.site.clone()} />
            <main>
                <Hero site={props.site.clone()} />
                <HowItWorks site={props.site.clone()} />
            </main>
            <Footer site={props.site.clone()} />

            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: #0f172a;
                    }

                    .landing-page {
                        min-height: 100vh;
                        background: #0f172a;
                        color: white;
                        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                    }

                    .landing-page ::selection {
                        background: rgba(99, 102, 241, 0.3);
                        color: #c7d2fe;
                    }

                    .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::nav::{desktop_links, mobile_panel, MenuState};
    use crate::pages::{footer::footer_columns, hero::join_button_props};

    fn checkout_hrefs(site: &SiteConfig) -> Vec<String> {
        let mut open = MenuState::default();
        open.open();
        let panel = mobile_panel(open, site).unwrap();
        let footer = footer_columns(site);
        vec![
            desktop_links(site)[1].href.clone(),
            panel[1].href.clone(),
            join_button_props(site).checkout_url.to_string(),
            footer[0].links[1].href.clone(),
        ]
    }

    #[test]
    fn every_join_link_points_at_checkout() {
        let site = SiteConfig::load().unwrap();
        for href in checkout_hrefs(&site) {
            assert_eq!(href, site.checkout_url);
        }
    }

    #[test]
    fn changing_checkout_moves_all_links() {
        let mut site = SiteConfig::load().unwrap();
        site.checkout_url = "https://pay.example.com/founders".to_string();
        let hrefs = checkout_hrefs(&site);
        assert_eq!(hrefs.len(), 4);
        assert!(hrefs.iter().all(|href| href == "https://pay.example.com/founders"));
    }
}
