use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod reveal;
mod components {
    pub mod animated_step;
    pub mod cta;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, site: Rc<SiteConfig>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing site={site} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let site = props.site.clone();

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route| switch(route, site.clone())} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    let site = match SiteConfig::load() {
        Ok(site) => site,
        Err(err) => {
            error!("Not rendering, site configuration is broken: {}", err);
            return;
        }
    };

    info!("Starting {} landing page", site.brand);
    yew::Renderer::<App>::with_props(AppProps { site: Rc::new(site) }).render();
}
