mod components;
mod config;
mod pages;
mod router;
mod services;

use std::rc::Rc;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::components::footer::Footer;
use crate::config::AppConfig;
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            tracing::debug!("Using configuration: {:?}", config);
            gloo::utils::document().set_title(&config.site_title);
            || ()
        });
    }

    html! {
        <ContextProvider<Rc<AppConfig>> context={config.clone()}>
            <BrowserRouter>
                <div id="app">
                    <yew_router::Switch<Route> render={switch} />
                    <Footer title={config.site_title.clone()} />
                </div>
            </BrowserRouter>
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
