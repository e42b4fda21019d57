use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub loading: bool,
}

pub fn status_label(loading: bool) -> &'static str {
    if loading {
        "Updating..."
    } else {
        "Live Data"
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container header-row">
                <div>
                    <h1>{ &props.title }</h1>
                    <p class="tagline">{ "Aggregating the best of Coral Gables, The Grove, and Miami." }</p>
                </div>
                <div class="status-pill">
                    <span class={classes!("status-icon", props.loading.then_some("spinning"))}>{ "⟳" }</span>
                    { status_label(props.loading) }
                </div>
            </div>
        </header>
    }
}
