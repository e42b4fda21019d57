use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub title: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <p>{ format!("© 2025 {}. Data aggregated from public sources.", props.title) }</p>
        </footer>
    }
}
