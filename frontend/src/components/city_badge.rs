use shared::City;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CityBadgeProps {
    pub city: City,
}

#[function_component(CityBadge)]
pub fn city_badge(props: &CityBadgeProps) -> Html {
    html! {
        <span class={classes!("city-badge", props.city.badge_class())}>
            { props.city.label() }
        </span>
    }
}
