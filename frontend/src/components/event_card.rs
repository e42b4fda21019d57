use shared::Event;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::components::city_badge::CityBadge;

/// Metro area shown next to every event date
const REGION: &str = "Miami";

/// Decides whether a failed image should be pointed at the placeholder.
/// `current_src` is the `src` attribute as written, not the resolved URL.
pub fn needs_fallback(current_src: Option<&str>, fallback: &str) -> bool {
    current_src != Some(fallback)
}

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
    pub fallback_image: AttrValue,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;

    // Swap in the placeholder once; a broken placeholder must not loop.
    let on_image_error = {
        let fallback = props.fallback_image.clone();
        Callback::from(move |e: web_sys::Event| {
            let Some(img) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
            else {
                return;
            };
            let current = img.get_attribute("src");
            if needs_fallback(current.as_deref(), &fallback) {
                tracing::debug!("Image failed to load, using placeholder: {:?}", current);
                img.set_src(&fallback);
            }
        })
    };

    html! {
        <div class="event-card">
            <div class="event-image">
                <img src={event.image.clone()} alt={event.title.clone()} onerror={on_image_error} />
                <div class="event-badge">
                    <CityBadge city={event.city.clone()} />
                </div>
            </div>

            <div class="event-body">
                <div class="event-date">
                    <span class="icon">{ "📅" }</span>
                    { &event.date }
                    <span class="divider">{ "|" }</span>
                    { REGION }
                </div>

                <h3 class="event-title">{ &event.title }</h3>

                <p class="event-description">{ event.description_or_default() }</p>

                <div class="event-meta">
                    <span class="icon">{ "📍" }</span>
                    <span class="truncate">{ event.city.label() }</span>
                    if let Some(source) = &event.source {
                        <span class="event-source">{ format!("via {}", source) }</span>
                    }
                </div>

                if let Some(url) = &event.url {
                    <a
                        class="btn btn-more"
                        href={url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { "More Info ↗" }
                    </a>
                }
            </div>
        </div>
    }
}
