use shared::Event;
use yew::prelude::*;

use crate::components::event_card::EventCard;

#[derive(Properties, PartialEq)]
pub struct EventGridProps {
    pub events: Vec<Event>,
    pub fallback_image: AttrValue,
    pub filters_active: bool,
    pub on_clear: Callback<()>,
}

pub fn results_summary(count: usize) -> String {
    format!("{} events found", count)
}

pub fn empty_hint(filters_active: bool) -> &'static str {
    if filters_active {
        "Try adjusting your filters or search terms."
    } else {
        "No upcoming events have been published yet."
    }
}

#[function_component(EventGrid)]
pub fn event_grid(props: &EventGridProps) -> Html {
    if props.events.is_empty() {
        let on_clear = props.on_clear.clone();
        let clear = Callback::from(move |_: MouseEvent| on_clear.emit(()));

        return html! {
            <div class="empty-state">
                <div class="empty-icon">{ "⛃" }</div>
                <h3>{ "No events found" }</h3>
                <p>{ empty_hint(props.filters_active) }</p>
                if props.filters_active {
                    <button class="btn btn-link" onclick={clear}>{ "Clear all filters" }</button>
                }
            </div>
        };
    }

    html! {
        <div class="event-grid">
            { for props.events.iter().map(|event| html! {
                <EventCard
                    key={event.id}
                    event={event.clone()}
                    fallback_image={props.fallback_image.clone()}
                />
            })}
        </div>
    }
}
