use std::rc::Rc;

use shared::{Event, EventFilter};
use yew::prelude::*;

use crate::components::event_grid::{results_summary, EventGrid};
use crate::components::filter_bar::FilterBar;
use crate::components::header::Header;
use crate::config::AppConfig;
use crate::services::events::EventsService;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let events = use_state(|| Rc::new(Vec::<Event>::new()));
    let loading = use_state(|| true);
    let error = use_state(|| None::<&'static str>);
    let filter = use_state(EventFilter::default);

    // Load once on mount
    {
        let events = events.clone();
        let loading = loading.clone();
        let error = error.clone();
        let config = config.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match EventsService::fetch_events(&config).await {
                    Ok(loaded) => {
                        tracing::info!("Loaded {} events from {}", loaded.len(), config.events_url);
                        events.set(Rc::new(loaded));
                    }
                    Err(e) => {
                        tracing::error!("Error fetching events: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let filtered = use_memo(
        ((*events).clone(), (*filter).clone()),
        |(events, filter)| filter.apply(events),
    );

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: EventFilter| {
            tracing::debug!("Filter changed: {:?}", next);
            filter.set(next);
        })
    };

    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: ()| filter.set(EventFilter::cleared()))
    };

    let content = if *loading {
        html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Scraping latest events..." }</p>
            </div>
        }
    } else if let Some(message) = *error {
        html! {
            <div class="error">
                <span class="icon">{ "⚠" }</span>
                { message }
            </div>
        }
    } else {
        html! {
            <EventGrid
                events={(*filtered).clone()}
                fallback_image={config.fallback_image_url.clone()}
                filters_active={!filter.is_empty()}
                on_clear={on_clear}
            />
        }
    };

    html! {
        <>
            <Header title={config.site_title.clone()} loading={*loading} />

            <div class="container filters-wrap">
                <FilterBar filter={(*filter).clone()} on_change={on_filter_change} />
            </div>

            <main class="container">
                <div class="results-header">
                    <h2>{ filter.heading() }</h2>
                    <span class="results-count">{ results_summary(filtered.len()) }</span>
                </div>
                { content }
            </main>
        </>
    }
}
