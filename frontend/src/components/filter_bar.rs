use chrono::NaiveDate;
use shared::filter::{CityFilter, DateRange, ALL_CITIES};
use shared::models::DATE_FORMAT;
use shared::{City, EventFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: EventFilter,
    pub on_change: Callback<EventFilter>,
}

/// Value for an `<input type="date">`; empty when the bound is open
pub fn date_input_value(day: Option<NaiveDate>) -> String {
    day.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_search = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(EventFilter {
                query: input.value(),
                ..filter.clone()
            });
        })
    };

    let on_city = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(EventFilter {
                city: CityFilter::from_select(&select.value()),
                ..filter.clone()
            });
        })
    };

    let start_value = date_input_value(props.filter.dates.start);
    let end_value = date_input_value(props.filter.dates.end);

    let on_start = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        let end_value = end_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(EventFilter {
                dates: DateRange::from_inputs(&input.value(), &end_value),
                ..filter.clone()
            });
        })
    };

    let on_end = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        let start_value = start_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(EventFilter {
                dates: DateRange::from_inputs(&start_value, &input.value()),
                ..filter.clone()
            });
        })
    };

    let selected = props.filter.city.select_value().to_string();
    let cities = City::KNOWN;

    html! {
        <div class="filter-panel">
            <div class="filter-field">
                <label>{ "Search" }</label>
                <input
                    type="text"
                    placeholder="Jazz, Festival, Art..."
                    value={props.filter.query.clone()}
                    oninput={on_search}
                />
            </div>

            <div class="filter-field">
                <label>{ "Filter by City" }</label>
                <select onchange={on_city}>
                    <option value={ALL_CITIES} selected={selected == ALL_CITIES}>{ "All Cities" }</option>
                    { for cities.iter().map(|city| html! {
                        <option value={city.label().to_string()} selected={selected == city.label()}>
                            { city.option_label() }
                        </option>
                    })}
                </select>
            </div>

            <div class="filter-field">
                <label>{ "From" }</label>
                <input type="date" value={start_value} oninput={on_start} />
            </div>

            <div class="filter-field">
                <label>{ "To" }</label>
                <input type="date" value={end_value} oninput={on_end} />
            </div>
        </div>
    }
}
