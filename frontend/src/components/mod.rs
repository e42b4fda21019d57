pub mod city_badge;
pub mod event_card;
pub mod event_grid;
pub mod filter_bar;
pub mod footer;
pub mod header;
