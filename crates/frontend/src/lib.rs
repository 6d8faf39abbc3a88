pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod usecases;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate, narrowed once the config is read
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = shared::config::load_config();
    log::set_max_level(config.logging.level().to_level_filter());
    let catalog = domain::a001_pdf_document::catalog::load_catalog();

    leptos::mount::mount_to_body(move || view! { <app::App config=config catalog=catalog /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
