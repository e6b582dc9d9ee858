use leptos::prelude::*;

use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger already initialized");
    log::info!("mounting corruption definitions explorer");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
