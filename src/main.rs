//! SMPL NOTEZ Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a subscriber is already installed
    let _ = console_logger::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
