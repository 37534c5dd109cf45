use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod format_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod view_state;

/// Wire up logging and mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "Dashboard starting",
    );

    leptos::mount_to_body(app::App);
}
