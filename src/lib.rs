use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::config;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::browser::{Page, end_session, start_session};
use crate::infrastructure::services::{BrowserClock, ConsoleLogger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Wire up logging and the session stub, then mount the page the URL names
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_clock(Box::new(BrowserClock));
    domain::logging::init_logger(Box::new(ConsoleLogger::new(config().min_log_level())));

    start_session();

    match Page::current() {
        Some(page) => {
            get_logger().info(
                LogComponent::Presentation("Initialize"),
                &format!("🚀 Mounting {page:?} page"),
            );
            mount_to_body(move || view! { <App page=page /> });
        }
        None => get_logger().debug(
            LogComponent::Presentation("Initialize"),
            "Unrecognized page, nothing to mount",
        ),
    }
}

/// Clear the session and return to the landing page
#[wasm_bindgen]
pub fn logout() {
    end_session();
}
