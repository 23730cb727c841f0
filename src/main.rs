use log::{error, info};
use web_sys::window;

mod config;
mod controller;
mod dom;
mod error;
mod state {
    pub mod accordion;
    pub mod carousel;
    pub mod contact;
    pub mod filters;
    pub mod menu;
    pub mod nav_link;
    pub mod reveal;
}
mod behaviors {
    pub mod accordion;
    pub mod active_link;
    pub mod carousel;
    pub mod contact_form;
    pub mod filters;
    pub mod nav_toggle;
    pub mod scroll_reveal;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page scripts");
    let Some(window) = window() else {
        error!("No window available, nothing to do");
        return;
    };
    let Some(document) = window.document() else {
        error!("No document available, nothing to do");
        return;
    };

    if document.ready_state() != "loading" {
        controller::init(&window, &document);
        return;
    }

    let target = document.clone();
    let outcome = dom::listen(&target, "DOMContentLoaded", move |_| {
        controller::init(&window, &document);
    });
    if let Err(e) = outcome {
        error!("Could not wait for page content: {}", e);
    }
}
