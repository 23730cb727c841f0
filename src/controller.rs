use log::{error, info};
use web_sys::{Document, Window};

use crate::behaviors::{
    accordion, active_link, carousel, contact_form, filters, nav_toggle, scroll_reveal,
};
use crate::config::SiteConfig;
use crate::error::Result;

fn report(behavior: &str, outcome: Result<()>) {
    if let Err(e) = outcome {
        error!("Could not set up {}: {}", behavior, e);
    }
}

/// Wires every page behavior against the loaded document. Behaviors whose
/// markup is missing stay disabled; a failure in one does not stop the rest.
pub fn init(window: &Window, document: &Document) {
    let config = SiteConfig::from_document(document);

    report("mobile navigation", nav_toggle::init(document, &config));
    active_link::init(window, document, &config);
    report("scroll reveal", scroll_reveal::init(document, &config));
    report("carousel", carousel::init(window, document, &config));
    report("filters", filters::init(document, &config));
    report("FAQ accordion", accordion::init(document, &config));
    report("contact form", contact_form::init(document, &config));

    info!("Page interactivity initialized");
}
