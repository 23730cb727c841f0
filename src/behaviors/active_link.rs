use log::{debug, info};
use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::dom;
use crate::state::nav_link;

/// Marks the navigation link pointing at the current page.
pub fn init(window: &Window, document: &Document, config: &SiteConfig) {
    let pathname = window.location().pathname().unwrap_or_default();
    let current = nav_link::current_page(&pathname, &config.nav.home_page);

    let mut marked = 0;
    for link in dom::query_all(document, &config.nav.link_selector) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if nav_link::links_to(&href, &current) {
            dom::set_class(&link, &config.active_class, true);
            marked += 1;
        }
    }

    if marked == 0 {
        debug!("No navigation link matches '{}'", current);
    } else {
        info!("Highlighted {} navigation link(s) for '{}'", marked, current);
    }
}
