use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::{js_message, BindError, Result};
use crate::state::reveal;

/// Adds the visible marker to every reveal element once it scrolls into view.
/// The marker is never taken off again.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let targets = dom::query_all(document, &config.reveal.selector);
    if targets.is_empty() {
        debug!("No reveal elements on this page");
        return Ok(());
    }

    let visible_class = config.reveal.visible_class.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let visible = reveal::visible_after(
                    dom::has_class(&target, &visible_class),
                    entry.is_intersecting(),
                );
                dom::set_class(&target, &visible_class, visible);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| BindError::Observer(js_message(&e)))?;
    // The observer keeps watching for the whole page view
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }

    info!("Watching {} reveal element(s)", targets.len());
    Ok(())
}
