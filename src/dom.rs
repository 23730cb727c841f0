use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

use crate::error::{js_message, BindError, Result};

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Casts a queried element, naming the selector on failure.
pub fn cast<T: JsCast>(element: Element, selector: &str) -> Result<T> {
    element
        .dyn_into::<T>()
        .map_err(|_| BindError::Cast(selector.to_string()))
}

/// Attaches `handler` for the rest of the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener {
            event: event.to_string(),
            message: js_message(&e),
        })?;
    // Page behaviors are never torn down
    callback.forget();
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// `DOMTokenList` rejects empty tokens and tokens containing whitespace.
fn is_class_token(class: &str) -> bool {
    !class.is_empty() && !class.contains(|c: char| c.is_ascii_whitespace())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if !is_class_token(class) {
        warn!("Ignoring invalid class name '{}'", class);
        return;
    }
    let list = element.class_list();
    let outcome = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = outcome {
        warn!("Failed to update class '{}': {}", class, js_message(&e));
    }
}

/// Sets an inline style property; an empty value removes it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    let style = element.style();
    let outcome = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    outcome.map_err(|e| BindError::Style {
        property: property.to_string(),
        message: js_message(&e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tokens() {
        assert!(is_class_token("active"));
        assert!(is_class_token("is-open"));
        assert!(!is_class_token(""));
        assert!(!is_class_token(" "));
        assert!(!is_class_token("is open"));
        assert!(!is_class_token("visible\t"));
    }
}
