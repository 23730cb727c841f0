use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::config::{FilterConfig, SiteConfig};
use crate::dom;
use crate::error::Result;
use crate::state::filters::{ActiveFilters, CardAttributes, Dimension};

struct ProductFilter {
    cards: Vec<Element>,
    active: ActiveFilters,
    config: FilterConfig,
}

impl ProductFilter {
    fn attributes(&self, card: &Element) -> CardAttributes {
        CardAttributes {
            category: card.get_attribute(&self.config.category_attr),
            surface: card.get_attribute(&self.config.surface_attr),
            problem: card.get_attribute(&self.config.problem_attr),
        }
    }

    fn update(&mut self, dimension: Dimension, value: String) {
        self.active.set(dimension, value);
        debug!("Filter {:?} set to '{}'", dimension, self.active.get(dimension));
        self.apply();
    }

    fn apply(&self) {
        let mut shown = 0;
        for card in &self.cards {
            let visible = self.active.matches(&self.attributes(card));
            dom::set_class(card, &self.config.hidden_class, !visible);
            shown += usize::from(visible);
        }
        debug!("{} of {} card(s) visible", shown, self.cards.len());
    }
}

fn bind_select(
    filter: &Rc<RefCell<ProductFilter>>,
    container: &Element,
    selector: &str,
    dimension: Dimension,
) -> Result<()> {
    let Some(select) = dom::query_in(container, selector)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        debug!("No {:?} dropdown in filter container", dimension);
        return Ok(());
    };

    let filter = filter.clone();
    let source = select.clone();
    dom::listen(&select, "change", move |_| {
        filter.borrow_mut().update(dimension, source.value());
    })
}

/// Shows only the cards that match every active filter.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let selectors = &config.filters;
    let Some(container) = dom::query(document, &selectors.container_selector) else {
        debug!("No filter container on this page");
        return Ok(());
    };

    let cards = dom::query_all(document, &selectors.card_selector);
    let card_count = cards.len();
    let filter = Rc::new(RefCell::new(ProductFilter {
        cards,
        active: ActiveFilters::new(selectors),
        config: selectors.clone(),
    }));

    let buttons = Rc::new(dom::query_all_in(&container, &selectors.category_button_selector));
    for button in buttons.iter() {
        let filter = filter.clone();
        let group = buttons.clone();
        let clicked = button.clone();
        let active_class = config.active_class.clone();
        let value_attr = selectors.button_value_attr.clone();
        dom::listen(button, "click", move |_| {
            for other in group.iter() {
                dom::set_class(other, &active_class, false);
            }
            dom::set_class(&clicked, &active_class, true);
            let value = clicked.get_attribute(&value_attr).unwrap_or_default();
            filter.borrow_mut().update(Dimension::Category, value);
        })?;
    }

    bind_select(&filter, &container, &selectors.surface_select_selector, Dimension::Surface)?;
    bind_select(&filter, &container, &selectors.problem_select_selector, Dimension::Problem)?;

    info!(
        "Filters ready: {} card(s), {} category button(s)",
        card_count,
        buttons.len()
    );
    Ok(())
}
