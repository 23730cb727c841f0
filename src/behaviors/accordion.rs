use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::state::accordion::Accordion;

struct FaqGroup {
    items: Vec<Element>,
    active_class: String,
    state: Accordion,
}

impl FaqGroup {
    fn click(&mut self, item: usize) {
        self.state.click(item);
        for (i, el) in self.items.iter().enumerate() {
            dom::set_class(el, &self.active_class, self.state.is_open(i));
        }
        debug!("FAQ open item: {:?}", self.state.open_item());
    }
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let items = dom::query_all(document, &config.faq.item_selector);
    if items.is_empty() {
        debug!("No FAQ items on this page");
        return Ok(());
    }

    let open = items
        .iter()
        .position(|item| dom::has_class(item, &config.active_class));
    let questions: Vec<_> = items
        .iter()
        .map(|item| dom::query_in(item, &config.faq.question_selector))
        .collect();
    let group = Rc::new(RefCell::new(FaqGroup {
        items,
        active_class: config.active_class.clone(),
        state: Accordion::new(open),
    }));

    for (i, question) in questions.iter().enumerate() {
        let Some(question) = question else {
            warn!("FAQ item {} has no question element, skipping", i);
            continue;
        };
        let group = group.clone();
        dom::listen(question, "click", move |_| group.borrow_mut().click(i))?;
    }

    info!("FAQ accordion ready with {} item(s)", questions.len());
    Ok(())
}
