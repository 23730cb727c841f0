use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use web_sys::{Document, Element, HtmlElement};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::state::menu::MenuState;

struct MobileNav {
    button: Element,
    panel: Element,
    overlay: Element,
    body: Option<HtmlElement>,
    active_class: String,
    state: MenuState,
}

impl MobileNav {
    fn toggle(&mut self) -> Result<()> {
        self.state.toggle();
        let open = self.state.open;
        for el in [&self.button, &self.panel, &self.overlay] {
            dom::set_class(el, &self.active_class, open);
        }
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", self.state.body_overflow())?;
        }
        debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        Ok(())
    }
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let nav = &config.nav;
    let (Some(toggle), Some(panel), Some(overlay)) = (
        dom::query(document, &nav.toggle_selector),
        dom::query(document, &nav.panel_selector),
        document.get_element_by_id(&nav.overlay_id),
    ) else {
        debug!("Mobile navigation markup not found, skipping");
        return Ok(());
    };

    let open = dom::has_class(&panel, &config.active_class);
    let menu = Rc::new(RefCell::new(MobileNav {
        button: toggle.clone(),
        panel,
        overlay: overlay.clone(),
        body: document.body(),
        active_class: config.active_class.clone(),
        state: MenuState::new(open),
    }));

    for target in [&toggle, &overlay] {
        let menu = menu.clone();
        dom::listen(target, "click", move |_| {
            if let Err(e) = menu.borrow_mut().toggle() {
                error!("Failed to toggle mobile menu: {}", e);
            }
        })?;
    }

    info!("Mobile navigation ready");
    Ok(())
}
