use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::state::carousel::{css_px, relayout, CarouselState};

struct Carousel {
    window: Window,
    track: HtmlElement,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    item_count: usize,
    /// `None` until the items can be measured.
    state: Option<CarouselState>,
}

/// Rendered width of the first item including its horizontal margins.
fn item_width(window: &Window, track: &HtmlElement) -> f64 {
    let Some(first) = track
        .first_element_child()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return 0.0;
    };

    let margins = window
        .get_computed_style(&first)
        .ok()
        .flatten()
        .map(|style| {
            let px = |prop: &str| css_px(&style.get_property_value(prop).unwrap_or_default());
            px("margin-left") + px("margin-right")
        })
        .unwrap_or(0);

    f64::from(first.offset_width() + margins)
}

fn viewport_width(track: &HtmlElement) -> f64 {
    track
        .parent_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_width()))
        .unwrap_or(0.0)
}

fn button(document: &Document, selector: &str) -> Option<HtmlButtonElement> {
    dom::query(document, selector).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

impl Carousel {
    fn render(&self) -> Result<()> {
        let Some(state) = &self.state else {
            return Ok(());
        };
        dom::set_style(&self.track, "transform", &state.transform())?;
        if let Some(prev) = &self.prev {
            prev.set_disabled(state.prev_disabled());
        }
        if let Some(next) = &self.next {
            next.set_disabled(state.next_disabled());
        }
        Ok(())
    }

    fn step(&mut self, forward: bool) -> Result<()> {
        let Some(state) = &mut self.state else {
            return Ok(());
        };
        if forward {
            state.next();
        } else {
            state.prev();
        }
        debug!("Carousel at {}/{}", state.index(), state.max_index());
        self.render()
    }

    fn relayout(&mut self) -> Result<()> {
        let width = item_width(&self.window, &self.track);
        relayout(
            &mut self.state,
            self.item_count,
            width,
            viewport_width(&self.track),
        );
        if let Some(state) = &self.state {
            debug!(
                "Carousel relaid out: item width {}px, max index {}",
                state.item_width(),
                state.max_index()
            );
        }
        self.render()
    }
}

fn bind_step(carousel: &Rc<RefCell<Carousel>>, control: &Element, forward: bool) -> Result<()> {
    let carousel = carousel.clone();
    dom::listen(control, "click", move |_| {
        if let Err(e) = carousel.borrow_mut().step(forward) {
            error!("Failed to move carousel: {}", e);
        }
    })
}

pub fn init(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let selectors = &config.carousel;
    let Some(track) = dom::query(document, &selectors.track_selector) else {
        debug!("No carousel on this page");
        return Ok(());
    };
    let track: HtmlElement = dom::cast(track, &selectors.track_selector)?;

    let item_count = track.children().length() as usize;
    if item_count == 0 {
        warn!("Carousel track has no items, leaving it inert");
        return Ok(());
    }
    let state = CarouselState::new(item_count, item_width(window, &track), viewport_width(&track));
    if state.is_none() {
        debug!("Carousel items not measurable yet, waiting for a resize");
    }

    let prev = button(document, &selectors.prev_selector);
    let next = button(document, &selectors.next_selector);
    let carousel = Rc::new(RefCell::new(Carousel {
        window: window.clone(),
        track,
        prev: prev.clone(),
        next: next.clone(),
        item_count,
        state,
    }));

    if let Some(next) = &next {
        bind_step(&carousel, next, true)?;
    }
    if let Some(prev) = &prev {
        bind_step(&carousel, prev, false)?;
    }

    {
        let carousel = carousel.clone();
        dom::listen(window, "resize", move |_| {
            if let Err(e) = carousel.borrow_mut().relayout() {
                error!("Failed to lay out carousel: {}", e);
            }
        })?;
    }

    let carousel = carousel.borrow();
    carousel.render()?;
    info!(
        "Carousel ready with {} item(s), max index {:?}",
        item_count,
        carousel.state.as_ref().map(CarouselState::max_index)
    );
    Ok(())
}
