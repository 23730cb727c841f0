use log::{debug, error, info};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::config::{ContactConfig, SiteConfig};
use crate::dom;
use crate::error::Result;
use crate::state::contact::{Field, Slot, SubmitOutcome, Submission};

struct ContactForm {
    form: HtmlFormElement,
    document: Document,
    config: ContactConfig,
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

impl ContactForm {
    fn field(&self, field: Field) -> Option<Element> {
        let id = match field {
            Field::Name => &self.config.name_id,
            Field::Email => &self.config.email_id,
            Field::Subject => &self.config.subject_id,
            Field::Message => &self.config.message_id,
        };
        self.document.get_element_by_id(id)
    }

    /// The display element right after a field, if it is an error slot.
    fn error_slot(&self, field: Field) -> Option<HtmlElement> {
        self.field(field)?
            .next_element_sibling()
            .filter(|el| dom::has_class(el, &self.config.error_class))?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn success_slot(&self) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(&self.config.success_id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn submission(&self) -> Submission {
        let value = |field| {
            self.field(field)
                .map(|el| field_value(&el))
                .unwrap_or_default()
        };
        Submission {
            name: value(Field::Name),
            email: value(Field::Email),
            subject: value(Field::Subject),
            message: value(Field::Message),
        }
    }

    fn submit(&self) -> Result<()> {
        let outcome = SubmitOutcome::new(&self.submission(), &self.config.messages);

        for field in Field::ALL {
            let Some(slot) = self.error_slot(field) else {
                continue;
            };
            match outcome.slot(field) {
                Slot::Hidden => dom::set_style(&slot, "display", "none")?,
                Slot::Shown(message) => {
                    slot.set_text_content(Some(message));
                    dom::set_style(&slot, "display", "block")?;
                }
            }
        }

        if let Some(success) = self.success_slot() {
            match outcome.success() {
                Some(message) => {
                    success.set_text_content(Some(message));
                    dom::set_style(&success, "display", "block")?;
                }
                None => dom::set_style(&success, "display", "none")?,
            }
        }

        if !outcome.clears_form() {
            debug!("Contact form rejected with {} error(s)", outcome.errors().len());
            return Ok(());
        }
        // Nothing is sent anywhere; the submission is only simulated
        self.form.reset();
        info!("Contact form accepted");
        Ok(())
    }
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let contact = &config.contact;
    let Some(form) = document.get_element_by_id(&contact.form_id) else {
        debug!("No contact form on this page");
        return Ok(());
    };
    let form: HtmlFormElement = dom::cast(form, &contact.form_id)?;

    let handler = ContactForm {
        form: form.clone(),
        document: document.clone(),
        config: contact.clone(),
    };
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = handler.submit() {
            error!("Contact form submission failed: {}", e);
        }
    })?;

    info!("Contact form validation ready");
    Ok(())
}
