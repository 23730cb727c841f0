use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block that overrides
/// any subset of [`SiteConfig`].
pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// Every selector, marker class and message the page behaviors depend on.
///
/// Defaults match the site's markup, so a page only needs a config block when
/// it deviates from it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Marker class toggled on menus, links, filter buttons and FAQ items.
    pub active_class: String,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
    pub filters: FilterConfig,
    pub faq: FaqConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub panel_selector: String,
    pub overlay_id: String,
    pub link_selector: String,
    /// Page identifier used when the location path ends in `/`.
    pub home_page: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub track_selector: String,
    pub prev_selector: String,
    pub next_selector: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub container_selector: String,
    pub card_selector: String,
    pub category_button_selector: String,
    pub surface_select_selector: String,
    pub problem_select_selector: String,
    pub hidden_class: String,
    /// Attribute on category buttons carrying the category value.
    pub button_value_attr: String,
    pub category_attr: String,
    pub surface_attr: String,
    pub problem_attr: String,
    pub category_all: String,
    pub surface_all: String,
    pub problem_all: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    pub item_selector: String,
    pub question_selector: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub success_id: String,
    pub error_class: String,
    pub name_id: String,
    pub email_id: String,
    pub subject_id: String,
    pub message_id: String,
    pub messages: ContactMessages,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactMessages {
    pub name_missing: String,
    pub email_missing: String,
    pub email_invalid: String,
    pub subject_missing: String,
    pub message_missing: String,
    pub success: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            carousel: CarouselConfig::default(),
            filters: FilterConfig::default(),
            faq: FaqConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".menu-toggle".to_string(),
            panel_selector: ".main-nav".to_string(),
            overlay_id: "nav-overlay".to_string(),
            link_selector: ".main-nav a".to_string(),
            home_page: "index.html".to_string(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track_selector: ".carousel-track".to_string(),
            prev_selector: ".carousel-btn.prev".to_string(),
            next_selector: ".carousel-btn.next".to_string(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            container_selector: ".filtros-container".to_string(),
            card_selector: ".produto-card".to_string(),
            category_button_selector:
                ".filtro-grupo[data-filter-group=\"categoria\"] .filtro-btn".to_string(),
            surface_select_selector: ".filtro-select[data-filter-group=\"superficie\"]"
                .to_string(),
            problem_select_selector: ".filtro-select[data-filter-group=\"problema\"]".to_string(),
            hidden_class: "hidden".to_string(),
            button_value_attr: "data-filter".to_string(),
            category_attr: "data-categoria".to_string(),
            surface_attr: "data-superficie".to_string(),
            problem_attr: "data-problema".to_string(),
            category_all: "todos".to_string(),
            surface_all: "todas".to_string(),
            problem_all: "todos".to_string(),
        }
    }
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            item_selector: ".faq-item".to_string(),
            question_selector: ".faq-pergunta".to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contato-form".to_string(),
            success_id: "form-success".to_string(),
            error_class: "form-error".to_string(),
            name_id: "nome".to_string(),
            email_id: "email".to_string(),
            subject_id: "assunto".to_string(),
            message_id: "mensagem".to_string(),
            messages: ContactMessages::default(),
        }
    }
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            name_missing: "Por favor, preencha seu nome.".to_string(),
            email_missing: "Por favor, preencha seu e-mail.".to_string(),
            email_invalid: "Por favor, insira um e-mail válido.".to_string(),
            subject_missing: "Por favor, selecione um assunto.".to_string(),
            message_missing: "Por favor, escreva sua mensagem.".to_string(),
            success: "Mensagem enviada com sucesso! Entraremos em contato em breve.".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses a JSON override block. Fields left out keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Loads the config from the page's `#site-config` block, falling back to
    /// defaults when the block is absent or malformed.
    pub fn from_document(document: &Document) -> Self {
        let raw = match document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Self::default(),
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed #{} block: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }
        }
    }
}
