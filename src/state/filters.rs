use crate::config::FilterConfig;

/// One of the three independent filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Category,
    Surface,
    Problem,
}

/// A card's value in each dimension, as read from its data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAttributes {
    pub category: Option<String>,
    pub surface: Option<String>,
    pub problem: Option<String>,
}

/// The active value of every dimension along with each dimension's
/// "show everything" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilters {
    category: String,
    surface: String,
    problem: String,
    category_all: String,
    surface_all: String,
    problem_all: String,
}

impl ActiveFilters {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            category: config.category_all.clone(),
            surface: config.surface_all.clone(),
            problem: config.problem_all.clone(),
            category_all: config.category_all.clone(),
            surface_all: config.surface_all.clone(),
            problem_all: config.problem_all.clone(),
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) {
        let value = value.into();
        match dimension {
            Dimension::Category => self.category = value,
            Dimension::Surface => self.surface = value,
            Dimension::Problem => self.problem = value,
        }
    }

    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Surface => &self.surface,
            Dimension::Problem => &self.problem,
        }
    }

    /// A card is shown only if every dimension matches, where a dimension
    /// matches when its filter is the sentinel or equals the card's value.
    pub fn matches(&self, card: &CardAttributes) -> bool {
        fn accepts(active: &str, all: &str, value: Option<&str>) -> bool {
            active == all || value == Some(active)
        }

        accepts(&self.category, &self.category_all, card.category.as_deref())
            && accepts(&self.surface, &self.surface_all, card.surface.as_deref())
            && accepts(&self.problem, &self.problem_all, card.problem.as_deref())
    }
}
