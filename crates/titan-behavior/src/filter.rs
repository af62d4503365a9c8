//! Project grid category filter.

/// Which project items a filter button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    /// Every item, whatever its category.
    All,
    /// Only items whose `data-category` equals this value.
    Category(String),
}

impl ProjectFilter {
    /// Decode a button's `data-filter` attribute.
    ///
    /// A missing attribute matches nothing but uncategorized items.
    #[must_use]
    pub fn from_data(filter: Option<&str>) -> Self {
        match filter {
            Some("all") => Self::All,
            Some(category) => Self::Category(category.to_owned()),
            None => Self::Category(String::new()),
        }
    }

    /// Whether an item with `category` stays visible.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category.unwrap_or_default() == wanted,
        }
    }
}
