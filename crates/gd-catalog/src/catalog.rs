//! The icon list of the selected group, and search over it.

use gd_extract::Extraction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
    icons: Vec<String>,
    placeholders: bool,
}

impl IconCatalog {
    pub fn from_extraction(extraction: Extraction) -> Self {
        Self {
            icons: extraction.icons,
            placeholders: extraction.used_placeholders,
        }
    }

    pub fn icons(&self) -> &[String] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn contains(&self, icon: &str) -> bool {
        self.icons.iter().any(|candidate| candidate == icon)
    }

    /// True when the names are synthetic stand-ins, not real glyphs.
    pub fn is_placeholder(&self) -> bool {
        self.placeholders
    }

    pub fn filter(&self, term: &str) -> Vec<&str> {
        filter_icons(&self.icons, term)
    }
}

/// Case-insensitive substring search that keeps the input order.
pub fn filter_icons<'a, S: AsRef<str>>(icons: &'a [S], term: &str) -> Vec<&'a str> {
    let needle = term.to_lowercase();
    icons
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|icon| needle.is_empty() || icon.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_is_identity() {
        let icons = vec!["bi-alarm".to_owned(), "bi-moon".to_owned(), "bi-star".to_owned()];
        assert_eq!(filter_icons(&icons, ""), vec!["bi-alarm", "bi-moon", "bi-star"]);
    }

    #[test]
    fn substring_match() {
        assert_eq!(filter_icons(&["bi-star", "bi-moon"], "moon"), vec!["bi-moon"]);
    }

    #[test]
    fn match_ignores_case_and_keeps_order() {
        let icons = ["bi-Star-fill", "bi-moon", "bi-star"];
        assert_eq!(filter_icons(&icons, "STAR"), vec!["bi-Star-fill", "bi-star"]);
        assert!(filter_icons(&icons, "sun").is_empty());
    }

    #[test]
    fn catalog_tracks_placeholder_origin() {
        let catalog = IconCatalog::from_extraction(gd_extract::placeholder_extraction("bi"));
        assert!(catalog.is_placeholder());
        assert_eq!(catalog.len(), 50);
        assert!(catalog.contains("bi-placeholder-7"));
        assert_eq!(catalog.filter("placeholder-4").len(), 11);
    }
}
