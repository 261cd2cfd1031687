//! Icon class discovery from an icon font's demo page.
//!
//! Demo pages list one `.glyph` block per icon. The class name shows up as the
//! text of a `.mls` label and in the class list of the `aria-hidden` element
//! that renders the glyph. Both places are scanned.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Number of synthetic names produced when nothing could be extracted.
pub const PLACEHOLDER_COUNT: usize = 50;

const GLYPH_ROW: &str = ".glyph";
const GLYPH_LABEL: &str = ".mls";
const GLYPH_DISPLAY: &str = "[aria-hidden]";

struct GlyphSelectors {
    row: Selector,
    label: Selector,
    display: Selector,
}

impl GlyphSelectors {
    fn new() -> Option<Self> {
        Some(Self {
            row: Selector::parse(GLYPH_ROW).ok()?,
            label: Selector::parse(GLYPH_LABEL).ok()?,
            display: Selector::parse(GLYPH_DISPLAY).ok()?,
        })
    }
}

/// Result of scanning a demo page, with the fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub icons: Vec<String>,
    pub used_placeholders: bool,
}

/// Collect every class name starting with `prefix` from the glyph rows of
/// `html`. Sorted by byte order, no duplicates, possibly empty.
pub fn extract_icon_classes(html: &str, prefix: &str) -> Vec<String> {
    let Some(selectors) = GlyphSelectors::new() else {
        warn!("glyph selectors failed to parse");
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut found = BTreeSet::new();

    for row in document.select(&selectors.row) {
        if let Some(label) = row.select(&selectors.label).next() {
            let text = label.text().collect::<String>();
            collect_matching(text.split_whitespace(), prefix, &mut found);
        }

        if let Some(display) = row.select(&selectors.display).next() {
            collect_matching(class_tokens(&display), prefix, &mut found);
        }
    }

    debug!(prefix, count = found.len(), "extracted icon classes");
    found.into_iter().collect()
}

/// Deterministic stand-in names: `{prefix}-placeholder-0` .. `-49`.
pub fn placeholder_icons(prefix: &str) -> Vec<String> {
    (0..PLACEHOLDER_COUNT)
        .map(|i| format!("{prefix}-placeholder-{i}"))
        .collect()
}

/// Extract from `html`, falling back to placeholders when nothing matched.
pub fn extract_or_placeholder(html: &str, prefix: &str) -> Extraction {
    let icons = extract_icon_classes(html, prefix);
    if icons.is_empty() {
        warn!(prefix, "no icon classes found in demo page, using placeholders");
        return placeholder_extraction(prefix);
    }

    Extraction {
        icons,
        used_placeholders: false,
    }
}

/// Fallback used when the demo page could not be fetched at all.
pub fn placeholder_extraction(prefix: &str) -> Extraction {
    Extraction {
        icons: placeholder_icons(prefix),
        used_placeholders: true,
    }
}

fn class_tokens<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace()
}

fn collect_matching<'a>(
    tokens: impl Iterator<Item = &'a str>,
    prefix: &str,
    found: &mut BTreeSet<String>,
) {
    for token in tokens {
        if token.starts_with(prefix) {
            found.insert(token.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"
        <html><body>
          <div class="glyph fs1">
            <div class="clearfix bshadow0 pbs">
              <span class="bi-star" aria-hidden="true"></span>
              <span class="mls"> bi-star</span>
            </div>
          </div>
          <div class="glyph fs1">
            <div class="clearfix bshadow0 pbs">
              <span class="bi-moon extra" aria-hidden="true"></span>
              <span class="mls">bi-moon</span>
            </div>
          </div>
          <div class="glyph fs1">
            <div class="clearfix bshadow0 pbs">
              <span class="other-sun" aria-hidden="true"></span>
              <span class="mls">bi-alarm</span>
            </div>
          </div>
          <div class="not-a-glyph">
            <span class="bi-hidden" aria-hidden="true"></span>
          </div>
        </body></html>
    "#;

    #[test]
    fn collects_label_and_display_classes_sorted_and_unique() {
        let icons = extract_icon_classes(DEMO, "bi-");
        assert_eq!(icons, vec!["bi-alarm", "bi-moon", "bi-star"]);
    }

    #[test]
    fn every_entry_carries_the_prefix() {
        let icons = extract_icon_classes(DEMO, "bi-m");
        assert_eq!(icons, vec!["bi-moon"]);
        assert!(icons.iter().all(|icon| icon.starts_with("bi-m")));
    }

    #[test]
    fn ignores_rows_without_glyph_marker() {
        let icons = extract_icon_classes(DEMO, "bi-");
        assert!(!icons.iter().any(|icon| icon == "bi-hidden"));
    }

    #[test]
    fn ordering_is_ordinal_not_locale() {
        let html = r#"
            <div class="glyph"><span class="mls">ic-b</span></div>
            <div class="glyph"><span class="mls">ic-B</span></div>
            <div class="glyph"><span class="mls">ic-a</span></div>
        "#;
        assert_eq!(extract_icon_classes(html, "ic-"), vec!["ic-B", "ic-a", "ic-b"]);
    }

    #[test]
    fn empty_document_falls_back_to_fifty_placeholders() {
        let extraction = extract_or_placeholder("", "bi");
        assert!(extraction.used_placeholders);
        assert_eq!(extraction.icons.len(), PLACEHOLDER_COUNT);
        assert_eq!(extraction.icons[0], "bi-placeholder-0");
        assert_eq!(extraction.icons[49], "bi-placeholder-49");
    }

    #[test]
    fn malformed_markup_falls_back_to_placeholders() {
        let extraction = extract_or_placeholder("<div class=\"glyph\"><span class=", "icon");
        assert!(extraction.used_placeholders);
        for (i, icon) in extraction.icons.iter().enumerate() {
            assert_eq!(icon, &format!("icon-placeholder-{i}"));
        }
    }

    #[test]
    fn real_matches_do_not_use_placeholders() {
        let extraction = extract_or_placeholder(DEMO, "bi-");
        assert!(!extraction.used_placeholders);
        assert_eq!(extraction.icons.len(), 3);
    }
}
