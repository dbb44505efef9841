// src/core/html.rs
// Thin helpers over `scraper` for tolerant field extraction.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Visible text of an element, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first match under `el`, or "" when nothing matches.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> String {
    el.select(sel).next().map(text_of).unwrap_or_default()
}

/// Attribute of the first match under `el`; `None` if either is missing.
pub fn first_attr<'a>(el: ElementRef<'a>, sel: &Selector, attr: &str) -> Option<&'a str> {
    el.select(sel).next()?.value().attr(attr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn first_text_and_attr_tolerate_missing_nodes() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><h2> Data  <b>Engineer</b> </h2><time datetime="2021-04-08">Apr 8</time></div>"#,
        );
        let card_sel = selector("div.card").unwrap();
        let card = doc.select(&card_sel).next().unwrap();

        assert_eq!(first_text(card, &selector("h2").unwrap()), "Data Engineer");
        assert_eq!(first_text(card, &selector("h3").unwrap()), "");
        assert_eq!(first_attr(card, &selector("time").unwrap(), "datetime"), Some("2021-04-08"));
        assert_eq!(first_attr(card, &selector("time").unwrap(), "title"), None);
        assert_eq!(first_attr(card, &selector("p").unwrap(), "datetime"), None);
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("div[["), Err(Error::Selector(_))));
    }

    #[test]
    fn nested_text_nodes_join_with_single_spaces() {
        let doc = Html::parse_fragment("<div><h2>Data <b>Engineer</b>\n  (Python)</h2></div>");
        let root = doc.root_element();
        let h2 = selector("h2").unwrap();
        assert_eq!(first_text(root, &h2), "Data Engineer (Python)");
    }
}
