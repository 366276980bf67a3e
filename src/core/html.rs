// src/core/html.rs
//! The parser's view of an HTML element.
//!
//! `specs::schedule` only needs class tests, text and child access, so it is
//! written against [`Element`] and never sees `scraper` types. The `scraper`
//! adapter below is the production implementation; tests can supply their own.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("tr selector"));

/// Minimal read-only DOM element.
pub trait Element: Sized {
    /// CSS class membership (exact, case-sensitive).
    fn has_class(&self, class: &str) -> bool;

    /// Visible text, whitespace collapsed and trimmed.
    fn plain_text(&self) -> String;

    /// Element children in document order (text nodes skipped).
    fn elements(&self) -> Vec<Self>;

    fn nth_element(&self, n: usize) -> Option<Self> {
        self.elements().into_iter().nth(n)
    }

    /// `self` or its first descendant (document order) carrying `class`.
    fn first_with_class(&self, class: &str) -> Option<Self>;
}

impl<'a> Element for ElementRef<'a> {
    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn plain_text(&self) -> String {
        normalize_ws(&self.text().collect::<String>())
    }

    fn elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn first_with_class(&self, class: &str) -> Option<Self> {
        self.descendants()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().classes().any(|c| c == class))
    }
}

/// Parse a response body. Bare `<tr>` fragments get a `<table>` wrapper,
/// otherwise the HTML5 tree builder discards them.
pub fn parse_document(html: &str) -> Html {
    if to_lower(html).contains("<table") {
        Html::parse_document(html)
    } else {
        Html::parse_document(&join!("<table>", html, "</table>"))
    }
}

/// Every `<tr>` in document order.
pub fn table_rows(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&TR).collect()
}

/// Fast ASCII-only lowercasing for tag matching.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_rows_survive_parsing() {
        let doc = parse_document(r#"<tr class="divide"><td>1 сентября</td></tr><tr><td>x</td></tr>"#);
        let rows = table_rows(&doc);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].has_class("divide"));
        assert_eq!(rows[0].plain_text(), "1 сентября");
    }

    #[test]
    fn wrapped_rows_are_not_double_wrapped() {
        let doc = parse_document("<html><body><TABLE><tr><td>a</td></tr></TABLE></body></html>");
        assert_eq!(table_rows(&doc).len(), 1);
    }

    #[test]
    fn first_with_class_includes_self_and_descendants() {
        let doc = parse_document(
            r#"<tr class="row"><td class="t">9:00 - 10:30</td><td><div class="item"><span>1. Math</span><span>x</span></div></td></tr>"#,
        );
        let row = table_rows(&doc)[0];
        assert!(row.first_with_class("row").is_some());
        let time = row.first_with_class("t").unwrap();
        assert_eq!(time.plain_text(), "9:00 - 10:30");
        let item = row.first_with_class("item").unwrap();
        assert_eq!(item.elements().len(), 2);
        assert_eq!(item.nth_element(0).unwrap().plain_text(), "1. Math");
        assert!(item.nth_element(2).is_none());
        assert!(row.first_with_class("missing").is_none());
    }

    #[test]
    fn has_class_is_exact() {
        let doc = parse_document(r#"<tr class="shedule-weekday-row shedule-weekday-first-row"><td></td></tr>"#);
        let row = table_rows(&doc)[0];
        assert!(row.has_class("shedule-weekday-row"));
        assert!(row.has_class("shedule-weekday-first-row"));
        assert!(!row.has_class("shedule-weekday"));
    }

    #[test]
    fn text_is_normalized() {
        let doc = parse_document("<tr><td>  Лекция\n\t <b>ауд.</b>&nbsp;101 </td></tr>");
        assert_eq!(table_rows(&doc)[0].plain_text(), "Лекция ауд. 101");
    }
}
