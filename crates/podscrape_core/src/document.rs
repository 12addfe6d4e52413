//! Minimal read-only view over a parsed page.
//!
//! Extraction code only needs three capabilities: walk the elements below a
//! node in document order, read an attribute and read the concatenated text.
//! `DocNode` captures exactly that, so the same extraction logic runs against
//! `scraper` trees and hand-built fixture trees.

use scraper::{ElementRef, Html};

pub trait DocNode: Clone + Sized {
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Text nodes below this node in document order, untrimmed.
    fn text_fragments(&self) -> Vec<&str>;

    /// All text below this node, concatenated as-is.
    fn text_content(&self) -> String {
        self.text_fragments().concat()
    }

    /// Each text fragment trimmed, empty ones dropped, joined without a separator.
    ///
    /// `<p>Hello <b>world</b></p>` reads as `Helloworld`.
    fn stripped_text(&self) -> String {
        self.text_fragments()
            .into_iter()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// Every element below this node in document order, excluding the node itself.
    fn descendant_elements(&self) -> Vec<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMatch<'t> {
    Any,
    OneOf(&'t [&'t str]),
}

impl TagMatch<'_> {
    fn matches(&self, tag: &str) -> bool {
        match self {
            TagMatch::Any => true,
            TagMatch::OneOf(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(tag)),
        }
    }
}

/// All descendants of `root` whose tag matches and that satisfy `predicate`.
pub fn search<N, P>(root: &N, tags: TagMatch<'_>, predicate: P) -> Vec<N>
where
    N: DocNode,
    P: Fn(&N) -> bool,
{
    root.descendant_elements()
        .into_iter()
        .filter(|node| tags.matches(node.tag_name()) && predicate(node))
        .collect()
}

/// First descendant in document order matching `tags` and `predicate`.
pub fn search_first<N, P>(root: &N, tags: TagMatch<'_>, predicate: P) -> Option<N>
where
    N: DocNode,
    P: Fn(&N) -> bool,
{
    root.descendant_elements()
        .into_iter()
        .find(|node| tags.matches(node.tag_name()) && predicate(node))
}

/// A page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl<'a> DocNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_fragments(&self) -> Vec<&str> {
        self.text().collect()
    }

    fn descendant_elements(&self) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_walks_in_document_order_and_skips_root() {
        let doc = HtmlDocument::parse("<div id=a><p>one</p><div id=b><p>two</p></div></div>");
        let root = doc.root();
        let outer = search_first(&root, TagMatch::OneOf(&["div"]), |_| true).unwrap();
        assert_eq!(outer.attribute("id"), Some("a"));

        let divs = search(&outer, TagMatch::OneOf(&["div"]), |_| true);
        assert_eq!(divs.len(), 1);
        assert_eq!(divs[0].attribute("id"), Some("b"));

        let texts: Vec<_> = search(&root, TagMatch::OneOf(&["p"]), |_| true)
            .iter()
            .map(DocNode::text_content)
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn stripped_text_trims_each_fragment() {
        let doc = HtmlDocument::parse("<p> Hello <b>world</b> </p><div><span> a </span><span> b</span></div>");
        let root = doc.root();
        let p = search_first(&root, TagMatch::OneOf(&["p"]), |_| true).unwrap();
        assert_eq!(p.stripped_text(), "Helloworld");
        assert_eq!(p.text_content(), " Hello world ");

        let div = search_first(&root, TagMatch::OneOf(&["div"]), |_| true).unwrap();
        assert_eq!(div.stripped_text(), "ab");
    }

    #[test]
    fn tag_match_ignores_case() {
        assert!(TagMatch::OneOf(&["H2"]).matches("h2"));
        assert!(TagMatch::Any.matches("anything"));
        assert!(!TagMatch::OneOf(&["h2", "h3"]).matches("h4"));
    }
}
