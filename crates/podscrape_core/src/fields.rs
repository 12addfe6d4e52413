use crate::document::{search, search_first, DocNode, TagMatch};
use crate::types::{ImageRef, Pod};

/// Characters whose presence in an image's alt text marks it as a formula.
pub const FORMULA_SYMBOLS: [char; 10] = ['=', '+', '-', '*', '/', '^', '∫', '∑', 'x', 'y'];

const TITLE_TAGS: &[&str] = &["h2", "h3", "h4"];
const TEXT_TAGS: &[&str] = &["p", "span", "div"];
const IMAGE_TAGS: &[&str] = &["img"];

// Content entries must be longer than this many characters.
const MIN_CONTENT_CHARS: usize = 2;

/// Result of reading a single pod element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodOutcome {
    Present(Pod),
    /// No title, no usable text and no formula; the caller drops it.
    Absent,
}

pub fn is_formula(alt: &str) -> bool {
    alt.chars().any(|c| FORMULA_SYMBOLS.contains(&c))
}

/// Read title, text lines, images and formula strings out of one pod element.
pub fn extract_pod<N: DocNode>(node: &N) -> PodOutcome {
    let title = search_first(node, TagMatch::OneOf(TITLE_TAGS), |_| true)
        .map(|heading| heading.stripped_text())
        .unwrap_or_default();

    let mut content: Vec<String> = Vec::new();
    for element in search(node, TagMatch::OneOf(TEXT_TAGS), |_| true) {
        let text = element.stripped_text();
        // Exact-match dedup within this pod only.
        if text.chars().count() > MIN_CONTENT_CHARS && !content.contains(&text) {
            content.push(text);
        }
    }

    let image_nodes = search(node, TagMatch::OneOf(IMAGE_TAGS), |_| true);
    let images = image_nodes
        .iter()
        .filter_map(|img| {
            let src = img.attribute("src").unwrap_or_default();
            if src.is_empty() {
                return None;
            }
            Some(ImageRef {
                src: src.to_string(),
                alt: img.attribute("alt").unwrap_or_default().to_string(),
            })
        })
        .collect();

    let formulas = image_nodes
        .iter()
        .filter_map(|img| img.attribute("alt"))
        .filter(|alt| is_formula(alt))
        .map(str::to_string)
        .collect();

    let pod = Pod {
        title,
        content,
        images,
        formulas,
    };
    if pod.has_data() {
        PodOutcome::Present(pod)
    } else {
        PodOutcome::Absent
    }
}
