use std::fmt;

use scrape_logging::scrape_debug;

use crate::document::{search, DocNode, TagMatch};

/// One way of finding pod elements on a result page.
///
/// Page markup changes without notice, so pods are located by an ordered
/// chain of these strategies; the first one that finds anything wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodLocator {
    /// `tag` elements whose class list contains `class`.
    ClassSignature { tag: String, class: String },
    /// Any element whose `attribute` value contains `needle`, ignoring case.
    AttributeContains { attribute: String, needle: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located<N> {
    Found(Vec<N>),
    Empty,
}

/// Pod elements plus the strategy that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedPods<N> {
    pub locator: Option<PodLocator>,
    pub nodes: Vec<N>,
}

impl PodLocator {
    pub fn class_signature(tag: impl Into<String>, class: impl Into<String>) -> Self {
        PodLocator::ClassSignature {
            tag: tag.into(),
            class: class.into(),
        }
    }

    pub fn attribute_contains(attribute: impl Into<String>, needle: impl Into<String>) -> Self {
        PodLocator::AttributeContains {
            attribute: attribute.into(),
            needle: needle.into(),
        }
    }

    pub fn locate<N: DocNode>(&self, root: &N) -> Located<N> {
        let nodes = match self {
            PodLocator::ClassSignature { tag, class } => {
                search(root, TagMatch::OneOf(&[tag.as_str()]), |node| {
                    has_class(node, class)
                })
            }
            PodLocator::AttributeContains { attribute, needle } => {
                let needle = needle.to_lowercase();
                search(root, TagMatch::Any, |node| {
                    node.attribute(attribute)
                        .is_some_and(|value| value.to_lowercase().contains(&needle))
                })
            }
        };
        if nodes.is_empty() {
            Located::Empty
        } else {
            Located::Found(nodes)
        }
    }
}

impl fmt::Display for PodLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PodLocator::ClassSignature { tag, class } => write!(f, "{tag}.{class}"),
            PodLocator::AttributeContains { attribute, needle } => {
                write!(f, "[{attribute}*=\"{needle}\" i]")
            }
        }
    }
}

fn has_class<N: DocNode>(node: &N, class: &str) -> bool {
    node.attribute("class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
}

/// Run `chain` in order and return the nodes of the first strategy that finds any.
pub fn extract_pods<N: DocNode>(root: &N, chain: &[PodLocator]) -> LocatedPods<N> {
    for locator in chain {
        match locator.locate(root) {
            Located::Found(nodes) => {
                scrape_debug!("Pod locator {} matched {} node(s)", locator, nodes.len());
                return LocatedPods {
                    locator: Some(locator.clone()),
                    nodes,
                };
            }
            Located::Empty => scrape_debug!("Pod locator {} matched nothing", locator),
        }
    }
    LocatedPods {
        locator: None,
        nodes: Vec::new(),
    }
}
