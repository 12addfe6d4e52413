use scrape_logging::{scrape_debug, scrape_info};

use crate::document::{DocNode, HtmlDocument};
use crate::fields::{extract_pod, PodOutcome};
use crate::locate::{extract_pods, PodLocator};
use crate::salvage::extract_from_scripts;
use crate::types::Pod;

/// Selectors used to pull pods out of a result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Tried in order; the first locator that finds elements wins.
    pub locators: Vec<PodLocator>,
    /// `type` attribute of script blocks considered for salvage.
    pub script_type: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            locators: vec![
                PodLocator::class_signature("section", "_2vZr"),
                PodLocator::attribute_contains("data-testid", "pod"),
            ],
            script_type: "application/json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionSource {
    /// Pods read from elements found by this locator.
    Structural(PodLocator),
    /// Pods salvaged from script payloads.
    Salvage,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub pods: Vec<Pod>,
    pub source: ExtractionSource,
}

/// Locate pod elements, read each one, and fall back to script salvage when
/// no pod survives.
pub fn extract_results<N: DocNode>(root: &N, config: &ExtractionConfig) -> Extraction {
    let located = extract_pods(root, &config.locators);
    let node_count = located.nodes.len();

    let mut pods = Vec::with_capacity(node_count);
    for (index, node) in located.nodes.iter().enumerate() {
        match extract_pod(node) {
            PodOutcome::Present(pod) => pods.push(pod),
            PodOutcome::Absent => scrape_debug!("Pod node {} has no usable data", index),
        }
    }

    if let Some(locator) = located.locator.filter(|_| !pods.is_empty()) {
        scrape_info!("Extracted {} pod(s) from {} node(s)", pods.len(), node_count);
        return Extraction {
            pods,
            source: ExtractionSource::Structural(locator),
        };
    }

    let salvaged = extract_from_scripts(root, &config.script_type);
    if salvaged.is_empty() {
        scrape_info!("No pods found ({} candidate node(s))", node_count);
        Extraction {
            pods: salvaged,
            source: ExtractionSource::Nothing,
        }
    } else {
        scrape_info!("Salvaged {} pod(s) from script data", salvaged.len());
        Extraction {
            pods: salvaged,
            source: ExtractionSource::Salvage,
        }
    }
}

/// Parse `html` and run `extract_results` on it.
pub fn extract_from_html(html: &str, config: &ExtractionConfig) -> Extraction {
    let document = HtmlDocument::parse(html);
    extract_results(&document.root(), config)
}
