//! Podscrape core: pure extraction of answer pods from a fetched result page.
mod assemble;
mod document;
mod fields;
#[cfg(any(test, feature = "test-fixtures"))]
mod fixture;
mod locate;
mod report;
mod salvage;
mod types;

pub use assemble::{extract_from_html, extract_results, Extraction, ExtractionConfig, ExtractionSource};
pub use document::{search, search_first, DocNode, HtmlDocument, TagMatch};
pub use fields::{extract_pod, is_formula, PodOutcome, FORMULA_SYMBOLS};
#[cfg(any(test, feature = "test-fixtures"))]
pub use fixture::{FixtureChild, FixtureNode};
pub use locate::{extract_pods, Located, LocatedPods, PodLocator};
pub use report::render_report;
pub use salvage::{extract_from_scripts, stringify_object, SALVAGE_TITLE};
pub use types::{ImageRef, Pod, SearchResult, SearchStatus, NO_RESULTS_MESSAGE};
