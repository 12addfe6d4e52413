//! Podscrape engine: fetching, decoding, result assembly and persistence.
mod decode;
mod fetch;
mod persist;
mod query_url;
mod search;
mod types;

pub use decode::{decode_body, DecodedBody};
pub use fetch::{ClientBuildError, ClientConfig, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, save_json, write_atomic, PersistError};
pub use query_url::build_query_url;
pub use search::{PodScraper, SearchSettings};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
