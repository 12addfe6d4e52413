use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::{FailureKind, FetchError};

// Everything but unreserved characters and '/' is escaped; space becomes %20.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// `{endpoint}?{param}={percent-encoded query}`. The query is not otherwise normalized.
pub fn build_query_url(endpoint: &str, param: &str, query: &str) -> Result<String, FetchError> {
    let mut url = Url::parse(endpoint)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    let encoded = utf8_percent_encode(query, QUERY_ESCAPE);
    url.set_query(Some(&format!("{param}={encoded}")));
    Ok(url.into())
}
