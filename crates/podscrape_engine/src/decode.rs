use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Response body converted to UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    pub text: String,
    pub encoding: &'static str,
    /// Some byte sequences were invalid and were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode a response body. Encoding is chosen by BOM, then the Content-Type
/// charset, then byte-level detection. Malformed sequences never fail the
/// decode; they become replacement characters and set `lossy`.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> DecodedBody {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\''))
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedBody {
    let (text, actual, had_errors) = encoding.decode(bytes);
    DecodedBody {
        text: text.into_owned(),
        encoding: actual.name(),
        lossy: had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn charset_parameter_is_case_insensitive_and_unquoted() {
        assert_eq!(charset_label("text/html; Charset=\"ISO-8859-1\""), Some("ISO-8859-1"));
        assert_eq!(charset_label("text/html;charset=utf-8"), Some("utf-8"));
        assert_eq!(charset_label("text/html"), None);
    }

    #[test]
    fn header_charset_is_used() {
        let decoded = decode_body(b"caf\xe9", Some("text/html; charset=ISO-8859-1"));
        assert_eq!(decoded.text, "café");
        assert_eq!(decoded.encoding, "windows-1252");
    }

    #[test]
    fn bom_wins_over_header() {
        let decoded = decode_body(b"\xEF\xBB\xBF\xE2\x88\xAB", Some("text/html; charset=ISO-8859-1"));
        assert_eq!(decoded.text, "∫");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn invalid_bytes_are_replaced_not_rejected() {
        let decoded = decode_body(b"ab\xff", Some("text/html; charset=utf-8"));
        assert_eq!(decoded.text, "ab\u{FFFD}");
        assert_eq!(decoded.encoding, "UTF-8");
        assert!(decoded.lossy);
    }

    #[test]
    fn undeclared_utf8_is_detected() {
        let decoded = decode_body("x² + y²".as_bytes(), None);
        assert_eq!(decoded.text, "x² + y²");
    }
}
