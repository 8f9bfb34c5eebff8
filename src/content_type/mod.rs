//! Maps a raw `Content-Type` value to the kind used to pick an encode/decode
//! strategy.

use std::fmt::{Display, Formatter};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Xml,
    OctetStream,
    Plain,
    Html,
    /// Recognized, but there is no encode or decode strategy for it.
    FormUrlEncoded,
    /// Any other suffix, kept verbatim.
    Other(String),
}

impl ContentKind {
    /// The normalized suffix, e.g. `"json"` or `"x-www-form-urlencoded"`.
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Json => "json",
            ContentKind::Xml => "xml",
            ContentKind::OctetStream => "octet-stream",
            ContentKind::Plain => "plain",
            ContentKind::Html => "html",
            ContentKind::FormUrlEncoded => "x-www-form-urlencoded",
            ContentKind::Other(suffix) => suffix,
        }
    }

    /// `plain` and `html` share the same handling.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentKind::Plain | ContentKind::Html)
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies either a bare media type (`application/json`) or a full header
/// line (`Content-Type: application/json; charset=utf-8`). Never fails: input
/// without a `/` classifies as itself, trimmed.
pub fn classify(raw: &str) -> ContentKind {
    let media_type = match raw.split_once(':') {
        Some((name, value)) if name.trim().eq_ignore_ascii_case("content-type") => value,
        _ => raw,
    };
    let media_type = media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let suffix = match media_type.rfind('/') {
        Some(index) => &media_type[index + 1..],
        None => media_type.as_str(),
    };

    match suffix {
        "json" => ContentKind::Json,
        "xml" => ContentKind::Xml,
        "octet-stream" => ContentKind::OctetStream,
        "plain" => ContentKind::Plain,
        "html" => ContentKind::Html,
        "x-www-form-urlencoded" => ContentKind::FormUrlEncoded,
        other => ContentKind::Other(other.to_string()),
    }
}
