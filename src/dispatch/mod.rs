//! Content-type driven marshaling.
//!
//! Nothing in here touches the network: [`encode_payload`] turns a payload
//! into request body bytes and [`handle_response`] applies an already received
//! [`RawResponse`] to a descriptor.

use crate::api::{Diagnostic, Payload, RestApi, State, Target};
use crate::content_type::{classify, ContentKind};
use crate::error::{DecodeError, EncodeError, Error, Result};
use log::{debug, error, trace, warn};
use std::ops::Range;


/// Statuses routed to the success target. Redirects count as success.
pub const SUCCESS_RANGE: Range<u16> = 200..400;

pub fn is_success(status: u16) -> bool {
    SUCCESS_RANGE.contains(&status)
}

/// A response reduced to what the decoder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Returns the request body for `payload`, or `None` when `kind` has no
/// encoding strategy and the request goes out without a body.
///
/// Raw bytes are sent unchanged under every kind that has a strategy,
/// `json` and `xml` included: they are taken to be an already encoded
/// document, not wrapped in a base64 JSON string.
pub fn encode_payload(
    kind: &ContentKind,
    payload: &Payload<'_>,
) -> std::result::Result<Option<Vec<u8>>, EncodeError> {
    let encoded = match (kind, payload) {
        (ContentKind::Json, Payload::Structured(value)) => (*value).to_json(),
        (ContentKind::Xml, Payload::Structured(value)) => (*value).to_xml(),
        (
            ContentKind::Json
            | ContentKind::Xml
            | ContentKind::OctetStream
            | ContentKind::Plain
            | ContentKind::Html,
            Payload::Bytes(bytes),
        ) => Ok(bytes.clone()),
        (
            ContentKind::OctetStream | ContentKind::Plain | ContentKind::Html,
            Payload::Structured(_),
        ) => Err(format!("a {} payload must be raw bytes", kind)),
        _ => return Ok(None),
    };

    encoded.map(Some).map_err(|message| EncodeError {
        kind: kind.clone(),
        message,
    })
}

/// Records `response` on `api` and decodes its body into the target picked by
/// the status range. Any status outside [`SUCCESS_RANGE`] ends in
/// [`Error::ResponseStatus`], whatever happened while decoding.
pub fn handle_response(api: &mut RestApi<'_>, response: RawResponse, debug: bool) -> Result<()> {
    let RawResponse {
        status,
        content_type,
        body,
    } = response;
    api.set_status_code(status);
    api.set_state(State::ResponseReceived);

    if body.is_empty() {
        debug!("Response {} has no body", status);
        api.push_diagnostic(Diagnostic::EmptyBody);
    } else {
        let kind = classify(&content_type);
        if debug {
            trace!("--------------------------------------------------------------");
            trace!("Response content type: {}", kind);
            trace!("Response payload:");
            trace!("{}", String::from_utf8_lossy(&body));
            trace!("--------------------------------------------------------------");
        }

        if is_success(status) {
            let outcome = match api.response_target() {
                Some(target) => decode_into(target, &kind, &body),
                None => Ok(unsupported(&kind)),
            };
            api.set_raw_response(body);
            match outcome {
                Ok(Some(diagnostic)) => record(api, diagnostic),
                Ok(None) => {}
                Err(e) => {
                    error!("{}", e);
                    api.set_decode_error(e.clone());
                    api.set_state(State::Failed);
                    return Err(e.into());
                }
            }
        } else {
            let outcome = match (&kind, api.error_target()) {
                (ContentKind::Json | ContentKind::Xml, Some(target)) => {
                    decode_into(target, &kind, &body)
                }
                _ => Ok(None),
            };
            api.set_raw_response(body);
            match outcome {
                Ok(Some(diagnostic)) => record(api, diagnostic),
                Ok(None) => {}
                Err(e) => {
                    error!("Error unmarshalling error response: {}", e);
                    api.set_decode_error(e);
                }
            }
        }
    }

    if is_success(status) {
        api.set_state(State::DecodedSuccess);
        Ok(())
    } else {
        api.set_state(State::DecodedError);
        Err(Error::ResponseStatus(status))
    }
}

fn unsupported(kind: &ContentKind) -> Option<Diagnostic> {
    match kind {
        ContentKind::FormUrlEncoded | ContentKind::Other(_) => {
            Some(Diagnostic::UnsupportedContentType(kind.clone()))
        }
        _ => None,
    }
}

fn record(api: &mut RestApi<'_>, diagnostic: Diagnostic) {
    match &diagnostic {
        Diagnostic::UnexpectedTarget {
            kind,
            expected,
            found,
        } => warn!(
            "Response object for {} content expected to be {}, found {}",
            kind, expected, found
        ),
        Diagnostic::UnsupportedContentType(kind) => {
            warn!("Content type {} not supported yet", kind)
        }
        Diagnostic::EmptyBody => {}
    }
    api.push_diagnostic(diagnostic);
}

/// Writes `body` into `target`. `json` and `xml` bodies are deserialized into
/// any target shape and a failure is a [`DecodeError`]. Raw `octet-stream` and
/// text bodies only fit their own sink; any other target is left untouched and
/// reported as a diagnostic.
fn decode_into(
    target: &mut Target<'_>,
    kind: &ContentKind,
    body: &[u8],
) -> std::result::Result<Option<Diagnostic>, DecodeError> {
    let found = target.shape();
    let unexpected = |expected: &'static str| -> std::result::Result<_, DecodeError> {
        Ok(Some(Diagnostic::UnexpectedTarget {
            kind: kind.clone(),
            expected,
            found,
        }))
    };
    let decoded = match (kind, target) {
        (ContentKind::Json, target) => target.decodable().from_json(body),
        (ContentKind::Xml, target) => target.decodable().from_xml(body),
        (ContentKind::OctetStream, Target::Bytes(buffer)) => {
            **buffer = body.to_vec();
            Ok(())
        }
        (ContentKind::OctetStream, _) => return unexpected("bytes"),
        (kind, Target::Text(text)) if kind.is_text() => {
            **text = String::from_utf8_lossy(body).into_owned();
            Ok(())
        }
        (kind, _) if kind.is_text() => return unexpected("text"),
        _ => return Ok(unsupported(kind)),
    };

    decoded.map(|_| None).map_err(|message| DecodeError {
        kind: kind.clone(),
        message,
    })
}
