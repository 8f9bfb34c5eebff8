//! The per-call request descriptor.
//!
//! A [`RestApi`] carries what to send (method, endpoint, payload), where to put
//! what comes back (success and error targets), and, once executed, what
//! actually happened (status code, raw body, decode error, diagnostics).

use crate::content_type::ContentKind;
use crate::error::DecodeError;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Formatter};


/// A value that can be written as a JSON or XML document.
pub trait Encodable {
    fn to_json(&self) -> Result<Vec<u8>, String>;
    fn to_xml(&self) -> Result<Vec<u8>, String>;
}

impl<T: Serialize> Encodable for T {
    fn to_json(&self) -> Result<Vec<u8>, String> {
        serde_json::to_vec(self).map_err(|e| e.to_string())
    }

    fn to_xml(&self) -> Result<Vec<u8>, String> {
        quick_xml::se::to_string(self)
            .map(String::into_bytes)
            .map_err(|e| e.to_string())
    }
}

/// A value that can be replaced by the contents of a JSON or XML document.
pub trait Decodable {
    fn from_json(&mut self, body: &[u8]) -> Result<(), String>;
    fn from_xml(&mut self, body: &[u8]) -> Result<(), String>;
}

impl<T: DeserializeOwned> Decodable for T {
    fn from_json(&mut self, body: &[u8]) -> Result<(), String> {
        *self = serde_json::from_slice(body).map_err(|e| e.to_string())?;
        Ok(())
    }

    fn from_xml(&mut self, body: &[u8]) -> Result<(), String> {
        *self = quick_xml::de::from_reader(body).map_err(|e| e.to_string())?;
        Ok(())
    }
}

pub enum Payload<'a> {
    /// Serialized according to the configured `Content-Type`.
    Structured(&'a dyn Encodable),
    /// Sent as-is.
    Bytes(Vec<u8>),
}

impl<'a> Payload<'a> {
    pub fn structured<T: Serialize>(value: &'a T) -> Self {
        Payload::Structured(value)
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Payload::Bytes(bytes.into())
    }
}

impl Debug for Payload<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Structured(_) => f.write_str("Structured(..)"),
            Payload::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
        }
    }
}

/// Where a response body is written. The shape decides which content types
/// the target can receive.
pub enum Target<'a> {
    /// Filled from `json` or `xml` bodies.
    Structured(&'a mut dyn Decodable),
    /// Filled from `octet-stream` bodies, or from a `json`/`xml` document
    /// holding a byte sequence.
    Bytes(&'a mut Vec<u8>),
    /// Filled from `plain` or `html` bodies, or from a `json`/`xml` document
    /// holding a string.
    Text(&'a mut String),
}

impl<'a> Target<'a> {
    pub fn structured<T: DeserializeOwned>(value: &'a mut T) -> Self {
        Target::Structured(value)
    }

    pub fn bytes(buffer: &'a mut Vec<u8>) -> Self {
        Target::Bytes(buffer)
    }

    pub fn text(text: &'a mut String) -> Self {
        Target::Text(text)
    }

    /// The target as a serde sink, for `json` and `xml` bodies.
    pub(crate) fn decodable(&mut self) -> &mut dyn Decodable {
        match self {
            Target::Structured(value) => &mut **value,
            Target::Bytes(buffer) => &mut **buffer,
            Target::Text(text) => &mut **text,
        }
    }

    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Target::Structured(_) => "structured",
            Target::Bytes(_) => "bytes",
            Target::Text(_) => "text",
        }
    }
}

impl Debug for Target<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target::{}", self.shape())
    }
}

/// Lifecycle of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    RequestBuilt,
    Sent,
    ResponseReceived,
    DecodedSuccess,
    DecodedError,
    Failed,
}

/// Non-fatal findings recorded while handling a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The body was left undecoded because the target cannot hold it.
    UnexpectedTarget {
        kind: ContentKind,
        expected: &'static str,
        found: &'static str,
    },
    UnsupportedContentType(ContentKind),
    EmptyBody,
}

#[derive(Debug)]
pub struct RestApi<'a> {
    method: Method,
    endpoint: String,
    payload: Option<Payload<'a>>,
    response: Option<Target<'a>>,
    error: Option<Target<'a>>,
    status_code: u16,
    raw_response: Vec<u8>,
    decode_error: Option<DecodeError>,
    diagnostics: Vec<Diagnostic>,
    state: State,
}

impl<'a> RestApi<'a> {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        RestApi {
            method,
            endpoint: endpoint.into(),
            payload: None,
            response: None,
            error: None,
            status_code: 0,
            raw_response: Vec::new(),
            decode_error: None,
            diagnostics: Vec::new(),
            state: State::Idle,
        }
    }

    pub fn with_payload(mut self, payload: Payload<'a>) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_response(mut self, target: Target<'a>) -> Self {
        self.response = Some(target);
        self
    }

    pub fn with_error(mut self, target: Target<'a>) -> Self {
        self.error = Some(target);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn payload(&self) -> Option<&Payload<'a>> {
        self.payload.as_ref()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn raw_response(&self) -> &[u8] {
        &self.raw_response
    }

    pub fn decode_error(&self) -> Option<&DecodeError> {
        self.decode_error.as_ref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn set_response(&mut self, target: Target<'a>) {
        self.response = Some(target);
    }

    pub fn set_error(&mut self, target: Target<'a>) {
        self.error = Some(target);
    }

    pub(crate) fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }

    pub(crate) fn set_raw_response(&mut self, raw_response: Vec<u8>) {
        self.raw_response = raw_response;
    }

    pub(crate) fn set_decode_error(&mut self, error: DecodeError) {
        self.decode_error = Some(error);
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }

    pub(crate) fn response_target(&mut self) -> Option<&mut Target<'a>> {
        self.response.as_mut()
    }

    pub(crate) fn error_target(&mut self) -> Option<&mut Target<'a>> {
        self.error.as_mut()
    }
}
