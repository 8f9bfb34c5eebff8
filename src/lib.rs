//! # rest-api
//!
//! rest-api is a minimal generic REST client. A call is described by a
//! [`RestApi`] descriptor: the method, the endpoint, an optional payload and
//! the targets the response body should be decoded into. The client performs
//! exactly one HTTP round-trip per descriptor.
//!
//! Bodies are marshaled according to their content type, matched on the
//! suffix after the last `/`:
//!
//! | kind                    | request payload       | response target       |
//! |-------------------------|-----------------------|-----------------------|
//! | `json`                  | serialized            | deserialized          |
//! | `xml`                   | serialized            | deserialized          |
//! | `octet-stream`          | raw bytes             | copied into `Vec<u8>` |
//! | `plain`, `html`         | raw bytes             | copied into `String`  |
//! | anything else           | not sent              | not decoded           |
//!
//! Responses with a status in `[200, 400)` go to the success target. Anything
//! else goes to the error target and always ends the call with
//! [`Error::ResponseStatus`].
//!
//! ```no_run
//! use rest_api::{ClientConfig, HttpClient, ReqwestHttpClient, RestApi, Target};
//! use rest_api::reqwest::Method;
//!
//! # fn main() -> rest_api::Result<()> {
//! let client = ReqwestHttpClient::create(ClientConfig::new("http://www.example.com"))?;
//! let mut body = String::new();
//! let mut api = RestApi::new(Method::GET, "/").with_response(Target::text(&mut body));
//! client.execute(&mut api)?;
//! let status = api.status_code();
//! println!("{}: {}", status, body);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod content_type;
pub mod dispatch;
pub mod error;
pub mod http_client;

pub use crate::api::{Diagnostic, Payload, RestApi, State, Target};
pub use crate::config::{BasicAuth, ClientConfig};
pub use crate::content_type::{classify, ContentKind};
pub use crate::error::{DecodeError, EncodeError, Error, Result};
pub use crate::http_client::reqwest::ReqwestHttpClient;
pub use crate::http_client::HttpClient;
pub use reqwest;
