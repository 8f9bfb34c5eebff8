use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/// Content type used for a call when the headers do not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub basic_auth: Option<BasicAuth>,
    pub ignore_ssl: bool,
    pub headers: HeaderMap,
    /// `None` disables the timeout.
    pub timeout: Option<Duration>,
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            basic_auth: None,
            ignore_ssl: false,
            headers: HeaderMap::new(),
            timeout: Some(DEFAULT_TIMEOUT),
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password,
        });
        self
    }

    pub fn ignore_ssl(mut self, ignore_ssl: bool) -> Self {
        self.ignore_ssl = ignore_ssl;
        self
    }

    /// Replaces any previous value for `name`.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Headers sent with a single call: the configured ones plus
    /// `Content-Type: text/plain` when none is set. The configuration itself
    /// is left unchanged.
    pub fn effective_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        }
        headers
    }
}
