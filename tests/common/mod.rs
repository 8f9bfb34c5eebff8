use httpmock::MockServer;
use rest_api::reqwest::header::{HeaderValue, CONTENT_TYPE};
use rest_api::{ClientConfig, HttpClient, ReqwestHttpClient};
use serde::{Deserialize, Serialize};

pub const USER: &str = "nsxUser";
pub const PASSWORD: &str = "nsxPass";
/// `Authorization` value for `nsxUser:nsxPass`.
pub const VALID_AUTHORIZATION: &str = "Basic bnN4VXNlcjpuc3hQYXNz";
/// `Authorization` value for `invalidUser:invalidPass`.
pub const INVALID_AUTHORIZATION: &str = "Basic aW52YWxpZFVzZXI6aW52YWxpZFBhc3M=";

pub fn create_client(
    server: &MockServer,
    content_type: Option<&'static str>,
) -> ReqwestHttpClient {
    let mut config = ClientConfig::new(server.base_url()).debug(true);
    if let Some(content_type) = content_type {
        config = config.header(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    ReqwestHttpClient::create(config).unwrap()
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReqBody {
    pub field_1: String,
    pub field_2: String,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct ErrStruct {
    pub error_id: String,
    pub error_code: String,
    #[serde(default)]
    pub error_text: String,
}
