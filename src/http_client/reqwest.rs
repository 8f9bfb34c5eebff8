use crate::api::State;
use crate::content_type::classify;
use crate::dispatch::{encode_payload, handle_response, RawResponse};
use crate::http_client::HttpClient;
use crate::{ClientConfig, Error, RestApi, Result};
use log::{debug, error, trace};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, CONNECTION, CONTENT_TYPE};

pub struct ReqwestHttpClient {
    client: Client,
    config: ClientConfig,
}

impl ReqwestHttpClient {
    fn encode_body(&self, api: &RestApi<'_>, headers: &HeaderMap) -> Result<Option<Vec<u8>>> {
        let payload = match api.payload() {
            Some(payload) => payload,
            None => return Ok(None),
        };
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let kind = classify(content_type);
        let body = encode_payload(&kind, payload).map_err(|e| {
            error!("{}", e);
            e
        })?;
        if body.is_none() {
            debug!("No request body is sent for content type {}", kind);
        }

        if self.config.debug {
            trace!("--------------------------------------------------------------");
            trace!("Request payload:");
            trace!(
                "{}",
                String::from_utf8_lossy(body.as_deref().unwrap_or_default())
            );
            trace!("--------------------------------------------------------------");
        }
        Ok(body)
    }

    fn build_request(
        &self,
        api: &RestApi<'_>,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.config.url, api.endpoint());
        if self.config.debug {
            trace!("Going to perform request:[{}] {}", api.method(), url);
        }

        let mut request_builder = self
            .client
            .request(api.method().clone(), url)
            .headers(headers)
            .header(CONNECTION, HeaderValue::from_static("close"));
        if let Some(auth) = &self.config.basic_auth {
            request_builder = request_builder.basic_auth(&auth.username, auth.password.as_ref());
        }
        if let Some(body) = body {
            request_builder = request_builder.body(body);
        }
        request_builder
    }
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(config.ignore_ssl)
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .connection_verbose(config.debug)
            .build()?;

        Ok(ReqwestHttpClient { client, config })
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.config.headers
    }

    fn execute(&self, api: &mut RestApi<'_>) -> Result<()> {
        if api.state() != State::Idle {
            return Err(Error::DescriptorReused);
        }

        let headers = self.config.effective_headers();
        let body = match self.encode_body(api, &headers) {
            Ok(body) => body,
            Err(e) => {
                api.set_state(State::Failed);
                return Err(e);
            }
        };
        let request_builder = self.build_request(api, headers, body);
        api.set_state(State::RequestBuilt);

        let response = request_builder.send().map_err(|e| {
            error!("Error executing request: {}", e);
            api.set_state(State::Failed);
            e
        })?;
        api.set_state(State::Sent);

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().map_err(|e| {
            error!("Error reading response: {}", e);
            api.set_status_code(status);
            api.set_state(State::Failed);
            e
        })?;

        handle_response(
            api,
            RawResponse {
                status,
                content_type,
                body: body.to_vec(),
            },
            self.config.debug,
        )
    }
}
