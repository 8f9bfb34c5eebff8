use crate::{ClientConfig, RestApi, Result};


pub mod reqwest;

pub trait HttpClient {
    fn create(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;

    fn config(&self) -> &ClientConfig;

    /// Headers may be changed between calls; they are read at the start of
    /// every call.
    fn headers_mut(&mut self) -> &mut ::reqwest::header::HeaderMap;

    /// Performs one round-trip for `api` and records the outcome on it.
    fn execute(&self, api: &mut RestApi<'_>) -> Result<()>;
}
