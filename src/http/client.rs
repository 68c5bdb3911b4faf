use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Method};

use crate::error::TransportError;
use crate::models::HttpMethod;

/// What one dispatched request hands back to the sweep: the status code and
/// how many body bytes arrived. Body content is never inspected.
#[derive(Debug, Clone, Copy)]
pub struct Exchange {
    pub status: u16,
    pub body_bytes: usize,
}

/// Request dispatch seam. Production uses [`HttpClient`]; engine tests script
/// their own implementation.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Exchange, TransportError>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// One client configuration reused for every probe. TLS certificate
    /// verification is disabled: targets are lab environments where
    /// self-signed certificates are common.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { client })
    }

    fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

impl Transport for HttpClient {
    async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Exchange, TransportError> {
        let mut request = self.client.request(Self::to_reqwest_method(method), url);

        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body_bytes = response.bytes().await.unwrap_or_default().len();

        Ok(Exchange { status, body_bytes })
    }
}
