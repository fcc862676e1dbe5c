use abi::{ApiConfig, Error};
use derive_builder::Builder;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error};

/// Options handed to the transport as-is.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct RequestOptions {
    pub method: Method,
    #[builder(setter(into))]
    pub headers: Vec<(String, String)>,
    #[builder(setter(into, strip_option))]
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// A request carrying a JSON body.
    pub fn json(method: Method, body: &impl serde::Serialize) -> Result<Self, Error> {
        Ok(Self {
            method,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(serde_json::to_string(body)?),
        })
    }
}

/// Single-attempt JSON fetch against a base URL.
#[derive(Debug, Clone)]
pub struct FetchGateway {
    base_url: String,
    http: Client,
}

impl FetchGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Issues the request and parses the body as JSON whatever the status
    /// code. Failures are logged and returned; nothing is retried.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, Error> {
        let url = self.url(endpoint);
        debug!(method = %options.method, %url, "fetch");
        let ret = self.send(&url, options).await;
        if let Err(e) = &ret {
            error!(%url, "fetch failed: {}", e);
        }
        ret
    }

    async fn send(&self, url: &str, options: RequestOptions) -> Result<Value, Error> {
        let RequestOptions {
            method,
            headers,
            body,
        } = options;
        let mut req = self.http.request(method, url);
        for (name, value) in headers {
            req = req.header(name, value);
        }
        if let Some(body) = body {
            req = req.body(body);
        }
        let res = req.send().await?;
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
