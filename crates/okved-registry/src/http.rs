use std::time::Duration;

use okved_core::OkvedEntry;
use reqwest::blocking::Client;
use url::Url;

use crate::source::RegistrySource;
use crate::tree::{flatten_tree, OkvedNode};
use crate::{RegistryError, Result};

pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/bergstar/testcase/master/okved.json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "okved";

#[derive(Debug, Clone)]
pub struct HttpRegistry {
    url: String,
    timeout: Duration,
}

impl HttpRegistry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_nodes(&self) -> Result<Vec<OkvedNode>> {
        let url = Url::parse(&self.url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(RegistryError::UnsupportedScheme(url.scheme().to_string()));
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        let body = client.get(url).send()?.error_for_status()?.text()?;
        serde_json::from_str(&body).map_err(|source| RegistryError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

impl Default for HttpRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }
}

impl RegistrySource for HttpRegistry {
    fn source_name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self) -> Result<Vec<OkvedEntry>> {
        Ok(flatten_tree(self.fetch_nodes()?))
    }
}
