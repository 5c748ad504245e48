use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid registry url: {0}")]
    Url(#[from] url::ParseError),
    #[error("registry url must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("failed to fetch okved registry: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode okved registry from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
