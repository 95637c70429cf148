//! Owner GET over libcurl.

use super::{FetchError, OwnerFetcher};
use crate::config::GatewayConfig;
use crate::owner::Owner;
use std::time::Duration;
use url::Url;

/// Reads owner records from the API gateway with a blocking curl transfer.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    base: Url,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlFetcher {
    /// `base_url` is the gateway root. A missing trailing `/` is added so the
    /// last path segment survives the join.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            base: parse_base(base_url)?,
            connect_timeout,
            timeout,
        })
    }

    pub fn from_config(cfg: &GatewayConfig) -> Result<Self, FetchError> {
        Self::new(&cfg.base_url, cfg.connect_timeout(), cfg.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for a gateway-relative path.
    pub fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|source| FetchError::InvalidUrl {
            url: format!("{}{}", self.base, path),
            source,
        })
    }
}

fn parse_base(base_url: &str) -> Result<Url, FetchError> {
    let mut raw = base_url.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|source| FetchError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })
}

impl OwnerFetcher for CurlFetcher {
    fn fetch(&self, path: &str) -> Result<Owner, FetchError> {
        let url = self.url_for(path)?;
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, code, body.len());
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        Ok(Owner::from_slice(&body)?)
    }
}
