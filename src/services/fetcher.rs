use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::configuration::{FetchMode, FetcherSettings};

use super::FetchError;

/// Retrieves result pages, either directly or through a scraping proxy that
/// fetches on our behalf. One attempt per call, transport default timeouts.
pub struct Fetcher {
    client: Client,
    mode: FetchMode,
    proxy_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ProxyQuery<'a> {
    api_key: &'a str,
    url: &'a str,
}

impl Fetcher {
    pub fn new(settings: FetcherSettings) -> Self {
        let client = reqwest::Client::new();

        if settings.mode == FetchMode::Proxy && settings.api_key.is_empty() {
            log::warn!(
                "Fetcher is in proxy mode but no api key is configured; set APP_FETCHER__API_KEY"
            );
        }

        Fetcher {
            client,
            mode: settings.mode,
            proxy_url: settings.proxy_url,
            api_key: settings.api_key,
        }
    }

    /// `target_url` is expected already percent-decoded. In proxy mode it is
    /// re-encoded as the proxy's `url` query parameter.
    pub async fn fetch(&self, target_url: &str) -> Result<String, FetchError> {
        let target_url = target_url.trim();
        if target_url.is_empty() {
            return Err(FetchError::EmptyUrl);
        }
        let target = Url::parse(target_url)?;

        let request = match self.mode {
            FetchMode::Direct => {
                log::debug!("Fetching {} directly", target);
                self.client.get(target)
            }
            FetchMode::Proxy => {
                log::debug!("Fetching {} through {}", target_url, self.proxy_url);
                self.client.get(&self.proxy_url).query(&ProxyQuery {
                    api_key: &self.api_key,
                    url: target_url,
                })
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: target_url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
