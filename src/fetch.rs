use reqwest::blocking::Client;
use tracing::{info, warn};
use url::Url;

use crate::error::{GrabError, Result};

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Body of `url`. Anything but a success status is a [`GrabError::Fetch`].
    pub fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GrabError::Fetch {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes()?.to_vec();
        info!("Page {url} was downloaded successfully ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

/// Warns about URLs that are not `http`/`https`. Returns whether the scheme is
/// one of those; callers carry on either way.
pub fn check_scheme(url: &str) -> bool {
    let supported = Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !supported {
        warn!("Invalid URL, URL should start with http:// or https:// scheme: {url}");
    }
    supported
}

/// Page bytes are always read as UTF-8; invalid sequences become U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
