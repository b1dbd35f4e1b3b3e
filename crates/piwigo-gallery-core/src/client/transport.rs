//! libcurl-backed GET transport.

use std::time::Duration;

use super::{Fetch, FetchError, HttpResponse};

/// Redirect hops followed before giving up.
const MAX_REDIRECTIONS: u32 = 5;

/// Connection settings for [`CurlFetcher`]. `None` keeps the libcurl default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// Performs one blocking GET per call with a fresh `Easy` handle.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: HttpOptions,
}

impl CurlFetcher {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }
}

impl Fetch for CurlFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTIONS)?;
        if let Some(t) = self.options.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.options.timeout {
            easy.timeout(t)?;
        }
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
