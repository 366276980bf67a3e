// src/core/net.rs
//
// Blocking GET against the schedule API. One attempt per call, no retries;
// callers decide what a failure means.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::NetOptions;
use crate::{Error, Result};

/// Cheap to clone: the underlying client is reference-counted, so worker
/// threads each take a copy.
#[derive(Clone, Debug)]
pub struct Http {
    client: Client,
    base_url: String,
}

impl Http {
    pub fn new(opts: &NetOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client, base_url: s!(opts.base_url.trim_end_matches('/')) })
    }

    /// `path` is relative to the API root, e.g. `groups/lessons/1/20240901/`.
    pub fn url(&self, path: &str) -> String {
        join!(&self.base_url, "/", path.trim_start_matches('/'))
    }

    /// GET and return the body as text.
    pub fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        logd!("GET {}", url);
        let resp = check_status(self.client.get(&url).send()?, &url)?;
        Ok(resp.text()?)
    }

    /// GET with query parameters and decode a JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        logd!("GET {} {:?}", url, query);
        let resp = check_status(self.client.get(&url).query(query).send()?, &url)?;
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn check_status(resp: Response, url: &str) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}
