// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use std::io::Read as _;

use anyhow::Context as _;
use anyhow::Result;

use url::Url;

use crate::log::debug;
use crate::log::warn;
use crate::urls::PocketUrls;
use crate::HttpClient;


/// Makes requests to the Pocket API and returns the raw response
/// bodies.
#[derive(Debug)]
pub(crate) struct RawEndpoint<C> {
  /// The HTTP client we use for satisfying requests.
  client: C,
  /// The URLs of the endpoints we talk to.
  urls: PocketUrls,
  /// The user agent to report to the server.
  user_agent: String,
}

impl<C> RawEndpoint<C>
where
  C: HttpClient,
{
  pub(crate) fn new(client: C, urls: PocketUrls, user_agent: &str) -> Self {
    Self {
      client,
      urls,
      user_agent: user_agent.to_string(),
    }
  }

  fn fetch(&self, url: &Url) -> Result<String> {
    debug!("making GET request to {url}");

    let mut body = self
      .client
      .get(url.as_str(), &self.user_agent)
      .context("failed to issue GET request")?;
    let mut data = String::new();
    let _count = body
      .read_to_string(&mut data)
      .context("failed to read response body")?;
    Ok(data)
  }

  /// Fetch the raw global video recommendations payload.
  ///
  /// Any failure along the way, be it a connection problem, an HTTP
  /// error status, or a body that is not valid UTF-8, results in
  /// `None`.
  pub(crate) fn global_video_recommendations(&self) -> Option<String> {
    let url = self.urls.global_video_recs();
    match self.fetch(&url) {
      Ok(data) => Some(data),
      Err(err) => {
        // The URL contains the API key, so don't include it here.
        warn!("failed to retrieve global video recommendations: {err:#}");
        None
      },
    }
  }
}
