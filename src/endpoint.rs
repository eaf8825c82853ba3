// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use http::HeaderValue;

use crate::parser::JsonParser;
use crate::raw_endpoint::RawEndpoint;
use crate::urls::PocketUrls;
use crate::urls::DEFAULT_BASE_URL;
use crate::ConfigError;
use crate::GlobalVideoRecommendation;
use crate::HttpClient;
use crate::PocketResponse;


/// Makes requests to the Pocket API and returns the requested data.
///
/// An `Endpoint` is immutable after construction and can be used for
/// any number of sequential requests. Whether it can be used
/// concurrently depends on the [`HttpClient`] it wraps.
#[derive(Debug)]
pub struct Endpoint<C> {
  raw: RawEndpoint<C>,
  parser: JsonParser,
}

impl<C> Endpoint<C>
where
  C: HttpClient,
{
  /// Create a new `Endpoint` talking to the official Pocket API
  /// server.
  ///
  /// `client` is the HTTP client used for network requests,
  /// `api_key` the Pocket API key, and `user_agent` the user agent to
  /// report with every request.
  ///
  /// # Errors
  /// An error is returned if `api_key` or `user_agent` is blank, i.e.,
  /// empty or consisting only of whitespace, or if `user_agent` cannot
  /// be sent as an HTTP header value.
  pub fn new(client: C, api_key: &str, user_agent: &str) -> Result<Self, ConfigError> {
    Self::with_base_url(client, DEFAULT_BASE_URL, api_key, user_agent)
  }

  /// Create a new `Endpoint` talking to the server at `base_url`.
  ///
  /// # Errors
  /// In addition to the conditions documented for [`Endpoint::new`], an
  /// error is returned if `base_url` is not a valid base URL.
  pub fn with_base_url(
    client: C,
    base_url: &str,
    api_key: &str,
    user_agent: &str,
  ) -> Result<Self, ConfigError> {
    if api_key.trim().is_empty() {
      return Err(ConfigError::BlankApiKey)
    }
    if user_agent.trim().is_empty() {
      return Err(ConfigError::BlankUserAgent)
    }
    if HeaderValue::from_str(user_agent).is_err() {
      return Err(ConfigError::InvalidUserAgent)
    }

    let urls = PocketUrls::new(base_url, api_key)?;
    let slf = Self {
      raw: RawEndpoint::new(client, urls, user_agent),
      parser: JsonParser,
    };
    Ok(slf)
  }

  /// Retrieve the Pocket global video recommendations.
  ///
  /// The list contained in a [`PocketResponse::Success`] is never
  /// empty. Entries the server returned in an unexpected format are
  /// omitted; all others are reported in server order. Any other
  /// problem results in [`PocketResponse::Failure`]. Results are not
  /// cached and failed requests are not retried. The API version
  /// used is [`VIDEO_RECS_VERSION`][crate::VIDEO_RECS_VERSION].
  ///
  /// # Notes
  /// This call performs synchronous network I/O and blocks until it
  /// completes. Invoke it from a background execution context, not
  /// from a thread that has to stay responsive.
  pub fn global_video_recommendations(&self) -> PocketResponse<Vec<GlobalVideoRecommendation>> {
    let recs = self
      .raw
      .global_video_recommendations()
      .and_then(|json| self.parser.global_video_recommendations(&json));
    PocketResponse::wrap(recs)
  }
}
