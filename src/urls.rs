// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use url::Url;

use crate::ConfigError;


/// The host we talk to unless told otherwise.
pub(crate) const DEFAULT_BASE_URL: &str = "https://getpocket.cdn.mozilla.net/";

const PATH_GLOBAL_VIDEO_RECS: &str = "v3/firefox/global-video-recs";

const PARAM_API_KEY: &str = "consumer_key";
const PARAM_VERSION: &str = "version";
const PARAM_AUTHORS: &str = "authors";

/// The version of the global video recommendations API we speak.
pub const VIDEO_RECS_VERSION: &str = "2";
const VIDEO_RECS_AUTHORS: &str = "1";


/// The URLs of the Pocket API endpoints we use, bound to an API key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PocketUrls {
  base_url: Url,
  api_key: String,
}

impl PocketUrls {
  /// Create a `PocketUrls` object for the given base URL.
  ///
  /// A base URL without a trailing slash has one added, so that the
  /// endpoint path is appended to it instead of replacing its last
  /// segment.
  pub(crate) fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
    let mut base_url =
      Url::parse(base_url.trim()).map_err(|err| ConfigError::InvalidBaseUrl(err.to_string()))?;
    if base_url.cannot_be_a_base() {
      return Err(ConfigError::InvalidBaseUrl(format!(
        "`{base_url}` cannot be used as a base URL"
      )))
    }

    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      let () = base_url.set_path(&path);
    }

    let slf = Self {
      base_url,
      api_key: api_key.to_string(),
    };
    Ok(slf)
  }

  /// The URL of the global video recommendations endpoint.
  pub(crate) fn global_video_recs(&self) -> Url {
    // SANITY: We made sure during construction that the base URL is
    //         hierarchical and the path is relative and well-formed.
    let mut url = self.base_url.join(PATH_GLOBAL_VIDEO_RECS).unwrap();
    url
      .query_pairs_mut()
      .clear()
      .append_pair(PARAM_API_KEY, &self.api_key)
      .append_pair(PARAM_VERSION, VIDEO_RECS_VERSION)
      .append_pair(PARAM_AUTHORS, VIDEO_RECS_AUTHORS);
    url
  }
}
