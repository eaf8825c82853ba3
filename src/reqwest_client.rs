// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use std::io::Read;

use http::header::ACCEPT;
use http::header::USER_AGENT;
use http::HeaderValue;
use http::Method;

use reqwest::blocking::Client as BlockingClient;
use reqwest::blocking::Request;

use crate::HttpClient;
use crate::HttpClientError;

/// Implements the `HttpClient` trait for the `reqwest` crate.
impl HttpClient for BlockingClient {
  /// Perform a blocking HTTP GET request to the specified URL.
  fn get(&self, url: &str, user_agent: &str) -> Result<Box<dyn Read>, HttpClientError> {
    let user_agent =
      HeaderValue::from_str(user_agent).map_err(|err| HttpClientError::InvalidHeader(Box::new(err)))?;

    let mut request = Request::new(
      Method::GET,
      url
        .try_into()
        .map_err(|err| HttpClientError::InvalidUrl(Box::new(err)))?,
    );
    let headers = request.headers_mut();
    let _prev = headers.insert(USER_AGENT, user_agent);
    let _prev = headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    // The URL carries the API key, so keep it out of the error.
    let resp = self
      .execute(request)
      .map_err(|err| HttpClientError::Other(Box::new(err.without_url())))?;

    let status = resp.status();
    if !status.is_success() {
      return Err(HttpClientError::StatusCode(status));
    }

    Ok(Box::new(resp))
  }
}
