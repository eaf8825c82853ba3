// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Read;

use http::StatusCode;

/// An error that occurred while performing an HTTP request.
#[derive(Debug)]
#[non_exhaustive]
pub enum HttpClientError {
  /// The server responded with a non-success status code.
  StatusCode(StatusCode),
  /// The provided URL was not a well formed URL.
  InvalidUrl(Box<dyn Error + Send + Sync>),
  /// A header value (e.g., the user agent) could not be used as such.
  InvalidHeader(Box<dyn Error + Send + Sync>),
  /// Some other error occurred.
  Other(Box<dyn Error + Send + Sync>),
}

impl Display for HttpClientError {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      Self::StatusCode(code) => {
        write!(
          f,
          "HTTP request failed with status code {code} {}",
          code.canonical_reason().unwrap_or("")
        )
      },
      Self::InvalidUrl(_) => f.write_str("Invalid URL"),
      Self::InvalidHeader(_) => f.write_str("Invalid header value"),
      Self::Other(_) => f.write_str("HTTP client error"),
    }
  }
}

impl Error for HttpClientError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::StatusCode(_) => None,
      Self::InvalidUrl(err) | Self::InvalidHeader(err) | Self::Other(err) => Some(&**err),
    }
  }
}

/// A trait representing an HTTP client capable of performing blocking
/// GET requests against the Pocket API.
///
/// Timeouts, proxies, and similar transport level concerns are the
/// responsibility of the implementation.
pub trait HttpClient: Debug {
  /// Perform a blocking HTTP GET request to the specified URL, sending
  /// `user_agent` as the `User-Agent` header.
  ///
  /// Implementations should report non-success status codes as
  /// [`HttpClientError::StatusCode`].
  fn get(&self, url: &str, user_agent: &str) -> Result<Box<dyn Read>, HttpClientError>;
}

impl<C> HttpClient for &C
where
  C: HttpClient + ?Sized,
{
  #[inline]
  fn get(&self, url: &str, user_agent: &str) -> Result<Box<dyn Read>, HttpClientError> {
    (**self).get(url, user_agent)
  }
}
