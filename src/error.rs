// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;


/// An error indicating that an [`Endpoint`][crate::Endpoint] could not
/// be created from the provided configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// The API key was empty or consisted only of whitespace.
  BlankApiKey,
  /// The user agent was empty or consisted only of whitespace.
  BlankUserAgent,
  /// The user agent contains characters that cannot be sent in an HTTP
  /// header, e.g., control characters.
  InvalidUserAgent,
  /// The base URL could not be parsed or is not usable as a base.
  InvalidBaseUrl(String),
}

impl Display for ConfigError {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      Self::BlankApiKey => f.write_str("expected non-blank API key"),
      Self::BlankUserAgent => f.write_str("expected non-blank user agent"),
      Self::InvalidUserAgent => f.write_str("user agent is not a valid HTTP header value"),
      Self::InvalidBaseUrl(reason) => write!(f, "invalid base URL: {reason}"),
    }
  }
}

impl Error for ConfigError {}
