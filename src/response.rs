// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

/// The outcome of a request to the Pocket API.
///
/// Transport and parsing problems are deliberately not distinguished:
/// both are reported as [`PocketResponse::Failure`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum PocketResponse<T> {
  /// The request succeeded and produced data.
  ///
  /// When `T` is a list, it is guaranteed to be non-empty.
  Success(T),
  /// The request failed or produced no usable data.
  Failure,
}

impl<T> PocketResponse<Vec<T>> {
  /// Wrap a list that may be absent or empty into a response.
  ///
  /// Both an absent and an empty list result in
  /// [`PocketResponse::Failure`].
  pub fn wrap(items: Option<Vec<T>>) -> Self {
    match items {
      Some(items) if !items.is_empty() => Self::Success(items),
      Some(_) | None => Self::Failure,
    }
  }
}

impl<T> PocketResponse<T> {
  /// Check whether this response is a [`PocketResponse::Success`].
  #[inline]
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success(..))
  }

  /// Check whether this response is a [`PocketResponse::Failure`].
  #[inline]
  pub fn is_failure(&self) -> bool {
    !self.is_success()
  }

  /// Retrieve a reference to the payload of a successful response.
  #[inline]
  pub fn success(&self) -> Option<&T> {
    match self {
      Self::Success(data) => Some(data),
      Self::Failure => None,
    }
  }

  /// Convert the response into its payload, if it was successful.
  #[inline]
  pub fn into_success(self) -> Option<T> {
    match self {
      Self::Success(data) => Some(data),
      Self::Failure => None,
    }
  }
}
