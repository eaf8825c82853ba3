// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

/// A global video recommendation, as provided by the Pocket API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalVideoRecommendation {
  /// The Pocket identifier of the recommendation.
  pub id: u64,
  /// The URL of the video.
  pub url: String,
  /// A URL of the video suitable for TV devices.
  pub tv_url: String,
  /// The title of the video.
  pub title: String,
  /// A short description of the video.
  pub excerpt: String,
  /// The domain hosting the video, e.g., `youtube.com`.
  pub domain: String,
  /// The URL of a thumbnail image.
  pub image_src: String,
  /// The publication time, as reported by the server (seconds since
  /// the epoch, as a string).
  pub published_timestamp: String,
  /// Server provided sort key.
  pub sort_id: i32,
  /// Server provided sort key by popularity.
  pub popularity_sort_id: i32,
  /// The authors of the video.
  pub authors: Vec<Author>,
}

/// An author of a [`GlobalVideoRecommendation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
  /// The Pocket identifier of the author.
  pub id: String,
  /// The display name of the author.
  pub name: String,
  /// A URL associated with the author, e.g., their channel.
  pub url: String,
}
