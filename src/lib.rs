// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

//! A crate for retrieving content recommendations from the Pocket API.
//!
//! The main entry point is [`Endpoint`], which is constructed from an
//! [`HttpClient`] implementation, an API key, and a user agent. With
//! the `reqwest` feature enabled (the default),
//! [`reqwest::blocking::Client`] can be used as the HTTP client.
//!
//! ```ignore
//! use pocket::Endpoint;
//! use pocket::PocketResponse;
//!
//! let client = reqwest::blocking::Client::new();
//! let endpoint = Endpoint::new(client, "my-api-key", "my-app/1.0")?;
//! match endpoint.global_video_recommendations() {
//!   PocketResponse::Success(recs) => {
//!     for rec in recs {
//!       println!("{}: {}", rec.title, rec.url);
//!     }
//!   },
//!   PocketResponse::Failure => eprintln!("failed to retrieve recommendations"),
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod data;
mod endpoint;
mod error;
mod http_client;
mod parser;
mod raw_endpoint;
#[cfg(feature = "reqwest")]
mod reqwest_client;
mod response;
mod urls;

pub use data::Author;
pub use data::GlobalVideoRecommendation;
pub use endpoint::Endpoint;
pub use error::ConfigError;
pub use http_client::HttpClient;
pub use http_client::HttpClientError;
pub use response::PocketResponse;
pub use urls::VIDEO_RECS_VERSION;


#[cfg(feature = "tracing")]
#[macro_use]
#[allow(unused_imports)]
mod log {
  pub(crate) use tracing::debug;
  pub(crate) use tracing::error;
  pub(crate) use tracing::info;
  pub(crate) use tracing::instrument;
  pub(crate) use tracing::trace;
  pub(crate) use tracing::warn;
}

#[cfg(not(feature = "tracing"))]
#[macro_use]
#[allow(unused_imports)]
mod log {
  macro_rules! debug {
        ($($args:tt)*) => {{
          if false {
            // Make sure to use `args` to prevent any warnings about
            // unused variables.
            let _args = format_args!($($args)*);
          }
        }};
    }
  pub(crate) use debug;
  pub(crate) use debug as error;
  pub(crate) use debug as info;
  pub(crate) use debug as trace;
  pub(crate) use debug as warn;
}
