// Copyright (C) 2026 The pocket developers
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use anyhow::Context as _;
use anyhow::Result;

use serde::de::MapAccess;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::from_str;
use serde_json::from_value;
use serde_json::Value;

use crate::log::debug;
use crate::log::warn;
use crate::Author;
use crate::GlobalVideoRecommendation;


/// The root of a recommendations payload.
///
/// The API wraps the entries in an object, but we accept a bare list
/// as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
  Envelope { list: Vec<Value> },
  List(Vec<Value>),
}

impl Payload {
  fn into_entries(self) -> Vec<Value> {
    match self {
      Self::Envelope { list } | Self::List(list) => list,
    }
  }
}

#[derive(Deserialize)]
struct RawAuthor {
  author_id: String,
  name: String,
  url: String,
}

impl From<RawAuthor> for Author {
  fn from(other: RawAuthor) -> Self {
    Self {
      id: other.author_id,
      name: other.name,
      url: other.url,
    }
  }
}

/// Deserialize an object of authors keyed by their ID into a list,
/// keeping the order in which the server sent them.
fn authors_in_order<'de, D>(deserializer: D) -> Result<Vec<RawAuthor>, D::Error>
where
  D: Deserializer<'de>,
{
  struct AuthorsVisitor;

  impl<'de> Visitor<'de> for AuthorsVisitor {
    type Value = Vec<RawAuthor>;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
      f.write_str("an object of authors keyed by ID")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
      A: MapAccess<'de>,
    {
      let mut authors = Vec::with_capacity(map.size_hint().unwrap_or(0));
      while let Some((_id, author)) = map.next_entry::<String, RawAuthor>()? {
        let () = authors.push(author);
      }
      Ok(authors)
    }
  }

  deserializer.deserialize_map(AuthorsVisitor)
}

#[derive(Deserialize)]
struct RawRecommendation {
  id: u64,
  url: String,
  tv_url: String,
  title: String,
  excerpt: String,
  domain: String,
  image_src: String,
  published_timestamp: String,
  sort_id: i32,
  popularity_sort_id: i32,
  #[serde(deserialize_with = "authors_in_order")]
  authors: Vec<RawAuthor>,
}

impl From<RawRecommendation> for GlobalVideoRecommendation {
  fn from(other: RawRecommendation) -> Self {
    Self {
      id: other.id,
      url: other.url,
      tv_url: other.tv_url,
      title: other.title,
      excerpt: other.excerpt,
      domain: other.domain,
      image_src: other.image_src,
      published_timestamp: other.published_timestamp,
      sort_id: other.sort_id,
      popularity_sort_id: other.popularity_sort_id,
      authors: other.authors.into_iter().map(Author::from).collect(),
    }
  }
}


/// A parser for JSON payloads returned by the Pocket API.
#[derive(Debug, Default)]
pub(crate) struct JsonParser;

impl JsonParser {
  fn parse_entries(json: &str) -> Result<Vec<Value>> {
    let payload =
      from_str::<Payload>(json).context("failed to parse recommendations payload as JSON list")?;
    Ok(payload.into_entries())
  }

  /// Convert a raw JSON payload into global video recommendations.
  ///
  /// Entries that are not well-formed are skipped. `None` is returned
  /// if the payload as a whole could not be understood. Note that the
  /// result may be empty.
  pub(crate) fn global_video_recommendations(
    &self,
    json: &str,
  ) -> Option<Vec<GlobalVideoRecommendation>> {
    let entries = match Self::parse_entries(json) {
      Ok(entries) => entries,
      Err(err) => {
        warn!("{err:#}");
        return None
      },
    };

    let recs = entries
      .into_iter()
      .enumerate()
      .filter_map(
        |(idx, entry)| match from_value::<RawRecommendation>(entry) {
          Ok(rec) => Some(GlobalVideoRecommendation::from(rec)),
          Err(err) => {
            debug!("ignoring malformed recommendation at index {idx}: {err}");
            None
          },
        },
      )
      .collect();
    Some(recs)
  }
}


#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  use serde_json::json;


  /// Create a well-formed recommendation entry with the given ID.
  pub(crate) fn entry(id: u64) -> Value {
    json!({
      "id": id,
      "url": format!("https://www.youtube.com/watch?v={id}"),
      "tv_url": format!("https://www.youtube.com/tv#/watch/video/idle?v={id}"),
      "title": format!("Video {id}"),
      "excerpt": "An excerpt",
      "domain": "youtube.com",
      "image_src": "https://img-getpocket.cdn.mozilla.net/direct?url=thumb.jpg",
      "published_timestamp": "1432845081",
      "sort_id": 0,
      "popularity_sort_id": 20,
      "authors": {
        "96612022": {
          "author_id": "96612022",
          "name": "Eater",
          "url": "http://www.youtube.com/channel/UCRSYYS7VOqQvsBsFTF_9ENw"
        }
      }
    })
  }

  /// Create a payload in the envelope format the API uses.
  pub(crate) fn payload(entries: Vec<Value>) -> String {
    json!({ "list": entries }).to_string()
  }

  fn parse(json: &str) -> Option<Vec<GlobalVideoRecommendation>> {
    JsonParser.global_video_recommendations(json)
  }


  /// Check that we can parse a well-formed entry with all its fields.
  #[test]
  fn parse_entry() {
    let recs = parse(&payload(vec![entry(27587)])).unwrap();
    assert_eq!(recs.len(), 1);

    let rec = &recs[0];
    assert_eq!(rec.id, 27587);
    assert_eq!(rec.url, "https://www.youtube.com/watch?v=27587");
    assert_eq!(rec.tv_url, "https://www.youtube.com/tv#/watch/video/idle?v=27587");
    assert_eq!(rec.title, "Video 27587");
    assert_eq!(rec.excerpt, "An excerpt");
    assert_eq!(rec.domain, "youtube.com");
    assert_eq!(
      rec.image_src,
      "https://img-getpocket.cdn.mozilla.net/direct?url=thumb.jpg"
    );
    assert_eq!(rec.published_timestamp, "1432845081");
    assert_eq!(rec.sort_id, 0);
    assert_eq!(rec.popularity_sort_id, 20);
    assert_eq!(
      rec.authors,
      vec![Author {
        id: "96612022".to_string(),
        name: "Eater".to_string(),
        url: "http://www.youtube.com/channel/UCRSYYS7VOqQvsBsFTF_9ENw".to_string(),
      }]
    );
  }

  /// Make sure that malformed entries are dropped while the remaining
  /// ones are reported in their original order.
  #[test]
  fn skip_malformed_entries() {
    let mut missing_title = entry(2);
    let _title = missing_title.as_object_mut().unwrap().remove("title");
    let mut bad_id = entry(4);
    bad_id["id"] = json!("not-a-number");

    let entries = vec![entry(1), missing_title, entry(3), bad_id, entry(5)];
    let recs = parse(&payload(entries)).unwrap();
    let ids = recs.iter().map(|rec| rec.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 3, 5]);
  }

  /// Check that an entry with a malformed author is dropped as a whole.
  #[test]
  fn skip_entry_with_malformed_author() {
    let mut rec = entry(1);
    rec["authors"]["96612022"]["name"] = Value::Null;

    let recs = parse(&payload(vec![rec, entry(2)])).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, 2);
  }

  /// Make sure that unknown keys are ignored.
  #[test]
  fn ignore_unknown_keys() {
    let mut rec = entry(7);
    rec["something_new"] = json!({"nested": [1, 2, 3]});

    let json = json!({"list": [rec], "status": 1}).to_string();
    let recs = parse(&json).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, 7);
  }

  /// Check that authors are reported in the order the server sent
  /// them.
  #[test]
  fn author_order() {
    let mut rec = entry(1);
    rec["authors"] = json!({
      "b": {"author_id": "b", "name": "B", "url": "https://b.example"},
      "a": {"author_id": "a", "name": "A", "url": "https://a.example"}
    });

    let recs = parse(&payload(vec![rec])).unwrap();
    let names = recs[0]
      .authors
      .iter()
      .map(|author| author.name.as_str())
      .collect::<Vec<_>>();
    assert_eq!(names, vec!["B", "A"]);
  }

  /// Check that a bare list at the root is accepted.
  #[test]
  fn parse_bare_list() {
    let json = Value::Array(vec![entry(1), json!({}), entry(2)]).to_string();
    let recs = parse(&json).unwrap();
    assert_eq!(recs.len(), 2);
  }

  /// Make sure that an empty list is reported as such, not as failure.
  #[test]
  fn parse_empty_list() {
    assert_eq!(parse("[]"), Some(Vec::new()));
    assert_eq!(parse(r#"{"list": []}"#), Some(Vec::new()));
  }

  /// Check that payloads we cannot make sense of are reported as
  /// failure.
  #[test]
  fn parse_invalid_payload() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("{"), None);
    assert_eq!(parse("42"), None);
    assert_eq!(parse(r#"{"items": []}"#), None);
    assert_eq!(parse(r#"{"list": 5}"#), None);
  }
}
