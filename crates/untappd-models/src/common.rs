/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Response envelope and helpers shared by every Untappd API response

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::de::DeserializeOwned;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use untappd_core::{Error, ResponseTime, Result};

/// Top-level wrapper around every API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
  /// Status and timing information
  pub meta: ResponseMeta,

  /// Pending notifications for the authenticated user, passed through untouched
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notifications: Option<serde_json::Value>,

  /// Response body; error responses send `[]` or omit it
  #[serde(default, deserialize_with = "deser_body")]
  pub response: Option<T>,
}

/// The `meta` block of a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
  /// HTTP-style status code
  pub code: u16,

  /// Human readable error description
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_detail: Option<String>,

  /// Machine readable error category (e.g. "invalid_param")
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_type: Option<String>,

  /// Error description aimed at developers
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub developer_friendly: Option<String>,

  /// Time the server spent producing the response
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub response_time: Option<ResponseTime>,

  /// Time the server spent initializing the request
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub init_time: Option<ResponseTime>,
}

impl ResponseMeta {
  pub fn is_success(&self) -> bool {
    self.code == 200
  }

  /// Sum of init and response time, if either was reported
  pub fn total_time(&self) -> Option<TimeDelta> {
    match (self.init_time, self.response_time) {
      (None, None) => None,
      (init, response) => Some(
        init.map(TimeDelta::from).unwrap_or_else(TimeDelta::zero)
          + response.map(TimeDelta::from).unwrap_or_else(TimeDelta::zero),
      ),
    }
  }

  /// The error described by this block, if the code is not a success
  pub fn to_error(&self) -> Option<Error> {
    if self.is_success() {
      return None;
    }

    Some(Error::Api {
      code: self.code,
      error_type: self.error_type.clone().unwrap_or_else(|| "unknown".to_string()),
      detail: self
        .error_detail
        .clone()
        .or_else(|| self.developer_friendly.clone())
        .unwrap_or_default(),
    })
  }
}

impl<T> Envelope<T> {
  /// Unwrap the body, turning an error `meta` block into [`Error::Api`]
  pub fn into_result(self) -> Result<T> {
    if let Some(err) = self.meta.to_error() {
      return Err(err);
    }
    self.response.ok_or_else(|| Error::MissingField("response".to_string()))
  }
}

fn deser_body<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  match serde_json::Value::deserialize(deserializer)? {
    serde_json::Value::Null => Ok(None),
    serde_json::Value::Array(items) if items.is_empty() => Ok(None),
    body => T::deserialize(body).map(Some).map_err(de::Error::custom),
  }
}

/// Parse timestamps like `Sat, 21 Aug 2010 07:23:45 +0000`; pair with `#[serde(default)]`
pub fn deser_rfc2822<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> std::result::Result<Option<DateTime<FixedOffset>>, D::Error> {
  Option::<Cow<str>>::deserialize(deserializer)?
    .map(|raw| DateTime::parse_from_rfc2822(&raw).map_err(de::Error::custom))
    .transpose()
}

/// Write timestamps back in the format [`deser_rfc2822`] reads
pub fn ser_rfc2822<S: Serializer>(
  value: &Option<DateTime<FixedOffset>>,
  serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
  match value {
    Some(ts) => serializer.serialize_some(&ts.to_rfc2822()),
    None => serializer.serialize_none(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use untappd_core::test_utils::assert_secs_eq;

  #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
  struct Body {
    value: u32,
  }

  #[test]
  fn test_success_envelope() {
    let envelope: Envelope<Body> = serde_json::from_value(json!({
      "meta": {
        "code": 200,
        "response_time": {"time": 0.042, "measure": "seconds"},
        "init_time": {"time": 0, "measure": "seconds"}
      },
      "notifications": [],
      "response": {"value": 7}
    }))
    .unwrap();

    assert!(envelope.meta.is_success());
    assert_secs_eq(envelope.meta.response_time.unwrap().as_delta(), 0.042);
    assert_secs_eq(envelope.meta.total_time().unwrap(), 0.042);
    assert_eq!(envelope.into_result().unwrap(), Body { value: 7 });
  }

  #[test]
  fn test_error_envelope() {
    let envelope: Envelope<Body> = serde_json::from_value(json!({
      "meta": {
        "code": 500,
        "error_detail": "The user has not authorized this application or the token is invalid.",
        "error_type": "invalid_auth",
        "developer_friendly": "",
        "response_time": {"time": 0, "measure": "seconds"}
      },
      "response": []
    }))
    .unwrap();

    assert!(envelope.response.is_none());
    match envelope.into_result() {
      Err(Error::Api { code, error_type, detail }) => {
        assert_eq!(code, 500);
        assert_eq!(error_type, "invalid_auth");
        assert!(detail.starts_with("The user has not authorized"));
      }
      other => panic!("expected API error, got {:?}", other),
    }
  }

  #[test]
  fn test_missing_body() {
    let envelope: Envelope<Body> = serde_json::from_value(json!({"meta": {"code": 200}})).unwrap();
    assert_eq!(envelope.meta.total_time(), None);
    assert!(matches!(envelope.into_result(), Err(Error::MissingField(ref f)) if f == "response"));
  }

  #[test]
  fn test_bad_meta_timing_is_rejected() {
    let err = serde_json::from_value::<Envelope<Body>>(json!({
      "meta": {"code": 200, "response_time": {"time": 1, "measure": "hours"}},
      "response": {"value": 1}
    }))
    .unwrap_err();
    assert!(err.to_string().contains("invalid time unit"));
  }

  #[test]
  fn test_bad_body_is_rejected() {
    let err = serde_json::from_value::<Envelope<Body>>(json!({
      "meta": {"code": 200},
      "response": {"value": "seven"}
    }))
    .unwrap_err();
    assert!(err.to_string().contains("invalid type"));
  }

  #[test]
  fn test_envelope_round_trip() {
    let input = json!({
      "meta": {"code": 200, "response_time": {"time": 1.5, "measure": "seconds"}},
      "response": {"value": 3}
    });
    let envelope: Envelope<Body> = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&envelope).unwrap(), input);
  }

  #[test]
  fn test_rfc2822_helpers() {
    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
      #[serde(default, deserialize_with = "deser_rfc2822", serialize_with = "ser_rfc2822")]
      created_at: Option<DateTime<FixedOffset>>,
    }

    let s: Stamped =
      serde_json::from_value(json!({"created_at": "Sat, 21 Aug 2010 07:23:45 +0000"})).unwrap();
    let ts = s.created_at.unwrap();
    assert_eq!(ts.timestamp(), 1_282_375_425);
    assert_eq!(
      serde_json::to_value(&s).unwrap(),
      json!({"created_at": "Sat, 21 Aug 2010 07:23:45 +0000"})
    );

    let s: Stamped = serde_json::from_value(json!({})).unwrap();
    assert!(s.created_at.is_none());

    assert!(serde_json::from_value::<Stamped>(json!({"created_at": "yesterday"})).is_err());
  }
}
