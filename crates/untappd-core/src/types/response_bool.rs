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

//! Booleans the API sends as the integers `0` and `1`

use crate::error::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// A flag decoded from an integer `0` or `1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResponseBool(bool);

impl ResponseBool {
  /// `0` is false, `1` is true, anything else is [`Error::InvalidBool`]
  pub fn from_int(value: i64) -> Result<Self> {
    match value {
      0 => Ok(ResponseBool(false)),
      1 => Ok(ResponseBool(true)),
      other => {
        debug!("Rejected integer boolean: {}", other);
        Err(Error::InvalidBool(other))
      }
    }
  }

  pub fn get(&self) -> bool {
    self.0
  }
}

impl From<ResponseBool> for bool {
  fn from(value: ResponseBool) -> Self {
    value.0
  }
}

impl From<bool> for ResponseBool {
  fn from(value: bool) -> Self {
    ResponseBool(value)
  }
}

impl<'de> Deserialize<'de> for ResponseBool {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = i64::deserialize(deserializer)?;
    ResponseBool::from_int(value).map_err(de::Error::custom)
  }
}

impl Serialize for ResponseBool {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_u8(u8::from(self.0))
  }
}

/// `#[serde(deserialize_with = "deser_bool")]` for `bool` fields
pub fn deser_bool<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
  ResponseBool::deserialize(deserializer).map(bool::from)
}

/// Like [`deser_bool`] but accepts `null`; pair with `#[serde(default)]` for absent fields
pub fn deser_opt_bool<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> std::result::Result<Option<bool>, D::Error> {
  Option::<ResponseBool>::deserialize(deserializer).map(|flag| flag.map(bool::from))
}

/// Decode a raw JSON integer boolean.
pub fn decode_bool(bytes: &[u8]) -> Result<bool> {
  let value: i64 = serde_json::from_slice(bytes)?;
  ResponseBool::from_int(value).map(bool::from)
}
