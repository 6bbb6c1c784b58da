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

//! Links the API sends as plain JSON strings
//!
//! Most links are absolute (`https://untappd.com/assets/...`), but the API also
//! returns relative paths and empty strings for missing images. Absolute links
//! are parsed with [`url::Url`]; relative references are validated against a
//! placeholder base and keep their components exactly as written. Links with an
//! empty authority (`http://`, `//`) have no host and are kept as written too.

use crate::error::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Base used only to check that a relative reference is well formed
const VALIDATION_BASE: &str = "http://relative.invalid/";

/// A parsed URL from an API response, absolute or relative
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResponseUrl(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
  Absolute(Url),
  Verbatim(RawRef),
}

/// Byte ranges into the input string, split per RFC 3986 appendix B
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RawRef {
  serialization: String,
  scheme: Option<Range<usize>>,
  host: Option<Range<usize>>,
  path: Range<usize>,
  query: Option<Range<usize>>,
  fragment: Option<usize>,
}

impl ResponseUrl {
  /// Parse an absolute URL or a relative reference.
  ///
  /// The empty string is a valid relative reference with an empty path. An
  /// empty authority such as `http://` or `//` is accepted with no host.
  pub fn parse(input: &str) -> Result<Self> {
    match Url::parse(input) {
      Ok(url) => Ok(ResponseUrl(Repr::Absolute(url))),
      Err(url::ParseError::RelativeUrlWithoutBase) => {
        match Url::parse(VALIDATION_BASE)?.join(input) {
          Ok(_) => Ok(ResponseUrl(Repr::Verbatim(RawRef::split(input.to_string(), None)))),
          Err(url::ParseError::EmptyHost) => without_host(input, None),
          Err(e) => {
            debug!("Rejected relative URL {:?}: {}", input, e);
            Err(Error::UrlParse(e))
          }
        }
      }
      Err(url::ParseError::EmptyHost) => without_host(input, input.find(':').map(|i| 0..i)),
      Err(e) => {
        debug!("Rejected URL {:?}: {}", input, e);
        Err(Error::UrlParse(e))
      }
    }
  }

  /// True when the link carries a scheme
  pub fn is_absolute(&self) -> bool {
    !self.scheme().is_empty()
  }

  /// The parsed `Url`; `None` for relative references and links without a host
  pub fn as_url(&self) -> Option<&Url> {
    match &self.0 {
      Repr::Absolute(url) => Some(url),
      Repr::Verbatim(_) => None,
    }
  }

  /// Scheme without the trailing `:`; empty for relative references
  pub fn scheme(&self) -> &str {
    match &self.0 {
      Repr::Absolute(url) => url.scheme(),
      Repr::Verbatim(r) => r.scheme.clone().map_or("", |s| &r.serialization[s]),
    }
  }

  pub fn host_str(&self) -> Option<&str> {
    match &self.0 {
      Repr::Absolute(url) => url.host_str(),
      Repr::Verbatim(r) => r.host.clone().map(|h| &r.serialization[h]),
    }
  }

  pub fn path(&self) -> &str {
    match &self.0 {
      Repr::Absolute(url) => url.path(),
      Repr::Verbatim(r) => &r.serialization[r.path.clone()],
    }
  }

  pub fn query(&self) -> Option<&str> {
    match &self.0 {
      Repr::Absolute(url) => url.query(),
      Repr::Verbatim(r) => r.query.clone().map(|q| &r.serialization[q]),
    }
  }

  pub fn fragment(&self) -> Option<&str> {
    match &self.0 {
      Repr::Absolute(url) => url.fragment(),
      Repr::Verbatim(r) => r.fragment.map(|f| &r.serialization[f..]),
    }
  }

  /// The serialized form: normalized for absolute URLs, verbatim otherwise
  pub fn as_str(&self) -> &str {
    match &self.0 {
      Repr::Absolute(url) => url.as_str(),
      Repr::Verbatim(r) => &r.serialization,
    }
  }

  /// Make the link absolute, joining relative references onto `base`.
  ///
  /// Links without a host cannot be joined and fail with `EmptyHost`.
  pub fn resolve(&self, base: &Url) -> Result<Url> {
    match &self.0 {
      Repr::Absolute(url) => Ok(url.clone()),
      Repr::Verbatim(r) => Ok(base.join(&r.serialization)?),
    }
  }
}

/// Keep an empty-authority link as written, provided its split finds no host
fn without_host(input: &str, scheme: Option<Range<usize>>) -> Result<ResponseUrl> {
  let raw = RawRef::split(input.to_string(), scheme);
  if raw.host.is_some() {
    debug!("Rejected URL {:?}: empty host", input);
    return Err(Error::UrlParse(url::ParseError::EmptyHost));
  }
  Ok(ResponseUrl(Repr::Verbatim(raw)))
}

impl RawRef {
  fn split(serialization: String, scheme: Option<Range<usize>>) -> Self {
    let start = scheme.as_ref().map_or(0, |s| s.end + 1);
    let (rest_end, fragment) = match serialization.find('#') {
      Some(i) => (i, Some(i + 1)),
      None => (serialization.len(), None),
    };
    let (path_end, query) = match serialization[..rest_end].find('?') {
      Some(i) => (i, Some(i + 1..rest_end)),
      None => (rest_end, None),
    };

    let (host, path_start) = if serialization[start..path_end].starts_with("//") {
      let authority_start = start + 2;
      let authority_end = serialization[authority_start..path_end]
        .find('/')
        .map_or(path_end, |i| i + authority_start);
      (host_range(&serialization, authority_start..authority_end), authority_end)
    } else {
      (None, start)
    };

    RawRef { scheme, host, path: path_start..path_end, query, fragment, serialization }
  }
}

/// Host within an authority, without userinfo or port
fn host_range(raw: &str, authority: Range<usize>) -> Option<Range<usize>> {
  let start = authority.start + raw[authority.clone()].rfind('@').map_or(0, |i| i + 1);
  let host_and_port = &raw[start..authority.end];
  let end = match host_and_port.rfind(':') {
    Some(i)
      if !host_and_port[i..].contains(']')
        && host_and_port[i + 1..].bytes().all(|b| b.is_ascii_digit()) =>
    {
      start + i
    }
    _ => authority.end,
  };
  (start < end).then_some(start..end)
}

impl From<Url> for ResponseUrl {
  fn from(url: Url) -> Self {
    ResponseUrl(Repr::Absolute(url))
  }
}

impl FromStr for ResponseUrl {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    ResponseUrl::parse(s)
  }
}

impl fmt::Display for ResponseUrl {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for ResponseUrl {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = Cow::<str>::deserialize(deserializer)?;
    ResponseUrl::parse(&raw).map_err(de::Error::custom)
  }
}

impl Serialize for ResponseUrl {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}

/// Decode a raw JSON URL string.
pub fn decode_url(bytes: &[u8]) -> Result<ResponseUrl> {
  let raw: Cow<'_, str> = serde_json::from_slice(bytes)?;
  ResponseUrl::parse(&raw)
}
