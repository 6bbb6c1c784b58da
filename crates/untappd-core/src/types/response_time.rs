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

//! Elapsed-time values encoded as `{"time": <number>, "measure": <unit>}`
//!
//! The API reports request timings in the `meta` block of every response:
//!
//! ```json
//! "response_time": { "time": 0.042, "measure": "seconds" }
//! ```
//!
//! `time` is rounded to six fractional digits of its unit before being scaled
//! to nanoseconds, so `0.3` seconds decodes to exactly 300 milliseconds.

use crate::error::{Error, Result};
use chrono::TimeDelta;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

const FRACTION_DIGITS: usize = 6;
const FRACTION_SCALE: i64 = 1_000_000;

/// Time units the API uses in the `measure` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeMeasure {
  Milliseconds,
  Seconds,
  Minutes,
}

impl TimeMeasure {
  /// Name of the unit as it appears on the wire
  pub fn as_str(&self) -> &'static str {
    match self {
      TimeMeasure::Milliseconds => "milliseconds",
      TimeMeasure::Seconds => "seconds",
      TimeMeasure::Minutes => "minutes",
    }
  }

  /// Length of one unit in nanoseconds
  pub fn nanos(&self) -> i64 {
    match self {
      TimeMeasure::Milliseconds => 1_000_000,
      TimeMeasure::Seconds => 1_000_000_000,
      TimeMeasure::Minutes => 60_000_000_000,
    }
  }
}

impl fmt::Display for TimeMeasure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TimeMeasure {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "milliseconds" => Ok(TimeMeasure::Milliseconds),
      "seconds" => Ok(TimeMeasure::Seconds),
      "minutes" => Ok(TimeMeasure::Minutes),
      other => Err(Error::InvalidTimeUnit(other.to_string())),
    }
  }
}

/// Wire shape of a duration object
#[derive(Debug, Serialize)]
struct RawResponseTime {
  time: f64,
  measure: String,
}

// Only a JSON object is a duration; a derived impl would also take `[time, measure]`.
impl<'de> Deserialize<'de> for RawResponseTime {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(RawResponseTimeVisitor)
  }
}

struct RawResponseTimeVisitor;

impl<'de> de::Visitor<'de> for RawResponseTimeVisitor {
  type Value = RawResponseTime;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a duration object")
  }

  fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
  where
    A: de::MapAccess<'de>,
  {
    let mut time: Option<f64> = None;
    let mut measure: Option<String> = None;

    while let Some(key) = map.next_key::<Cow<'de, str>>()? {
      match key.as_ref() {
        "time" => {
          if time.is_some() {
            return Err(de::Error::duplicate_field("time"));
          }
          time = Some(map.next_value()?);
        }
        "measure" => {
          if measure.is_some() {
            return Err(de::Error::duplicate_field("measure"));
          }
          measure = Some(map.next_value()?);
        }
        _ => {
          map.next_value::<de::IgnoredAny>()?;
        }
      }
    }

    let time = time.ok_or_else(|| de::Error::missing_field("time"))?;
    let measure = measure.ok_or_else(|| de::Error::missing_field("measure"))?;
    Ok(RawResponseTime { time, measure })
  }
}

/// An elapsed time decoded from a `{time, measure}` object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResponseTime(TimeDelta);

impl ResponseTime {
  /// Scale `time` by the unit named in `measure`.
  ///
  /// Fails with [`Error::InvalidTimeUnit`] before any arithmetic when the
  /// unit is not one of `milliseconds`, `seconds` or `minutes`.
  pub fn from_measure(time: f64, measure: &str) -> Result<Self> {
    let unit = match measure.parse::<TimeMeasure>() {
      Ok(unit) => unit,
      Err(e) => {
        debug!("Unrecognized time unit: {:?}", measure);
        return Err(e);
      }
    };

    let delta = scale(time, unit)?;
    trace!("Decoded {} {} as {}", time, unit, delta);
    Ok(ResponseTime(delta))
  }

  /// The decoded duration
  pub fn as_delta(&self) -> TimeDelta {
    self.0
  }

  /// Convert to a `std::time::Duration`; `None` for negative durations
  pub fn to_std(&self) -> Option<std::time::Duration> {
    self.0.to_std().ok()
  }
}

impl From<ResponseTime> for TimeDelta {
  fn from(value: ResponseTime) -> Self {
    value.0
  }
}

impl From<TimeDelta> for ResponseTime {
  fn from(value: TimeDelta) -> Self {
    ResponseTime(value)
  }
}

fn scale(time: f64, unit: TimeMeasure) -> Result<TimeDelta> {
  let overflow = || Error::DurationOverflow(time, unit);

  // Non-finite values format without a decimal point and fail the parse below.
  let fixed = format!("{:.*}", FRACTION_DIGITS, time.abs());
  let (whole, fraction) = fixed.split_once('.').ok_or_else(overflow)?;
  let whole: i64 = whole.parse().map_err(|_| overflow())?;
  let fraction: i64 = fraction.parse().map_err(|_| overflow())?;

  let nanos = whole
    .checked_mul(unit.nanos())
    .and_then(|n| n.checked_add(fraction * (unit.nanos() / FRACTION_SCALE)))
    .ok_or_else(overflow)?;

  Ok(TimeDelta::nanoseconds(if time.is_sign_negative() { -nanos } else { nanos }))
}

impl<'de> Deserialize<'de> for ResponseTime {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = RawResponseTime::deserialize(deserializer)?;
    ResponseTime::from_measure(raw.time, &raw.measure).map_err(de::Error::custom)
  }
}

impl Serialize for ResponseTime {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    // Decoding this back keeps microsecond precision.
    let secs = self.0.num_seconds() as f64 + f64::from(self.0.subsec_nanos()) / 1e9;
    RawResponseTime { time: secs, measure: TimeMeasure::Seconds.as_str().to_string() }
      .serialize(serializer)
  }
}

/// `#[serde(deserialize_with = "deser_duration")]` for `TimeDelta` fields
pub fn deser_duration<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> std::result::Result<TimeDelta, D::Error> {
  ResponseTime::deserialize(deserializer).map(TimeDelta::from)
}

/// Decode a raw JSON duration object.
///
/// Shape problems surface as [`Error::Serde`]; an unknown `measure` as
/// [`Error::InvalidTimeUnit`].
pub fn decode_duration(bytes: &[u8]) -> Result<TimeDelta> {
  let raw: RawResponseTime = serde_json::from_slice(bytes)?;
  ResponseTime::from_measure(raw.time, &raw.measure).map(TimeDelta::from)
}
