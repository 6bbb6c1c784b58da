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

use crate::types::TimeMeasure;
use thiserror::Error;

/// The main error type for untappd-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// JSON did not have the expected shape (wrong type, missing field)
  #[error(transparent)]
  Serde(#[from] serde_json::Error),

  /// Duration `measure` outside the recognized set
  #[error("invalid time unit: {0:?}")]
  InvalidTimeUnit(String),

  /// Integer boolean that was neither 0 nor 1
  #[error("invalid boolean value: {0}")]
  InvalidBool(i64),

  /// URL string rejected by the URL parser
  #[error(transparent)]
  UrlParse(#[from] url::ParseError),

  /// Duration magnitude does not fit in a signed nanosecond count
  #[error("duration out of range: {0} {1}")]
  DurationOverflow(f64, TimeMeasure),

  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// Error reported in the `meta` block of an API response
  #[error("API error {code} ({error_type}): {detail}")]
  Api { code: u16, error_type: String, detail: String },
}

impl Error {
  /// True when the error came from the JSON layer rather than from a decoded value
  pub fn is_shape(&self) -> bool {
    matches!(self, Error::Serde(_))
  }
}

/// Result type alias for untappd-* crates
pub type Result<T> = std::result::Result<T, Error>;
