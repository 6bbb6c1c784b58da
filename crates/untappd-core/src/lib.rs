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

//! # untappd-core
//!
//! Core types for the Untappd v4 API client.
//!
//! The Untappd API encodes a handful of values in ways that do not map onto
//! plain Rust types: elapsed times arrive as `{"time": 0.3, "measure": "seconds"}`,
//! links arrive as bare strings and booleans arrive as the integers `0` and `1`.
//! This crate provides strongly typed decoders for each of those shapes:
//!
//! - [`ResponseTime`] for duration objects
//! - [`ResponseUrl`] for URL strings
//! - [`ResponseBool`] for integer booleans
//!
//! ## Usage
//!
//! ```
//! use untappd_core::{decode_bool, decode_duration, decode_url};
//!
//! let elapsed = decode_duration(br#"{"time": 1500, "measure": "milliseconds"}"#)?;
//! assert_eq!(elapsed.num_milliseconds(), 1500);
//!
//! let label = decode_url(br#""https://untappd.com/b/label.jpeg""#)?;
//! assert_eq!(label.host_str(), Some("untappd.com"));
//!
//! assert!(decode_bool(b"1")?);
//! # Ok::<(), untappd_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{
  decode_bool, decode_duration, decode_url, ResponseBool, ResponseTime, ResponseUrl, TimeMeasure,
};

/// Base URL for the Untappd v4 API
pub const UNTAPPD_API_URL: &str = "https://api.untappd.com/v4/";

/// Base URL for the Untappd website, used to resolve relative links
pub const UNTAPPD_WEB_URL: &str = "https://untappd.com/";
