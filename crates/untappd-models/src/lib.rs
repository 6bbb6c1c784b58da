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

//! # untappd-models
//!
//! Data models for Untappd v4 API responses.
//!
//! Every API response is wrapped in an [`Envelope`] whose `meta` block carries
//! the status code and request timings. The models use the decoders from
//! `untappd-core` for the API's integer booleans, duration objects and link
//! strings, so fields arrive as native types.
//!
//! ## Usage
//!
//! ```ignore
//! use untappd_models::{BeerInfo, Envelope};
//!
//! let envelope: Envelope<BeerInfo> = serde_json::from_str(&response_json)?;
//! let beer = envelope.into_result()?.beer;
//! ```

#![warn(clippy::all)]

pub mod beer;
pub mod brewery;
pub mod common;
pub mod user;

// Re-export common types for convenience
pub use common::*;

pub use beer::*;
pub use brewery::*;
pub use user::*;
