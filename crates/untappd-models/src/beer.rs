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

//! Beer data models

use crate::brewery::Brewery;
use crate::common::{deser_rfc2822, ser_rfc2822};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use untappd_core::{ResponseBool, ResponseUrl};

/// Beer record as returned by `beer/info` and embedded in check-ins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
  /// Beer ID
  pub bid: u64,

  /// Beer name
  pub beer_name: String,

  /// Label image
  pub beer_label: ResponseUrl,

  /// High resolution label image
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub beer_label_hd: Option<ResponseUrl>,

  /// Alcohol by volume, in percent
  pub beer_abv: f64,

  /// International bitterness units
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub beer_ibu: Option<f64>,

  #[serde(default)]
  pub beer_description: String,

  /// Style name (e.g. "IPA - American")
  pub beer_style: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub beer_slug: Option<String>,

  /// Whether the beer is still brewed
  pub is_in_production: ResponseBool,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_homebrew: Option<ResponseBool>,

  /// When the beer was added to Untappd
  #[serde(
    default,
    deserialize_with = "deser_rfc2822",
    serialize_with = "ser_rfc2822",
    skip_serializing_if = "Option::is_none"
  )]
  pub created_at: Option<DateTime<FixedOffset>>,

  /// Number of ratings
  #[serde(default)]
  pub rating_count: u64,

  /// Average rating (0 to 5)
  #[serde(default)]
  pub rating_score: f64,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub brewery: Option<Brewery>,
}

/// Body of a `beer/info` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerInfo {
  pub beer: Beer,
}

impl Beer {
  pub fn is_active(&self) -> bool {
    self.is_in_production.get()
  }

  pub fn is_homebrew(&self) -> bool {
    self.is_homebrew.is_some_and(|flag| flag.get())
  }

  /// The best available label image, preferring the high resolution one
  pub fn label(&self) -> &ResponseUrl {
    self
      .beer_label_hd
      .as_ref()
      .filter(|u| !u.as_str().is_empty())
      .unwrap_or(&self.beer_label)
  }

  /// Brewery name, if the brewery was included in the response
  pub fn brewery_name(&self) -> Option<&str> {
    self.brewery.as_ref().map(|b| b.brewery_name.as_str())
  }
}
