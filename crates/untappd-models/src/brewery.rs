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

//! Brewery data models

use serde::{Deserialize, Serialize};
use untappd_core::{ResponseBool, ResponseUrl};

/// Brewery record as embedded in beer and check-in responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brewery {
  /// Brewery ID
  pub brewery_id: u64,

  /// Brewery name
  pub brewery_name: String,

  /// URL slug
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub brewery_slug: Option<String>,

  /// Label image; empty when the brewery has none
  pub brewery_label: ResponseUrl,

  /// Country
  #[serde(default)]
  pub country_name: String,

  /// Whether the brewery is still operating
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub brewery_active: Option<ResponseBool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact: Option<BreweryContact>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<BreweryLocation>,
}

/// Social and web links for a brewery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreweryContact {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub twitter: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub facebook: Option<ResponseUrl>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<ResponseUrl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreweryLocation {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub brewery_city: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub brewery_state: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lat: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lng: Option<f64>,
}

impl Brewery {
  /// Breweries that do not report a status are treated as active
  pub fn is_active(&self) -> bool {
    self.brewery_active.map_or(true, |flag| flag.get())
  }

  /// The brewery website, if one is listed
  pub fn website(&self) -> Option<&ResponseUrl> {
    self.contact.as_ref()?.url.as_ref().filter(|u| !u.as_str().is_empty())
  }

  /// "City, State" when both are known
  pub fn city_state(&self) -> Option<String> {
    let location = self.location.as_ref()?;
    match (location.brewery_city.as_deref(), location.brewery_state.as_deref()) {
      (Some(city), Some(state)) if !city.is_empty() && !state.is_empty() => {
        Some(format!("{}, {}", city, state))
      }
      (Some(city), _) if !city.is_empty() => Some(city.to_string()),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn sample() -> serde_json::Value {
    json!({
      "brewery_id": 1,
      "brewery_name": "Lagunitas Brewing Company",
      "brewery_slug": "lagunitas-brewing-company",
      "brewery_label": "https://untappd.akamaized.net/site/brewery_logos/brewery-1_b7b1f.jpeg",
      "country_name": "United States",
      "brewery_active": 1,
      "contact": {
        "twitter": "lagunitasbeer",
        "facebook": "http://www.facebook.com/LagunitasBrewingCompany",
        "url": "http://www.lagunitas.com/"
      },
      "location": {
        "brewery_city": "Petaluma",
        "brewery_state": "CA",
        "lat": 38.2724,
        "lng": -122.662
      }
    })
  }

  #[test]
  fn test_brewery_deserialization() {
    let brewery: Brewery = serde_json::from_value(sample()).unwrap();
    assert_eq!(brewery.brewery_name, "Lagunitas Brewing Company");
    assert_eq!(brewery.brewery_label.host_str(), Some("untappd.akamaized.net"));
    assert!(brewery.is_active());
    assert_eq!(brewery.website().unwrap().host_str(), Some("www.lagunitas.com"));
    assert_eq!(brewery.city_state().as_deref(), Some("Petaluma, CA"));
    assert_eq!(
      brewery.contact.as_ref().unwrap().facebook.as_ref().unwrap().path(),
      "/LagunitasBrewingCompany"
    );
  }

  #[test]
  fn test_empty_links_and_inactive() {
    let mut value = sample();
    value["brewery_label"] = json!("");
    value["brewery_active"] = json!(0);
    value["contact"]["url"] = json!("");
    value["location"]["brewery_state"] = json!("");

    let brewery: Brewery = serde_json::from_value(value).unwrap();
    assert_eq!(brewery.brewery_label.path(), "");
    assert!(!brewery.is_active());
    assert!(brewery.website().is_none());
    assert_eq!(brewery.city_state().as_deref(), Some("Petaluma"));
  }

  #[test]
  fn test_minimal_brewery() {
    let brewery: Brewery = serde_json::from_value(json!({
      "brewery_id": 2,
      "brewery_name": "Garage Project",
      "brewery_label": "https://untappd.akamaized.net/site/assets/images/temp/badge-brewery-default.png"
    }))
    .unwrap();
    assert!(brewery.is_active());
    assert!(brewery.website().is_none());
    assert!(brewery.city_state().is_none());
    assert_eq!(brewery.country_name, "");
  }

  #[test]
  fn test_invalid_active_flag() {
    let mut value = sample();
    value["brewery_active"] = json!(2);
    let err = serde_json::from_value::<Brewery>(value).unwrap_err();
    assert!(err.to_string().contains("invalid boolean value: 2"));
  }
}
