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

//! User profile data models

use serde::{Deserialize, Serialize};
use untappd_core::{ResponseBool, ResponseUrl, Result};
use url::Url;

/// User record as returned by `user/info` and embedded in check-ins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  /// User ID
  pub uid: u64,

  /// Username
  pub user_name: String,

  #[serde(default)]
  pub first_name: String,

  #[serde(default)]
  pub last_name: String,

  /// Avatar image
  pub user_avatar: ResponseUrl,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_avatar_hd: Option<ResponseUrl>,

  /// Whether the profile is private
  pub is_private: ResponseBool,

  /// Whether the user has a supporter subscription
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_supporter: Option<ResponseBool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bio: Option<String>,

  /// Personal website
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<ResponseUrl>,

  /// Profile page; the API sends this as a path on the website
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub untappd_url: Option<ResponseUrl>,
}

/// Body of a `user/info` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
  pub user: User,
}

impl User {
  /// "First Last", falling back to the username
  pub fn display_name(&self) -> String {
    let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
    let full = full.trim();
    if full.is_empty() {
      self.user_name.clone()
    } else {
      full.to_string()
    }
  }

  pub fn is_private(&self) -> bool {
    self.is_private.get()
  }

  pub fn is_supporter(&self) -> bool {
    self.is_supporter.is_some_and(|flag| flag.get())
  }

  /// Absolute profile link, resolving relative paths against `web_url`
  pub fn profile_url(&self, web_url: &Url) -> Result<Url> {
    match &self.untappd_url {
      Some(link) if !link.as_str().is_empty() => link.resolve(web_url),
      _ => Ok(web_url.join(&format!("user/{}", self.user_name))?),
    }
  }
}
