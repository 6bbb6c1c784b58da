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

//! Configuration management for the Untappd client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the Untappd client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Untappd application client ID
  pub client_id: String,

  /// Untappd application client secret
  pub client_secret: String,

  /// Base URL for API requests
  pub api_url: Url,

  /// Base URL for the website, used to resolve relative links in responses
  pub web_url: Url,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let client_id = env::var("UNTAPPD_CLIENT_ID")
      .map_err(|_| Error::Config("UNTAPPD_CLIENT_ID not set".to_string()))?;

    let client_secret = env::var("UNTAPPD_CLIENT_SECRET")
      .map_err(|_| Error::Config("UNTAPPD_CLIENT_SECRET not set".to_string()))?;

    let api_url = base_url_from_env("UNTAPPD_API_URL", crate::UNTAPPD_API_URL)?;
    let web_url = base_url_from_env("UNTAPPD_WEB_URL", crate::UNTAPPD_WEB_URL)?;

    Ok(Config { client_id, client_secret, api_url, web_url })
  }

  /// Create a config with default URLs
  pub fn with_credentials(client_id: String, client_secret: String) -> Result<Self> {
    Ok(Config {
      client_id,
      client_secret,
      api_url: Url::parse(crate::UNTAPPD_API_URL)?,
      web_url: Url::parse(crate::UNTAPPD_WEB_URL)?,
    })
  }
}

fn base_url_from_env(key: &str, default: &str) -> Result<Url> {
  let raw = env::var(key).unwrap_or_else(|_| default.to_string());
  Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid {key}: {e}")))
}
