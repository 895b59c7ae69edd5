/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

//! Configuration management for price history getters

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Environment variable overriding [`crate::MARKETDATA_BASE_URL`]
pub const MARKETDATA_URL_VAR: &str = "PH_MARKETDATA_URL";

/// Main configuration struct for price history getters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Market data endpoint root; the symbol and `pricehistory` are appended to it
  pub marketdata_url: String,
}

impl Config {
  /// Load configuration from environment variables (and a `.env` file if present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let marketdata_url = match env::var(MARKETDATA_URL_VAR) {
      Ok(raw) => normalize_marketdata_url(&raw)?,
      Err(env::VarError::NotPresent) => crate::MARKETDATA_BASE_URL.to_string(),
      Err(e) => return Err(e.into()),
    };

    Ok(Config { marketdata_url })
  }
}

impl Default for Config {
  fn default() -> Self {
    Config { marketdata_url: crate::MARKETDATA_BASE_URL.to_string() }
  }
}

/// Check that `raw` is an absolute URL able to carry path segments and strip
/// any trailing slash.
pub fn normalize_marketdata_url(raw: &str) -> Result<String> {
  let trimmed = raw.trim();
  let parsed =
    Url::parse(trimmed).map_err(|e| Error::Config(format!("Invalid market data URL '{}': {}", trimmed, e)))?;

  if parsed.cannot_be_a_base() {
    return Err(Error::Config(format!("Market data URL '{}' cannot carry a path", trimmed)));
  }
  if parsed.query().is_some() || parsed.fragment().is_some() {
    return Err(Error::Config(format!(
      "Market data URL '{}' must not have a query or fragment",
      trimmed
    )));
  }

  Ok(trimmed.trim_end_matches('/').to_string())
}
