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

//! Account credentials carried by every getter.
//!
//! Getters never read these fields; they hold them so whatever transport
//! executes the request can authorize it.

use serde::{Deserialize, Serialize};

/// OAuth credentials for the market data API
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
  pub access_token: String,
  pub refresh_token: String,
  /// Expiration of `refresh_token`, seconds since the epoch
  pub epoch_sec_token_expiration: i64,
  pub client_id: String,
}

impl Credentials {
  pub fn new(
    access_token: impl Into<String>,
    refresh_token: impl Into<String>,
    epoch_sec_token_expiration: i64,
    client_id: impl Into<String>,
  ) -> Self {
    Self {
      access_token: access_token.into(),
      refresh_token: refresh_token.into(),
      epoch_sec_token_expiration,
      client_id: client_id.into(),
    }
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("access_token", &"<redacted>")
      .field("refresh_token", &"<redacted>")
      .field("epoch_sec_token_expiration", &self.epoch_sec_token_expiration)
      .field("client_id", &self.client_id)
      .finish()
  }
}
