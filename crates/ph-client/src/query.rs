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

//! URL assembly for price history requests

use ph_core::{Error, Result, PRICE_HISTORY_PATH};
use url::Url;

/// Ordered query parameters. Order is preserved in the encoded output so the
/// same getter state always produces the same URL.
pub type QueryParams = Vec<(&'static str, String)>;

/// Parse and validate a market data root URL
pub fn parse_marketdata_url(raw: &str) -> Result<Url> {
  let normalized = ph_core::config::normalize_marketdata_url(raw)?;
  Url::parse(&normalized).map_err(|e| Error::Config(format!("Invalid market data URL: {}", e)))
}

/// Build `<marketdata_url>/<symbol>/pricehistory?<params>`, percent-encoding
/// the symbol as a path segment and the parameters as form data.
pub fn price_history_url(marketdata_url: &Url, symbol: &str, params: &[(&'static str, String)]) -> Result<String> {
  let mut url = marketdata_url.clone();

  url
    .path_segments_mut()
    .map_err(|_| Error::Internal(format!("market data URL '{}' cannot carry a path", marketdata_url)))?
    .pop_if_empty()
    .push(symbol)
    .push(PRICE_HISTORY_PATH);

  url.set_query(None);
  url.query_pairs_mut().extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));

  Ok(url.to_string())
}
