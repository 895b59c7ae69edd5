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

pub mod period;
pub mod range;

use crate::query::{price_history_url, QueryParams};
use ph_core::validation::check_frequency;
use ph_core::{Credentials, Error, FrequencyType, Result, MARKETDATA_BASE_URL};
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub use period::PeriodGetter;
pub use range::RangeGetter;

/// State shared by every historical getter
///
/// `frequency_type` and `frequency` are valid together at all times and `url`
/// always reflects the last successfully committed field values.
#[derive(Debug, Clone)]
pub struct HistoricalBase {
  credentials: Arc<Credentials>,
  symbol: String,
  frequency_type: FrequencyType,
  frequency: u32,
  extended_hours: bool,
  marketdata_url: Url,
  url: String,
}

impl HistoricalBase {
  fn new(
    credentials: Arc<Credentials>,
    symbol: &str,
    frequency_type: FrequencyType,
    frequency: u32,
    extended_hours: bool,
  ) -> Result<Self> {
    let symbol = normalize_symbol(symbol)?;
    check_frequency(frequency_type, frequency)?;

    let marketdata_url = Url::parse(MARKETDATA_BASE_URL)
      .map_err(|e| Error::Internal(format!("default market data URL does not parse: {}", e)))?;

    Ok(Self {
      credentials,
      symbol,
      frequency_type,
      frequency,
      extended_hours,
      marketdata_url,
      url: String::new(),
    })
  }

  /// `frequencyType`, `frequency` and `needExtendedHoursData`, in that order
  pub fn query_params(&self) -> QueryParams {
    vec![
      ("frequencyType", self.frequency_type.to_string()),
      ("frequency", self.frequency.to_string()),
      ("needExtendedHoursData", self.extended_hours.to_string()),
    ]
  }

  fn render(&self, params: &QueryParams) -> Result<String> {
    price_history_url(&self.marketdata_url, &self.symbol, params)
  }
}

fn normalize_symbol(symbol: &str) -> Result<String> {
  if symbol.is_empty() {
    return Err(Error::invalid("empty symbol"));
  }
  Ok(symbol.to_uppercase())
}

/// Behavior common to the period and range getters
///
/// Every setter validates its input, commits all affected fields together and
/// rebuilds the URL before returning. A setter that fails leaves the getter
/// exactly as it was.
///
/// Some invariants are only enforced by [`HistoricalGetter::finalize`]; see
/// [`PeriodGetter`] for the deferred frequency type / period type check.
/// [`HistoricalGetter::url`] returns the cached URL without that check.
pub trait HistoricalGetter {
  /// Shared state
  fn base(&self) -> &HistoricalBase;

  /// Apply `apply` to the shared state and rebuild; nothing changes on error
  fn update_base(&mut self, apply: &mut dyn FnMut(&mut HistoricalBase)) -> Result<()>;

  /// Full ordered query parameters for the current state
  fn query_params(&self) -> QueryParams;

  /// Run deferred validation and return the request URL
  fn finalize(&self) -> Result<&str> {
    Ok(self.url())
  }

  fn symbol(&self) -> &str {
    &self.base().symbol
  }

  fn frequency(&self) -> u32 {
    self.base().frequency
  }

  fn frequency_type(&self) -> FrequencyType {
    self.base().frequency_type
  }

  fn is_extended_hours(&self) -> bool {
    self.base().extended_hours
  }

  fn credentials(&self) -> &Arc<Credentials> {
    &self.base().credentials
  }

  fn marketdata_url(&self) -> &Url {
    &self.base().marketdata_url
  }

  /// Cached URL as of the last successful mutation
  fn url(&self) -> &str {
    &self.base().url
  }

  /// Replace the symbol; it is stored uppercased
  fn set_symbol(&mut self, symbol: &str) -> Result<()> {
    let symbol = normalize_symbol(symbol)?;
    self.update_base(&mut |base| base.symbol = symbol.clone())
  }

  fn set_extended_hours(&mut self, extended_hours: bool) -> Result<()> {
    self.update_base(&mut |base| base.extended_hours = extended_hours)
  }

  /// Replace frequency type and frequency together
  fn set_frequency(&mut self, frequency_type: FrequencyType, frequency: u32) -> Result<()> {
    check_frequency(frequency_type, frequency)?;
    self.update_base(&mut |base| {
      base.frequency_type = frequency_type;
      base.frequency = frequency;
    })
  }

  /// Point the getter at a different market data root
  fn set_marketdata_url(&mut self, marketdata_url: &str) -> Result<()> {
    let parsed = crate::query::parse_marketdata_url(marketdata_url)?;
    self.update_base(&mut |base| base.marketdata_url = parsed.clone())
  }
}

/// Crate-internal access needed to rebuild a getter after a mutation
trait Rebuild: HistoricalGetter + Clone {
  fn base_mut(&mut self) -> &mut HistoricalBase;

  fn rebuild(&mut self) -> Result<()> {
    let url = self.base().render(&self.query_params())?;
    debug!(url = %url, "rebuilt price history url");
    self.base_mut().url = url;
    Ok(())
  }
}

/// Apply `apply` to a copy, rebuild the copy, and only then replace `getter`
fn commit<G: Rebuild>(getter: &mut G, apply: impl FnOnce(&mut G)) -> Result<()> {
  let mut next = getter.clone();
  apply(&mut next);
  next.rebuild()?;
  *getter = next;
  Ok(())
}

/// Which concrete getter a [`HistoricalRequest`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GetterKind {
  Period,
  Range,
}

impl std::fmt::Display for GetterKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      GetterKind::Period => write!(f, "HistoricalPeriodGetter"),
      GetterKind::Range => write!(f, "HistoricalRangeGetter"),
    }
  }
}

/// Either kind of historical getter
#[derive(Debug, Clone)]
pub enum HistoricalRequest {
  Period(PeriodGetter),
  Range(RangeGetter),
}

impl HistoricalRequest {
  pub fn kind(&self) -> GetterKind {
    match self {
      HistoricalRequest::Period(_) => GetterKind::Period,
      HistoricalRequest::Range(_) => GetterKind::Range,
    }
  }

  pub fn as_getter(&self) -> &dyn HistoricalGetter {
    match self {
      HistoricalRequest::Period(g) => g,
      HistoricalRequest::Range(g) => g,
    }
  }

  pub fn as_getter_mut(&mut self) -> &mut dyn HistoricalGetter {
    match self {
      HistoricalRequest::Period(g) => g,
      HistoricalRequest::Range(g) => g,
    }
  }

  pub fn finalize(&self) -> Result<&str> {
    self.as_getter().finalize()
  }
}

impl From<PeriodGetter> for HistoricalRequest {
  fn from(getter: PeriodGetter) -> Self {
    HistoricalRequest::Period(getter)
  }
}

impl From<RangeGetter> for HistoricalRequest {
  fn from(getter: RangeGetter) -> Self {
    HistoricalRequest::Range(getter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ph_core::PeriodType;

  fn creds() -> Arc<Credentials> {
    Arc::new(Credentials::new("access", "refresh", 0, "client"))
  }

  #[test]
  fn test_base_query_param_order() {
    let base = HistoricalBase::new(creds(), "spy", FrequencyType::Daily, 1, true).unwrap();
    let keys: Vec<_> = base.query_params().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["frequencyType", "frequency", "needExtendedHoursData"]);
    assert_eq!(base.query_params()[2].1, "true");
    assert_eq!(base.symbol, "SPY");
  }

  #[test]
  fn test_base_rejects_bad_input() {
    let err = HistoricalBase::new(creds(), "", FrequencyType::Minute, 1, false).unwrap_err();
    assert_eq!(err, Error::invalid("empty symbol"));

    let err = HistoricalBase::new(creds(), "SPY", FrequencyType::Daily, 5, false).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
  }

  #[test]
  fn test_request_dispatches_by_variant() {
    let period =
      PeriodGetter::new(creds(), "qqq", PeriodType::Month, 1, FrequencyType::Daily, 1, false, 0).unwrap();
    let range = RangeGetter::new(creds(), "iwm", FrequencyType::Minute, 1, 10, 20, false).unwrap();

    let mut requests: Vec<HistoricalRequest> = vec![period.into(), range.into()];
    assert_eq!(requests[0].kind(), GetterKind::Period);
    assert_eq!(requests[1].kind(), GetterKind::Range);

    for request in requests.iter_mut() {
      request.as_getter_mut().set_extended_hours(true).unwrap();
      assert!(request.finalize().unwrap().contains("needExtendedHoursData=true"));
    }
    assert_eq!(requests[1].as_getter().symbol(), "IWM");
  }

  #[test]
  fn test_kind_display() {
    assert_eq!(GetterKind::Period.to_string(), "HistoricalPeriodGetter");
    assert_eq!(GetterKind::Range.to_string(), "HistoricalRangeGetter");
  }
}
