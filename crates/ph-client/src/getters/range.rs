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

//! Price history between two explicit timestamps

use super::{commit, HistoricalBase, HistoricalGetter, Rebuild};
use crate::query::QueryParams;
use chrono::{DateTime, Utc};
use ph_core::{Credentials, Error, FrequencyType, PeriodType, Result};
use std::sync::Arc;
use tracing::instrument;

/// Getter for an absolute `[start, end]` window in epoch milliseconds
///
/// Start and end are not ordered against each other; the endpoint decides
/// what an inverted range means.
#[derive(Debug, Clone)]
pub struct RangeGetter {
  base: HistoricalBase,
  start_msec: u64,
  end_msec: u64,
}

impl RangeGetter {
  /// Create a getter; only the frequency type × frequency pair is validated
  #[instrument(skip(credentials))]
  pub fn new(
    credentials: Arc<Credentials>,
    symbol: &str,
    frequency_type: FrequencyType,
    frequency: u32,
    start_msec: u64,
    end_msec: u64,
    extended_hours: bool,
  ) -> Result<Self> {
    let base = HistoricalBase::new(credentials, symbol, frequency_type, frequency, extended_hours)?;

    let mut getter = Self { base, start_msec, end_msec };
    getter.rebuild()?;
    Ok(getter)
  }

  /// Same getter aimed at another market data root
  pub fn with_marketdata_url(mut self, marketdata_url: &str) -> Result<Self> {
    self.set_marketdata_url(marketdata_url)?;
    Ok(self)
  }

  pub fn start_msec(&self) -> u64 {
    self.start_msec
  }

  pub fn end_msec(&self) -> u64 {
    self.end_msec
  }

  pub fn set_start_msec(&mut self, start_msec: u64) -> Result<()> {
    commit(self, |g| g.start_msec = start_msec)
  }

  pub fn set_end_msec(&mut self, end_msec: u64) -> Result<()> {
    commit(self, |g| g.end_msec = end_msec)
  }

  /// Set both bounds from UTC datetimes in one rebuild
  pub fn set_dates(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    let start_msec = to_epoch_msec(start)?;
    let end_msec = to_epoch_msec(end)?;
    commit(self, |g| {
      g.start_msec = start_msec;
      g.end_msec = end_msec;
    })
  }
}

fn to_epoch_msec(when: DateTime<Utc>) -> Result<u64> {
  u64::try_from(when.timestamp_millis())
    .map_err(|_| Error::invalid(format!("date({}) is before the epoch", when)))
}

impl HistoricalGetter for RangeGetter {
  fn base(&self) -> &HistoricalBase {
    &self.base
  }

  fn update_base(&mut self, apply: &mut dyn FnMut(&mut HistoricalBase)) -> Result<()> {
    commit(self, |g| apply(&mut g.base))
  }

  fn query_params(&self) -> QueryParams {
    let mut params = self.base.query_params();
    params.push(("startDate", self.start_msec.to_string()));
    params.push(("endDate", self.end_msec.to_string()));

    // daily/weekly/monthly candles are rejected under the endpoint's default
    // period type (day); year accepts all three
    if self.frequency_type() != FrequencyType::Minute {
      params.push(("periodType", PeriodType::Year.to_string()));
    }
    params
  }
}

impl Rebuild for RangeGetter {
  fn base_mut(&mut self) -> &mut HistoricalBase {
    &mut self.base
  }
}
