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

//! Price history over a relative window ("the last N days", "the last year")
//!
//! # Validation phases
//!
//! A period request must satisfy three tables: frequency type × frequency,
//! period type × period, and the cross check frequency type × period type.
//!
//! - [`PeriodGetter::new`] enforces all three.
//! - Setters enforce only the pair they touch. [`PeriodGetter::set_period`]
//!   does not look at the frequency type and
//!   [`HistoricalGetter::set_frequency`] does not look at the period type, so a
//!   caller can move from `(day, minute)` to `(month, daily)` with two calls in
//!   either order without the first one failing on the half-updated state.
//! - [`HistoricalGetter::finalize`] re-checks frequency type × period type and
//!   is the only place that does so after construction. The cached
//!   [`HistoricalGetter::url`] may therefore describe a combination the
//!   endpoint will reject; use `finalize` to obtain a URL you intend to send.

use super::{commit, HistoricalBase, HistoricalGetter, Rebuild};
use crate::query::QueryParams;
use chrono::{DateTime, Utc};
use ph_core::validation::{check_frequency_type, check_period};
use ph_core::{Credentials, Error, FrequencyType, PeriodType, Result};
use std::sync::Arc;
use tracing::instrument;

/// Getter for a period of `period` × `period_type`, optionally anchored at a
/// start or end date
///
/// The anchor is a signed epoch-millisecond value: positive means "end date",
/// negative means "start date" (by magnitude) and zero means unanchored.
#[derive(Debug, Clone)]
pub struct PeriodGetter {
  base: HistoricalBase,
  period_type: PeriodType,
  period: u32,
  anchor_msec: i64,
}

impl PeriodGetter {
  /// Create a getter, validating every table including the cross check
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] for an empty symbol or any combination the
  /// validation tables reject.
  #[allow(clippy::too_many_arguments)]
  #[instrument(skip(credentials))]
  pub fn new(
    credentials: Arc<Credentials>,
    symbol: &str,
    period_type: PeriodType,
    period: u32,
    frequency_type: FrequencyType,
    frequency: u32,
    extended_hours: bool,
    anchor_msec: i64,
  ) -> Result<Self> {
    let base = HistoricalBase::new(credentials, symbol, frequency_type, frequency, extended_hours)?;
    check_frequency_type(period_type, frequency_type)?;
    check_period(period_type, period)?;

    let mut getter = Self { base, period_type, period, anchor_msec };
    getter.rebuild()?;
    Ok(getter)
  }

  /// Same getter aimed at another market data root
  pub fn with_marketdata_url(mut self, marketdata_url: &str) -> Result<Self> {
    self.set_marketdata_url(marketdata_url)?;
    Ok(self)
  }

  pub fn period_type(&self) -> PeriodType {
    self.period_type
  }

  pub fn period(&self) -> u32 {
    self.period
  }

  /// Signed anchor in epoch milliseconds (0 when unset)
  pub fn anchor_msec(&self) -> i64 {
    self.anchor_msec
  }

  /// Replace period type and period together
  ///
  /// Only the period type × period pair is checked here; the frequency type
  /// is re-checked against the new period type by [`HistoricalGetter::finalize`].
  pub fn set_period(&mut self, period_type: PeriodType, period: u32) -> Result<()> {
    check_period(period_type, period)?;
    commit(self, |g| {
      g.period_type = period_type;
      g.period = period;
    })
  }

  /// Positive for an end date, negative for a start date, zero to clear
  pub fn set_anchor_msec(&mut self, anchor_msec: i64) -> Result<()> {
    commit(self, |g| g.anchor_msec = anchor_msec)
  }

  /// Anchor the window so it ends at `end`
  pub fn set_end_date(&mut self, end: DateTime<Utc>) -> Result<()> {
    let msec = end.timestamp_millis();
    if msec <= 0 {
      return Err(Error::invalid(format!("end date({}) must be after the epoch", end)));
    }
    self.set_anchor_msec(msec)
  }

  /// Anchor the window so it starts at `start`
  pub fn set_start_date(&mut self, start: DateTime<Utc>) -> Result<()> {
    let msec = start.timestamp_millis();
    if msec <= 0 {
      return Err(Error::invalid(format!("start date({}) must be after the epoch", start)));
    }
    self.set_anchor_msec(-msec)
  }

  /// Clear any start or end anchor
  pub fn clear_anchor(&mut self) -> Result<()> {
    self.set_anchor_msec(0)
  }
}

impl HistoricalGetter for PeriodGetter {
  fn base(&self) -> &HistoricalBase {
    &self.base
  }

  fn update_base(&mut self, apply: &mut dyn FnMut(&mut HistoricalBase)) -> Result<()> {
    commit(self, |g| apply(&mut g.base))
  }

  fn query_params(&self) -> QueryParams {
    let mut params = self.base.query_params();
    params.push(("periodType", self.period_type.to_string()));
    params.push(("period", self.period.to_string()));

    if self.anchor_msec != 0 {
      let key = if self.anchor_msec > 0 { "endDate" } else { "startDate" };
      params.push((key, self.anchor_msec.unsigned_abs().to_string()));
    }
    params
  }

  fn finalize(&self) -> Result<&str> {
    check_frequency_type(self.period_type, self.frequency_type())?;
    Ok(self.url())
  }
}

impl Rebuild for PeriodGetter {
  fn base_mut(&mut self) -> &mut HistoricalBase {
    &mut self.base
  }
}
