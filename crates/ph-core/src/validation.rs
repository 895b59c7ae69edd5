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

//! Validation tables for price history requests.
//!
//! Three fixed mappings decide which field combinations the endpoint accepts:
//!
//! | key | allowed |
//! |---|---|
//! | frequency type | numeric frequencies |
//! | period type | frequency types |
//! | period type | numeric periods |
//!
//! Each table is an exhaustive `match`, so every enum value has an entry by
//! construction and a lookup can never miss.

use crate::error::{Error, Result};
use crate::types::{FrequencyType, PeriodType};

/// Numeric frequencies allowed for a frequency type
pub const fn valid_frequencies(frequency_type: FrequencyType) -> &'static [u32] {
  match frequency_type {
    FrequencyType::Minute => &[1, 5, 10, 15, 30],
    FrequencyType::Daily => &[1],
    FrequencyType::Weekly => &[1],
    FrequencyType::Monthly => &[1],
  }
}

/// Frequency types allowed for a period type
pub const fn valid_frequency_types(period_type: PeriodType) -> &'static [FrequencyType] {
  match period_type {
    PeriodType::Day => &[FrequencyType::Minute],
    PeriodType::Month => &[FrequencyType::Daily, FrequencyType::Weekly],
    PeriodType::Year => &[FrequencyType::Daily, FrequencyType::Weekly, FrequencyType::Monthly],
    PeriodType::Ytd => &[FrequencyType::Daily, FrequencyType::Weekly],
  }
}

/// Numeric periods allowed for a period type
pub const fn valid_periods(period_type: PeriodType) -> &'static [u32] {
  match period_type {
    PeriodType::Day => &[1, 2, 3, 4, 5, 10],
    PeriodType::Month => &[1, 2, 3, 6],
    PeriodType::Year => &[1, 2, 3, 5, 10, 15, 20],
    PeriodType::Ytd => &[1],
  }
}

pub fn frequency_allowed(frequency_type: FrequencyType, frequency: u32) -> bool {
  valid_frequencies(frequency_type).contains(&frequency)
}

pub fn frequency_type_allowed(period_type: PeriodType, frequency_type: FrequencyType) -> bool {
  valid_frequency_types(period_type).contains(&frequency_type)
}

pub fn period_allowed(period_type: PeriodType, period: u32) -> bool {
  valid_periods(period_type).contains(&period)
}

/// Fail with [`Error::InvalidArgument`] unless `frequency` is allowed for `frequency_type`
pub fn check_frequency(frequency_type: FrequencyType, frequency: u32) -> Result<()> {
  if frequency_allowed(frequency_type, frequency) {
    return Ok(());
  }
  Err(Error::invalid(format!(
    "invalid frequency({}) for frequency type({})",
    frequency, frequency_type
  )))
}

/// Fail with [`Error::InvalidArgument`] unless `frequency_type` is allowed for `period_type`
pub fn check_frequency_type(period_type: PeriodType, frequency_type: FrequencyType) -> Result<()> {
  if frequency_type_allowed(period_type, frequency_type) {
    return Ok(());
  }
  Err(Error::invalid(format!(
    "invalid frequency type({}) for period type({})",
    frequency_type, period_type
  )))
}

/// Fail with [`Error::InvalidArgument`] unless `period` is allowed for `period_type`
pub fn check_period(period_type: PeriodType, period: u32) -> Result<()> {
  if period_allowed(period_type, period) {
    return Ok(());
  }
  Err(Error::invalid(format!("invalid period({}) for period type({})", period, period_type)))
}
