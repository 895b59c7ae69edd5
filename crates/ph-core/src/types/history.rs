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

//! Enumerations that shape a price history request.
//!
//! The integer discriminants are part of the C ABI and must not be reordered.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Granularity of each candle in the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum FrequencyType {
  Minute = 0,
  Daily = 1,
  Weekly = 2,
  Monthly = 3,
}

impl FrequencyType {
  /// Every frequency type, in discriminant order
  pub const ALL: [FrequencyType; 4] =
    [FrequencyType::Minute, FrequencyType::Daily, FrequencyType::Weekly, FrequencyType::Monthly];

  /// Name used on the wire
  pub const fn as_str(self) -> &'static str {
    match self {
      FrequencyType::Minute => "minute",
      FrequencyType::Daily => "daily",
      FrequencyType::Weekly => "weekly",
      FrequencyType::Monthly => "monthly",
    }
  }
}

impl std::fmt::Display for FrequencyType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for FrequencyType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "minute" => Ok(FrequencyType::Minute),
      "daily" => Ok(FrequencyType::Daily),
      "weekly" => Ok(FrequencyType::Weekly),
      "monthly" => Ok(FrequencyType::Monthly),
      other => Err(Error::invalid(format!("unknown frequency type({})", other))),
    }
  }
}

impl TryFrom<i32> for FrequencyType {
  type Error = Error;

  fn try_from(value: i32) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|v| *v as i32 == value)
      .ok_or_else(|| Error::invalid(format!("invalid FrequencyType enum value({})", value)))
  }
}

/// Unit of the window a period request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum PeriodType {
  Day = 0,
  Month = 1,
  Year = 2,
  /// Year to date
  Ytd = 3,
}

impl PeriodType {
  /// Every period type, in discriminant order
  pub const ALL: [PeriodType; 4] =
    [PeriodType::Day, PeriodType::Month, PeriodType::Year, PeriodType::Ytd];

  /// Name used on the wire
  pub const fn as_str(self) -> &'static str {
    match self {
      PeriodType::Day => "day",
      PeriodType::Month => "month",
      PeriodType::Year => "year",
      PeriodType::Ytd => "ytd",
    }
  }
}

impl std::fmt::Display for PeriodType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for PeriodType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "day" => Ok(PeriodType::Day),
      "month" => Ok(PeriodType::Month),
      "year" => Ok(PeriodType::Year),
      "ytd" => Ok(PeriodType::Ytd),
      other => Err(Error::invalid(format!("unknown period type({})", other))),
    }
  }
}

impl TryFrom<i32> for PeriodType {
  type Error = Error;

  fn try_from(value: i32) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|v| *v as i32 == value)
      .ok_or_else(|| Error::invalid(format!("invalid PeriodType enum value({})", value)))
  }
}
