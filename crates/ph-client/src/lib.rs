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

//! # ph-client
//!
//! Price history getters. A getter holds the fields of one price history
//! request, validates every change against the tables in
//! [`ph_core::validation`] and keeps a ready-to-send request URL up to date.
//! Nothing here performs I/O; hand the URL from
//! [`HistoricalGetter::finalize`] to whatever transport you use.
//!
//! ## Usage
//!
//! ```rust
//! use ph_client::{HistoricalGetter, PeriodGetter};
//! use ph_core::{Credentials, FrequencyType, PeriodType};
//! use std::sync::Arc;
//!
//! let creds = Arc::new(Credentials::default());
//! let mut getter = PeriodGetter::new(
//!     creds, "spy", PeriodType::Day, 1, FrequencyType::Minute, 1, false, 0,
//! )?;
//!
//! // period type and frequency type can be changed in two steps
//! getter.set_period(PeriodType::Month, 1)?;
//! getter.set_frequency(FrequencyType::Daily, 1)?;
//!
//! let url = getter.finalize()?;
//! assert!(url.contains("periodType=month&period=1"));
//! # Ok::<(), ph_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible methods return `Result<T, ph_core::Error>`.

#![warn(clippy::all)]

pub mod getters;
pub mod query;

pub use getters::{GetterKind, HistoricalBase, HistoricalGetter, HistoricalRequest, PeriodGetter, RangeGetter};
pub use ph_core::{Config, Credentials, Error, FrequencyType, PeriodType, Result};
