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

//! # ph-core
//!
//! Types shared by the price history crates: the request enumerations, the
//! validation tables that decide which combinations the endpoint accepts,
//! credentials, configuration and the common error type.

pub mod config;
pub mod credentials;
pub mod error;
pub mod types;
pub mod validation;

pub use config::Config;
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use types::{FrequencyType, PeriodType};

/// Base URL for the market data API
pub const MARKETDATA_BASE_URL: &str = "https://api.tdameritrade.com/v1/marketdata";

/// Path segment appended after the symbol
pub const PRICE_HISTORY_PATH: &str = "pricehistory";
