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

//! Exported functions for the historical price getters.
//!
//! Naming follows `<Kind>_<Operation>_ABI`. `HistoricalGetterBase_*` accepts a
//! handle of either kind; the other families require their own kind. Every
//! function takes `allow_exceptions` last and returns an [`ErrorCode`](crate::ErrorCode) as
//! `int`; getters deliver their value through an out-parameter.
//!
//! # Safety
//!
//! All pointer arguments must be null or valid for the access the function
//! makes. Handles must come from the matching create function and must not be
//! used concurrently from several threads.

use crate::error_code::{call_impl, to_raw, write_out, write_string};
use crate::proxy::{
  check_creatable, config, destroy_proxy, install, str_arg, with_base, with_period, with_range, CredentialsC,
  GetterHandle, HISTORICAL_PERIOD_IDS, HISTORICAL_RANGE_IDS,
};
use ph_client::{HistoricalRequest, PeriodGetter, RangeGetter};
use ph_core::{FrequencyType, PeriodType};
use std::ffi::{c_char, c_int, c_longlong, c_uint, c_ulonglong};
use std::sync::Arc;

/* HistoricalGetterBase */

#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_GetSymbol_ABI(
  pgetter: *mut GetterHandle,
  buf: *mut *mut c_char,
  n: *mut usize,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let symbol = with_base(pgetter, |g| Ok(g.symbol().to_string()))?;
    write_string(&symbol, buf, n)
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_SetSymbol_ABI(
  pgetter: *mut GetterHandle,
  symbol: *const c_char,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let symbol = str_arg(symbol, "symbol")?;
    with_base(pgetter, |g| g.set_symbol(symbol))
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_GetFrequency_ABI(
  pgetter: *mut GetterHandle,
  frequency: *mut c_uint,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_base(pgetter, |g| Ok(g.frequency()))?;
    write_out(frequency, value, "frequency")
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_GetFrequencyType_ABI(
  pgetter: *mut GetterHandle,
  frequency_type: *mut c_int,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_base(pgetter, |g| Ok(g.frequency_type()))?;
    write_out(frequency_type, value as c_int, "frequency_type")
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_IsExtendedHours_ABI(
  pgetter: *mut GetterHandle,
  is_extended_hours: *mut c_int,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_base(pgetter, |g| Ok(g.is_extended_hours()))?;
    write_out(is_extended_hours, c_int::from(value), "is_extended_hours")
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_SetExtendedHours_ABI(
  pgetter: *mut GetterHandle,
  is_extended_hours: c_int,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || with_base(pgetter, |g| g.set_extended_hours(is_extended_hours != 0))))
}

/// Replace frequency type and frequency together
#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_SetFrequency_ABI(
  pgetter: *mut GetterHandle,
  frequency_type: c_int,
  frequency: c_uint,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let frequency_type = FrequencyType::try_from(frequency_type)?;
    with_base(pgetter, |g| g.set_frequency(frequency_type, frequency))
  }))
}

/// Cached request URL, without deferred validation
#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_GetUrl_ABI(
  pgetter: *mut GetterHandle,
  buf: *mut *mut c_char,
  n: *mut usize,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let url = with_base(pgetter, |g| Ok(g.url().to_string()))?;
    write_string(&url, buf, n)
  }))
}

/// Request URL after deferred validation; fails if the current field
/// combination is not sendable
#[no_mangle]
pub unsafe extern "C" fn HistoricalGetterBase_Finalize_ABI(
  pgetter: *mut GetterHandle,
  buf: *mut *mut c_char,
  n: *mut usize,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let url = with_base(pgetter, |g| g.finalize().map(str::to_string))?;
    write_string(&url, buf, n)
  }))
}

/* HistoricalPeriodGetter */

/// Create a period getter in `*pgetter`
///
/// On failure `*pgetter` is left empty (null object, type id 0). A handle that
/// still owns a getter is overwritten without being freed.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn HistoricalPeriodGetter_Create_ABI(
  pcreds: *const CredentialsC,
  symbol: *const c_char,
  period_type: c_int,
  period: c_uint,
  frequency_type: c_int,
  frequency: c_uint,
  extended_hours: c_int,
  msec_since_epoch: c_longlong,
  pgetter: *mut GetterHandle,
  allow_exceptions: c_int,
) -> c_int {
  let outcome = call_impl(allow_exceptions, || {
    let creds = check_creatable(pcreds, pgetter)?;
    let frequency_type = FrequencyType::try_from(frequency_type)?;
    let period_type = PeriodType::try_from(period_type)?;
    let symbol = str_arg(symbol, "symbol")?;

    let getter = PeriodGetter::new(
      Arc::new(creds),
      symbol,
      period_type,
      period,
      frequency_type,
      frequency,
      extended_hours != 0,
      msec_since_epoch,
    )?
    .with_marketdata_url(&config().marketdata_url)?;
    Ok(HistoricalRequest::from(getter))
  });
  install(pgetter, HISTORICAL_PERIOD_IDS, outcome)
}

/// Free the getter and null the handle
#[no_mangle]
pub unsafe extern "C" fn HistoricalPeriodGetter_Destroy_ABI(pgetter: *mut GetterHandle, allow_exceptions: c_int) -> c_int {
  to_raw(call_impl(allow_exceptions, || destroy_proxy(pgetter, HISTORICAL_PERIOD_IDS)))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalPeriodGetter_GetPeriodType_ABI(
  pgetter: *mut GetterHandle,
  period_type: *mut c_int,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_period(pgetter, |g| Ok(g.period_type()))?;
    write_out(period_type, value as c_int, "period_type")
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalPeriodGetter_GetPeriod_ABI(
  pgetter: *mut GetterHandle,
  period: *mut c_uint,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_period(pgetter, |g| Ok(g.period()))?;
    write_out(period, value, "period")
  }))
}

/// Replace period type and period; the frequency type cross check waits
/// for `HistoricalGetterBase_Finalize_ABI`
#[no_mangle]
pub unsafe extern "C" fn HistoricalPeriodGetter_SetPeriod_ABI(
  pgetter: *mut GetterHandle,
  period_type: c_int,
  period: c_uint,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let period_type = PeriodType::try_from(period_type)?;
    with_period(pgetter, |g| g.set_period(period_type, period))
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalPeriodGetter_SetMSecSinceEpoch_ABI(
  pgetter: *mut GetterHandle,
  msec_since_epoch: c_longlong,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || with_period(pgetter, |g| g.set_anchor_msec(msec_since_epoch))))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalPeriodGetter_GetMSecSinceEpoch_ABI(
  pgetter: *mut GetterHandle,
  msec_since_epoch: *mut c_longlong,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_period(pgetter, |g| Ok(g.anchor_msec()))?;
    write_out(msec_since_epoch, value, "msec_since_epoch")
  }))
}

/* HistoricalRangeGetter */

/// Create a range getter in `*pgetter`
///
/// On failure `*pgetter` is left empty (null object, type id 0).
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn HistoricalRangeGetter_Create_ABI(
  pcreds: *const CredentialsC,
  symbol: *const c_char,
  frequency_type: c_int,
  frequency: c_uint,
  start_msec_since_epoch: c_ulonglong,
  end_msec_since_epoch: c_ulonglong,
  extended_hours: c_int,
  pgetter: *mut GetterHandle,
  allow_exceptions: c_int,
) -> c_int {
  let outcome = call_impl(allow_exceptions, || {
    let creds = check_creatable(pcreds, pgetter)?;
    let frequency_type = FrequencyType::try_from(frequency_type)?;
    let symbol = str_arg(symbol, "symbol")?;

    let getter = RangeGetter::new(
      Arc::new(creds),
      symbol,
      frequency_type,
      frequency,
      start_msec_since_epoch,
      end_msec_since_epoch,
      extended_hours != 0,
    )?
    .with_marketdata_url(&config().marketdata_url)?;
    Ok(HistoricalRequest::from(getter))
  });
  install(pgetter, HISTORICAL_RANGE_IDS, outcome)
}

/// Free the getter and null the handle
#[no_mangle]
pub unsafe extern "C" fn HistoricalRangeGetter_Destroy_ABI(pgetter: *mut GetterHandle, allow_exceptions: c_int) -> c_int {
  to_raw(call_impl(allow_exceptions, || destroy_proxy(pgetter, HISTORICAL_RANGE_IDS)))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalRangeGetter_GetEndMSecSinceEpoch_ABI(
  pgetter: *mut GetterHandle,
  end_msec: *mut c_ulonglong,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_range(pgetter, |g| Ok(g.end_msec()))?;
    write_out(end_msec, value, "end_msec")
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalRangeGetter_SetEndMSecSinceEpoch_ABI(
  pgetter: *mut GetterHandle,
  end_msec: c_ulonglong,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || with_range(pgetter, |g| g.set_end_msec(end_msec))))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalRangeGetter_GetStartMSecSinceEpoch_ABI(
  pgetter: *mut GetterHandle,
  start_msec: *mut c_ulonglong,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    let value = with_range(pgetter, |g| Ok(g.start_msec()))?;
    write_out(start_msec, value, "start_msec")
  }))
}

#[no_mangle]
pub unsafe extern "C" fn HistoricalRangeGetter_SetStartMSecSinceEpoch_ABI(
  pgetter: *mut GetterHandle,
  start_msec: c_ulonglong,
  allow_exceptions: c_int,
) -> c_int {
  to_raw(call_impl(allow_exceptions, || with_range(pgetter, |g| g.set_start_msec(start_msec))))
}
