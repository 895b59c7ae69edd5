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

//! Drives the exported functions the way a C caller would.

use ph_abi::error_code::{FreeBuffer_ABI, LastErrorCode_ABI, LastErrorMsg_ABI};
use ph_abi::historical::*;
use ph_abi::{clear_last_error, CredentialsC, ErrorCode, GetterHandle};
use std::ffi::{c_char, c_int, c_uint, c_void, CStr, CString};
use std::ptr;

const MINUTE: c_int = 0;
const DAILY: c_int = 1;
const WEEKLY: c_int = 2;
const DAY: c_int = 0;
const MONTH: c_int = 1;

const OK: c_int = ErrorCode::Ok as c_int;
const INVALID_ARGUMENT: c_int = ErrorCode::InvalidArgument as c_int;
const HANDLE_INVALID: c_int = ErrorCode::HandleInvalid as c_int;

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}

/// Credentials whose strings outlive the C view handed to create
struct TestCreds {
  _access: CString,
  _refresh: CString,
  _client: CString,
  raw: CredentialsC,
}

impl TestCreds {
  fn new() -> Self {
    let access = CString::new("access-token").unwrap();
    let refresh = CString::new("refresh-token").unwrap();
    let client = CString::new("CLIENT@AMER.OAUTHAP").unwrap();
    let raw = CredentialsC {
      access_token: access.as_ptr() as *mut c_char,
      refresh_token: refresh.as_ptr() as *mut c_char,
      epoch_sec_token_expiration: 1_900_000_000,
      client_id: client.as_ptr() as *mut c_char,
    };
    Self { _access: access, _refresh: refresh, _client: client, raw }
  }
}

/// Handle that looks populated but points nowhere valid; create must overwrite
/// or kill it without reading through it
fn dirty_handle() -> GetterHandle {
  GetterHandle { obj: 0x10 as *mut c_void, type_id: 99 }
}

unsafe fn create_period(
  creds: &TestCreds,
  symbol: &str,
  period_type: c_int,
  period: c_uint,
  frequency_type: c_int,
  frequency: c_uint,
  anchor: i64,
  handle: &mut GetterHandle,
) -> c_int {
  let symbol = CString::new(symbol).unwrap();
  HistoricalPeriodGetter_Create_ABI(
    &creds.raw,
    symbol.as_ptr(),
    period_type,
    period,
    frequency_type,
    frequency,
    0,
    anchor,
    handle,
    0,
  )
}

unsafe fn create_range(creds: &TestCreds, symbol: &str, frequency_type: c_int, handle: &mut GetterHandle) -> c_int {
  let symbol = CString::new(symbol).unwrap();
  HistoricalRangeGetter_Create_ABI(&creds.raw, symbol.as_ptr(), frequency_type, 1, 1_000, 2_000, 1, handle, 0)
}

unsafe fn take_string(
  f: unsafe extern "C" fn(*mut GetterHandle, *mut *mut c_char, *mut usize, c_int) -> c_int,
  handle: &mut GetterHandle,
) -> Result<String, c_int> {
  let mut buf: *mut c_char = ptr::null_mut();
  let mut n: usize = 0;
  let code = f(handle, &mut buf, &mut n, 0);
  if code != OK {
    return Err(code);
  }
  let value = CStr::from_ptr(buf).to_str().unwrap().to_string();
  assert_eq!(n, value.len() + 1);
  assert_eq!(FreeBuffer_ABI(buf, 0), OK);
  Ok(value)
}

unsafe fn url(handle: &mut GetterHandle) -> Result<String, c_int> {
  take_string(HistoricalGetterBase_GetUrl_ABI, handle)
}

unsafe fn finalize(handle: &mut GetterHandle) -> Result<String, c_int> {
  take_string(HistoricalGetterBase_Finalize_ABI, handle)
}

#[test]
fn test_period_create_get_destroy() {
  init_tracing();
  let creds = TestCreds::new();
  let mut handle = dirty_handle();

  unsafe {
    assert_eq!(create_period(&creds, "spy", DAY, 1, MINUTE, 1, 0, &mut handle), OK);
    assert!(!handle.is_null());
    assert_eq!(handle.type_id, ph_abi::TYPE_ID_GETTER_HISTORICAL_PERIOD);

    assert_eq!(take_string(HistoricalGetterBase_GetSymbol_ABI, &mut handle).unwrap(), "SPY");

    let url = finalize(&mut handle).unwrap();
    assert!(url.contains("/SPY/pricehistory?"));
    assert!(url.ends_with("frequencyType=minute&frequency=1&needExtendedHoursData=false&periodType=day&period=1"));

    let mut period_type: c_int = -1;
    let mut period: c_uint = 0;
    let mut frequency_type: c_int = -1;
    assert_eq!(HistoricalPeriodGetter_GetPeriodType_ABI(&mut handle, &mut period_type, 0), OK);
    assert_eq!(HistoricalPeriodGetter_GetPeriod_ABI(&mut handle, &mut period, 0), OK);
    assert_eq!(HistoricalGetterBase_GetFrequencyType_ABI(&mut handle, &mut frequency_type, 0), OK);
    assert_eq!((period_type, period, frequency_type), (DAY, 1, MINUTE));

    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), OK);
    assert!(handle.is_null());
    assert_eq!(handle.type_id, 0);
  }
}

#[test]
fn test_use_after_destroy_is_handle_invalid() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();

  unsafe {
    assert_eq!(create_period(&creds, "SPY", DAY, 1, MINUTE, 1, 0, &mut handle), OK);
    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), OK);

    let mut frequency: c_uint = 0;
    assert_eq!(HistoricalGetterBase_GetFrequency_ABI(&mut handle, &mut frequency, 0), HANDLE_INVALID);
    assert_eq!(HistoricalPeriodGetter_SetMSecSinceEpoch_ABI(&mut handle, 5, 0), HANDLE_INVALID);
    assert_eq!(url(&mut handle), Err(HANDLE_INVALID));
    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), HANDLE_INVALID);
    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(ptr::null_mut(), 0), HANDLE_INVALID);
  }
}

#[test]
fn test_failed_create_kills_handle() {
  let creds = TestCreds::new();

  unsafe {
    let mut handle = dirty_handle();
    assert_eq!(create_period(&creds, "", DAY, 1, MINUTE, 1, 0, &mut handle), INVALID_ARGUMENT);
    assert!(handle.is_null());
    assert_eq!(handle.type_id, 0);

    // (day, daily) is rejected by the cross check at construction
    let mut handle = dirty_handle();
    assert_eq!(create_period(&creds, "SPY", DAY, 1, DAILY, 1, 0, &mut handle), INVALID_ARGUMENT);
    assert!(handle.is_null());

    let mut handle = dirty_handle();
    assert_eq!(create_period(&creds, "SPY", 7, 1, MINUTE, 1, 0, &mut handle), INVALID_ARGUMENT);
    assert!(handle.is_null());

    let mut handle = dirty_handle();
    assert_eq!(create_period(&creds, "SPY", DAY, 1, -1, 1, 0, &mut handle), INVALID_ARGUMENT);
    assert!(handle.is_null());

    let mut handle = dirty_handle();
    assert_eq!(create_range(&creds, "", DAILY, &mut handle), INVALID_ARGUMENT);
    assert!(handle.is_null());

    let mut handle = dirty_handle();
    assert_eq!(
      HistoricalRangeGetter_Create_ABI(&creds.raw, ptr::null(), DAILY, 1, 0, 0, 0, &mut handle, 0),
      INVALID_ARGUMENT
    );
    assert!(handle.is_null());

    let mut handle = dirty_handle();
    let symbol = CString::new("SPY").unwrap();
    assert_eq!(
      HistoricalPeriodGetter_Create_ABI(ptr::null(), symbol.as_ptr(), DAY, 1, MINUTE, 1, 0, 0, &mut handle, 0),
      INVALID_ARGUMENT
    );
    assert!(handle.is_null());

    assert_eq!(
      HistoricalPeriodGetter_Create_ABI(&creds.raw, symbol.as_ptr(), DAY, 1, MINUTE, 1, 0, 0, ptr::null_mut(), 0),
      INVALID_ARGUMENT
    );
  }
}

#[test]
fn test_deferred_cross_check_through_abi() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();

  unsafe {
    assert_eq!(create_period(&creds, "QQQ", DAY, 1, MINUTE, 1, 0, &mut handle), OK);

    assert_eq!(HistoricalPeriodGetter_SetPeriod_ABI(&mut handle, MONTH, 1, 0), OK);
    assert!(url(&mut handle).unwrap().contains("periodType=month&period=1"));
    assert_eq!(finalize(&mut handle), Err(INVALID_ARGUMENT));

    assert_eq!(HistoricalGetterBase_SetFrequency_ABI(&mut handle, WEEKLY, 1, 0), OK);
    let url = finalize(&mut handle).unwrap();
    assert!(url.contains("frequencyType=weekly&frequency=1"));
    assert!(url.contains("periodType=month&period=1"));

    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), OK);
  }
}

#[test]
fn test_failed_setters_leave_state_unchanged() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();

  unsafe {
    assert_eq!(create_period(&creds, "SPY", DAY, 2, MINUTE, 5, 0, &mut handle), OK);
    let before = url(&mut handle).unwrap();

    assert_eq!(HistoricalGetterBase_SetFrequency_ABI(&mut handle, MINUTE, 2, 0), INVALID_ARGUMENT);
    assert_eq!(HistoricalGetterBase_SetFrequency_ABI(&mut handle, 9, 1, 0), INVALID_ARGUMENT);
    assert_eq!(HistoricalPeriodGetter_SetPeriod_ABI(&mut handle, DAY, 7, 0), INVALID_ARGUMENT);
    assert_eq!(HistoricalPeriodGetter_SetPeriod_ABI(&mut handle, -3, 1, 0), INVALID_ARGUMENT);
    let empty = CString::new("").unwrap();
    assert_eq!(HistoricalGetterBase_SetSymbol_ABI(&mut handle, empty.as_ptr(), 0), INVALID_ARGUMENT);
    assert_eq!(HistoricalGetterBase_SetSymbol_ABI(&mut handle, ptr::null(), 0), INVALID_ARGUMENT);

    let mut frequency: c_uint = 0;
    let mut period: c_uint = 0;
    assert_eq!(HistoricalGetterBase_GetFrequency_ABI(&mut handle, &mut frequency, 0), OK);
    assert_eq!(HistoricalPeriodGetter_GetPeriod_ABI(&mut handle, &mut period, 0), OK);
    assert_eq!((frequency, period), (5, 2));
    assert_eq!(url(&mut handle).unwrap(), before);

    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), OK);
  }
}

#[test]
fn test_anchor_round_trip_through_abi() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();

  unsafe {
    assert_eq!(create_period(&creds, "SPY", DAY, 1, MINUTE, 1, 0, &mut handle), OK);

    for (anchor, expected) in [
      (1_540_000_000_000_i64, Some("endDate=1540000000000")),
      (-1_540_000_000_000_i64, Some("startDate=1540000000000")),
      (0, None),
    ] {
      assert_eq!(HistoricalPeriodGetter_SetMSecSinceEpoch_ABI(&mut handle, anchor, 0), OK);

      let mut read_back: i64 = 1;
      assert_eq!(HistoricalPeriodGetter_GetMSecSinceEpoch_ABI(&mut handle, &mut read_back, 0), OK);
      assert_eq!(read_back, anchor);

      let url = url(&mut handle).unwrap();
      match expected {
        Some(fragment) => assert!(url.ends_with(fragment), "{} does not end with {}", url, fragment),
        None => assert!(!url.contains("startDate") && !url.contains("endDate")),
      }
    }

    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), OK);
  }
}

#[test]
fn test_range_getter_through_abi() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();

  unsafe {
    assert_eq!(create_range(&creds, "msft", DAILY, &mut handle), OK);
    assert_eq!(handle.type_id, ph_abi::TYPE_ID_GETTER_HISTORICAL_RANGE);
    assert!(url(&mut handle).unwrap().ends_with("startDate=1000&endDate=2000&periodType=year"));

    assert_eq!(HistoricalRangeGetter_SetStartMSecSinceEpoch_ABI(&mut handle, 3_000, 0), OK);
    assert_eq!(HistoricalRangeGetter_SetEndMSecSinceEpoch_ABI(&mut handle, 4_000, 0), OK);
    let (mut start, mut end) = (0u64, 0u64);
    assert_eq!(HistoricalRangeGetter_GetStartMSecSinceEpoch_ABI(&mut handle, &mut start, 0), OK);
    assert_eq!(HistoricalRangeGetter_GetEndMSecSinceEpoch_ABI(&mut handle, &mut end, 0), OK);
    assert_eq!((start, end), (3_000, 4_000));

    assert_eq!(HistoricalGetterBase_SetFrequency_ABI(&mut handle, MINUTE, 10, 0), OK);
    let url = finalize(&mut handle).unwrap();
    assert!(url.contains("frequencyType=minute&frequency=10&needExtendedHoursData=true"));
    assert!(!url.contains("periodType"));

    let mut extended: c_int = 0;
    assert_eq!(HistoricalGetterBase_SetExtendedHours_ABI(&mut handle, 0, 0), OK);
    assert_eq!(HistoricalGetterBase_IsExtendedHours_ABI(&mut handle, &mut extended, 0), OK);
    assert_eq!(extended, 0);

    // range handles are not period handles
    let mut period: c_uint = 0;
    assert_eq!(HistoricalPeriodGetter_GetPeriod_ABI(&mut handle, &mut period, 0), HANDLE_INVALID);
    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), HANDLE_INVALID);
    assert!(!handle.is_null());

    assert_eq!(HistoricalRangeGetter_Destroy_ABI(&mut handle, 0), OK);
    assert!(handle.is_null());
  }
}

#[test]
fn test_getters_are_idempotent() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();

  unsafe {
    assert_eq!(create_period(&creds, "SPY", DAY, 5, MINUTE, 30, 0, &mut handle), OK);
    let first_url = url(&mut handle).unwrap();

    let (mut a, mut b): (c_uint, c_uint) = (0, 0);
    assert_eq!(HistoricalGetterBase_GetFrequency_ABI(&mut handle, &mut a, 0), OK);
    assert_eq!(HistoricalGetterBase_GetFrequency_ABI(&mut handle, &mut b, 0), OK);
    assert_eq!(a, b);
    assert_eq!(
      take_string(HistoricalGetterBase_GetSymbol_ABI, &mut handle),
      take_string(HistoricalGetterBase_GetSymbol_ABI, &mut handle)
    );
    assert_eq!(url(&mut handle).unwrap(), first_url);

    assert_eq!(HistoricalGetterBase_GetFrequency_ABI(&mut handle, ptr::null_mut(), 0), INVALID_ARGUMENT);
    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 0), OK);
  }
}

#[test]
fn test_allow_exceptions_controls_last_error() {
  let creds = TestCreds::new();
  let mut handle = GetterHandle::empty();
  clear_last_error();

  unsafe {
    assert_eq!(create_period(&creds, "SPY", DAY, 1, MINUTE, 1, 0, &mut handle), OK);

    assert_eq!(HistoricalGetterBase_SetFrequency_ABI(&mut handle, MINUTE, 3, 0), INVALID_ARGUMENT);
    assert_eq!(LastErrorCode_ABI(), OK);

    assert_eq!(HistoricalGetterBase_SetFrequency_ABI(&mut handle, MINUTE, 3, 1), INVALID_ARGUMENT);
    assert_eq!(LastErrorCode_ABI(), INVALID_ARGUMENT);

    let mut buf: *mut c_char = ptr::null_mut();
    let mut n: usize = 0;
    assert_eq!(LastErrorMsg_ABI(&mut buf, &mut n), OK);
    let message = CStr::from_ptr(buf).to_str().unwrap().to_string();
    assert_eq!(FreeBuffer_ABI(buf, 0), OK);
    assert!(message.contains("invalid frequency(3) for frequency type(minute)"), "{}", message);

    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 1), OK);
    assert_eq!(HistoricalPeriodGetter_Destroy_ABI(&mut handle, 1), HANDLE_INVALID);
    assert_eq!(LastErrorCode_ABI(), HANDLE_INVALID);
  }
  clear_last_error();
}
