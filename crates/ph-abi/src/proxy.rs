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

//! Opaque handles and type-tag dispatch.
//!
//! A handle is a plain C struct `{ void *obj; int type_id; }`. `obj` points at
//! a heap-allocated [`HistoricalRequest`] and `type_id` names the concrete
//! getter behind it. Every call checks the tag against the range the target
//! operation accepts before touching `obj`; a handle whose `obj` is null (never
//! created, killed by a failed create, or destroyed) is rejected with
//! [`ErrorCode::HandleInvalid`](crate::ErrorCode::HandleInvalid).
//!
//! Handles are not reference counted. Copies of a handle struct made before
//! destroy are not nulled and must not be used afterwards.

use crate::error_code::ErrorCode;
use ph_client::{GetterKind, HistoricalGetter, HistoricalRequest, PeriodGetter, RangeGetter};
use ph_core::{Config, Credentials, Error, Result};
use std::ffi::{c_char, c_int, c_longlong, c_void, CStr};
use std::ptr;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

pub const TYPE_ID_GETTER_HISTORICAL_PERIOD: c_int = 1;
pub const TYPE_ID_GETTER_HISTORICAL_RANGE: c_int = 2;

/// C layout of every getter handle (`HistoricalPeriodGetter_C`,
/// `HistoricalRangeGetter_C`)
#[repr(C)]
#[derive(Debug)]
pub struct GetterHandle {
  pub obj: *mut c_void,
  pub type_id: c_int,
}

impl GetterHandle {
  /// Empty handle, ready to be passed to a create function
  pub const fn empty() -> Self {
    Self { obj: ptr::null_mut(), type_id: 0 }
  }

  pub fn is_null(&self) -> bool {
    self.obj.is_null()
  }
}

impl Default for GetterHandle {
  fn default() -> Self {
    Self::empty()
  }
}

/// C layout of the credentials passed to the create functions
///
/// Null string pointers are read as empty strings.
#[repr(C)]
#[derive(Debug)]
pub struct CredentialsC {
  pub access_token: *mut c_char,
  pub refresh_token: *mut c_char,
  pub epoch_sec_token_expiration: c_longlong,
  pub client_id: *mut c_char,
}

/// Inclusive range of type ids an operation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeIds {
  pub low: c_int,
  pub high: c_int,
  pub name: &'static str,
}

impl TypeIds {
  pub const fn contains(&self, type_id: c_int) -> bool {
    self.low <= type_id && type_id <= self.high
  }
}

/// Operations shared by every historical getter
pub const HISTORICAL_BASE_IDS: TypeIds = TypeIds {
  low: TYPE_ID_GETTER_HISTORICAL_PERIOD,
  high: TYPE_ID_GETTER_HISTORICAL_RANGE,
  name: "HistoricalGetterBase",
};

pub const HISTORICAL_PERIOD_IDS: TypeIds = TypeIds {
  low: TYPE_ID_GETTER_HISTORICAL_PERIOD,
  high: TYPE_ID_GETTER_HISTORICAL_PERIOD,
  name: "HistoricalPeriodGetter",
};

pub const HISTORICAL_RANGE_IDS: TypeIds = TypeIds {
  low: TYPE_ID_GETTER_HISTORICAL_RANGE,
  high: TYPE_ID_GETTER_HISTORICAL_RANGE,
  name: "HistoricalRangeGetter",
};

/// Type id stored in a handle for each getter kind
pub const fn type_id_of(kind: GetterKind) -> c_int {
  match kind {
    GetterKind::Period => TYPE_ID_GETTER_HISTORICAL_PERIOD,
    GetterKind::Range => TYPE_ID_GETTER_HISTORICAL_RANGE,
  }
}

/// Process-wide configuration, resolved from the environment on first use
pub(crate) fn config() -> &'static Config {
  static CONFIG: OnceLock<Config> = OnceLock::new();
  CONFIG.get_or_init(|| {
    Config::from_env().unwrap_or_else(|e| {
      warn!("falling back to default configuration: {}", e);
      Config::default()
    })
  })
}

unsafe fn checked_handle<'a>(pgetter: *mut GetterHandle, ids: TypeIds) -> Result<&'a mut GetterHandle> {
  let handle = pgetter
    .as_mut()
    .ok_or_else(|| Error::HandleInvalid(format!("null {} handle", ids.name)))?;

  if handle.obj.is_null() {
    return Err(Error::HandleInvalid(format!("{} handle is empty or destroyed", ids.name)));
  }
  if !ids.contains(handle.type_id) {
    return Err(Error::HandleInvalid(format!(
      "type id {} is outside {} range [{}, {}]",
      handle.type_id, ids.name, ids.low, ids.high
    )));
  }
  Ok(handle)
}

unsafe fn checked_request<'a>(pgetter: *mut GetterHandle, ids: TypeIds) -> Result<&'a mut HistoricalRequest> {
  let handle = checked_handle(pgetter, ids)?;
  Ok(&mut *(handle.obj as *mut HistoricalRequest))
}

fn tag_mismatch(ids: TypeIds, request: &HistoricalRequest) -> Error {
  let err = Error::Internal(format!("{} handle holds a {}", ids.name, request.kind()));
  error!("{}", err);
  err
}

/// Run `f` against any historical getter
pub(crate) unsafe fn with_base<R>(
  pgetter: *mut GetterHandle,
  f: impl FnOnce(&mut dyn HistoricalGetter) -> Result<R>,
) -> Result<R> {
  let request = checked_request(pgetter, HISTORICAL_BASE_IDS)?;
  f(request.as_getter_mut())
}

/// Run `f` against a period getter
pub(crate) unsafe fn with_period<R>(
  pgetter: *mut GetterHandle,
  f: impl FnOnce(&mut PeriodGetter) -> Result<R>,
) -> Result<R> {
  match checked_request(pgetter, HISTORICAL_PERIOD_IDS)? {
    HistoricalRequest::Period(getter) => f(getter),
    other => Err(tag_mismatch(HISTORICAL_PERIOD_IDS, other)),
  }
}

/// Run `f` against a range getter
pub(crate) unsafe fn with_range<R>(
  pgetter: *mut GetterHandle,
  f: impl FnOnce(&mut RangeGetter) -> Result<R>,
) -> Result<R> {
  match checked_request(pgetter, HISTORICAL_RANGE_IDS)? {
    HistoricalRequest::Range(getter) => f(getter),
    other => Err(tag_mismatch(HISTORICAL_RANGE_IDS, other)),
  }
}

/// Null a handle without freeing anything
pub(crate) unsafe fn kill_proxy(pgetter: *mut GetterHandle) {
  if let Some(handle) = pgetter.as_mut() {
    handle.obj = ptr::null_mut();
    handle.type_id = 0;
  }
}

/// Reject a create call that has nowhere to put the result or no credentials
pub(crate) unsafe fn check_creatable(pcreds: *const CredentialsC, pgetter: *mut GetterHandle) -> Result<Credentials> {
  if pgetter.is_null() {
    return Err(Error::invalid("null getter handle"));
  }
  let creds = pcreds.as_ref().ok_or_else(|| Error::invalid("null credentials"))?;

  Ok(Credentials {
    access_token: optional_str_arg(creds.access_token, "access_token")?,
    refresh_token: optional_str_arg(creds.refresh_token, "refresh_token")?,
    epoch_sec_token_expiration: creds.epoch_sec_token_expiration,
    client_id: optional_str_arg(creds.client_id, "client_id")?,
  })
}

/// Borrow a required C string argument
pub(crate) unsafe fn str_arg<'a>(value: *const c_char, name: &str) -> Result<&'a str> {
  if value.is_null() {
    return Err(Error::invalid(format!("null {}", name)));
  }
  CStr::from_ptr(value)
    .to_str()
    .map_err(|_| Error::invalid(format!("{} is not valid UTF-8", name)))
}

unsafe fn optional_str_arg(value: *const c_char, name: &str) -> Result<String> {
  if value.is_null() {
    return Ok(String::new());
  }
  str_arg(value, name).map(str::to_string)
}

/// Finish a create call
///
/// On success the boxed request and its tag are written to the handle
/// together; on any failure the handle is killed so no partially built getter
/// is ever reachable.
pub(crate) unsafe fn install(
  pgetter: *mut GetterHandle,
  ids: TypeIds,
  outcome: std::result::Result<HistoricalRequest, ErrorCode>,
) -> c_int {
  let request = match outcome {
    Ok(request) => request,
    Err(code) => {
      kill_proxy(pgetter);
      return code.as_raw();
    }
  };

  let type_id = type_id_of(request.kind());
  debug_assert!(ids.low == ids.high && ids.contains(type_id), "{} created a {}", ids.name, request.kind());
  let Some(handle) = pgetter.as_mut().filter(|_| ids.contains(type_id)) else {
    error!("{} create produced a {} (type id {})", ids.name, request.kind(), type_id);
    kill_proxy(pgetter);
    return ErrorCode::Internal.as_raw();
  };

  handle.obj = Box::into_raw(Box::new(request)) as *mut c_void;
  handle.type_id = type_id;
  debug!(type_id, "created {}", ids.name);
  ErrorCode::Ok.as_raw()
}

/// Free the getter behind a handle and null the handle
pub(crate) unsafe fn destroy_proxy(pgetter: *mut GetterHandle, ids: TypeIds) -> Result<()> {
  let handle = checked_handle(pgetter, ids)?;
  drop(Box::from_raw(handle.obj as *mut HistoricalRequest));
  handle.obj = ptr::null_mut();
  handle.type_id = 0;
  debug!("destroyed {}", ids.name);
  Ok(())
}
