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

//! Error codes returned across the C ABI, and the per-thread last error.
//!
//! Every exported function returns an `int`: `0` on success, otherwise one of
//! the [`ErrorCode`] values. When a call is made with `allow_exceptions != 0`
//! the failure is also published to the calling thread's last-error slot,
//! readable with [`LastErrorCode_ABI`] and [`LastErrorMsg_ABI`]. With
//! `allow_exceptions == 0` the return code is the only trace of the failure.
//! Successful calls never touch the slot.

use ph_core::Error;
use std::any::Any;
use std::cell::RefCell;
use std::ffi::{c_char, c_int, CString};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, warn};

/// Integer error codes of the C ABI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
  Ok = 0,
  InvalidArgument = 1,
  HandleInvalid = 2,
  Internal = 3,
  Config = 4,
  /// A panic was caught at the boundary
  Panic = 5,
}

impl ErrorCode {
  pub const fn as_raw(self) -> c_int {
    self as c_int
  }
}

impl From<&Error> for ErrorCode {
  fn from(err: &Error) -> Self {
    match err {
      Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
      Error::HandleInvalid(_) => ErrorCode::HandleInvalid,
      Error::Internal(_) => ErrorCode::Internal,
      Error::Config(_) | Error::EnvVar(_) => ErrorCode::Config,
    }
  }
}

#[derive(Debug, Clone)]
struct LastError {
  code: ErrorCode,
  message: String,
}

thread_local! {
  static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

/// Last error published on this thread, if any
pub fn last_error() -> Option<(ErrorCode, String)> {
  LAST_ERROR.with(|slot| slot.borrow().as_ref().map(|e| (e.code, e.message.clone())))
}

/// Forget the last error published on this thread
pub fn clear_last_error() {
  LAST_ERROR.with(|slot| slot.borrow_mut().take());
}

fn publish(code: ErrorCode, message: String) {
  LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(LastError { code, message }));
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
  if let Some(s) = payload.downcast_ref::<&str>() {
    (*s).to_string()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "unknown panic".to_string()
  }
}

/// Run `f` on behalf of a C caller
///
/// Errors and panics are converted to an [`ErrorCode`]; nothing unwinds past
/// this frame.
pub(crate) fn call_impl<R>(allow_exceptions: c_int, f: impl FnOnce() -> ph_core::Result<R>) -> Result<R, ErrorCode> {
  let (code, message) = match panic::catch_unwind(AssertUnwindSafe(f)) {
    Ok(Ok(value)) => return Ok(value),
    Ok(Err(err)) => (ErrorCode::from(&err), err.to_string()),
    Err(payload) => (ErrorCode::Panic, format!("panic at ABI boundary: {}", panic_message(payload))),
  };

  match code {
    ErrorCode::Internal | ErrorCode::Panic => error!(code = ?code, "{}", message),
    _ if allow_exceptions != 0 => warn!(code = ?code, "{}", message),
    _ => debug!(code = ?code, "{}", message),
  }

  if allow_exceptions != 0 {
    publish(code, message);
  }
  Err(code)
}

/// Collapse a call result into the integer returned to C
pub(crate) fn to_raw<R>(result: Result<R, ErrorCode>) -> c_int {
  match result {
    Ok(_) => ErrorCode::Ok.as_raw(),
    Err(code) => code.as_raw(),
  }
}

/// Copy `value` into a new NUL-terminated heap buffer owned by the caller
///
/// `*n` receives the buffer size including the terminator. Release the buffer
/// with [`FreeBuffer_ABI`].
pub(crate) unsafe fn write_string(value: &str, buf: *mut *mut c_char, n: *mut usize) -> ph_core::Result<()> {
  if buf.is_null() || n.is_null() {
    return Err(Error::invalid("null buffer out-parameter"));
  }
  let owned = CString::new(value).map_err(|_| Error::invalid("string contains an interior NUL"))?;
  *n = owned.as_bytes_with_nul().len();
  *buf = owned.into_raw();
  Ok(())
}

/// Store `value` through a scalar out-parameter
pub(crate) unsafe fn write_out<T>(out: *mut T, value: T, name: &str) -> ph_core::Result<()> {
  let slot = out.as_mut().ok_or_else(|| Error::invalid(format!("null {} out-parameter", name)))?;
  *slot = value;
  Ok(())
}

/// Code of the last error published on this thread, `0` if none
#[no_mangle]
pub extern "C" fn LastErrorCode_ABI() -> c_int {
  last_error().map_or(ErrorCode::Ok.as_raw(), |(code, _)| code.as_raw())
}

/// Message of the last error published on this thread (empty if none)
///
/// # Safety
///
/// `buf` and `n` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn LastErrorMsg_ABI(buf: *mut *mut c_char, n: *mut usize) -> c_int {
  let message = last_error().map(|(_, message)| message).unwrap_or_default();
  to_raw(call_impl(0, || write_string(&message, buf, n)))
}

/// Release a buffer returned through a `char**` out-parameter
///
/// # Safety
///
/// `buf` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn FreeBuffer_ABI(buf: *mut c_char, allow_exceptions: c_int) -> c_int {
  to_raw(call_impl(allow_exceptions, || {
    if !buf.is_null() {
      drop(CString::from_raw(buf));
    }
    Ok(())
  }))
}
