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

//! # ph-abi
//!
//! C ABI over the price history getters in `ph-client`.
//!
//! Getters live behind opaque handles (`{ void *obj; int type_id; }`). Every
//! exported function returns an integer [`ErrorCode`] and never lets a Rust
//! error or panic cross the boundary. The declarations for C callers are in
//! `include/ph_abi.h`.
//!
//! ## Lifecycle
//!
//! 1. `*_Create_ABI` fills an empty handle. If construction fails for any
//!    reason the handle is left empty and must not be used.
//! 2. Getters and setters dispatch through the handle after checking its type
//!    id. A failing setter leaves the getter unchanged.
//! 3. `*_Destroy_ABI` frees the getter and nulls the handle; later calls with
//!    that handle fail with [`ErrorCode::HandleInvalid`].
//!
//! ## Errors
//!
//! Pass `allow_exceptions != 0` to also publish failures (code and message) to
//! the calling thread's last-error slot; see [`error_code`].

#![warn(clippy::all)]
#![allow(non_snake_case)]

pub mod error_code;
pub mod historical;
pub mod proxy;

pub use error_code::{clear_last_error, last_error, ErrorCode};
pub use proxy::{
  CredentialsC, GetterHandle, TYPE_ID_GETTER_HISTORICAL_PERIOD, TYPE_ID_GETTER_HISTORICAL_RANGE,
};
