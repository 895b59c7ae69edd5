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

use thiserror::Error;

/// The main error type for ph-* crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Empty symbol, out-of-domain enum value, or a field combination
  /// rejected by the validation tables
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// State that cannot occur unless the crate itself is inconsistent
  #[error("Internal inconsistency: {0}")]
  Internal(String),

  /// Null handle, or a handle whose type tag is outside the expected range
  #[error("Invalid handle: {0}")]
  HandleInvalid(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),
}

impl Error {
  /// Shorthand for [`Error::InvalidArgument`]
  pub fn invalid(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }
}

/// Result type alias for ph-* crates
pub type Result<T> = std::result::Result<T, Error>;
