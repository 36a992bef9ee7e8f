// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// Error parsing a number from hexadecimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromHexError {
	/// The input contained no digits.
	Empty,
	/// Invalid (non-hex) character encountered.
	InvalidDigit {
		/// The unexpected character.
		character: char,
		/// Byte offset of that occurrence.
		index: usize,
	},
}

impl std::error::Error for FromHexError {}

impl fmt::Display for FromHexError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Self::Empty => write!(fmt, "empty hex string"),
			Self::InvalidDigit { character, index } =>
				write!(fmt, "invalid hex character: {:?}, at {}", character, index),
		}
	}
}

/// Error rendering a number as hexadecimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToHexError {
	/// The destination cannot hold the rendered digits.
	BufferTooSmall {
		/// Number of bytes the rendering needs.
		required: usize,
		/// Number of bytes the destination offers.
		available: usize,
	},
}

impl std::error::Error for ToHexError {}

impl fmt::Display for ToHexError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Self::BufferTooSmall { required, available } =>
				write!(fmt, "buffer too small: {} bytes required, {} available", required, available),
		}
	}
}

/// The denominator of a division was zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl std::error::Error for DivisionByZero {}

impl fmt::Display for DivisionByZero {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "attempt to divide by zero")
	}
}

/// Error narrowing a number into a primitive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryFromNumberError {
	/// Value does not fit into the target type.
	Overflow,
}

impl std::error::Error for TryFromNumberError {}

impl fmt::Display for TryFromNumberError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Self::Overflow => write!(fmt, "integer overflow when casting number"),
		}
	}
}
