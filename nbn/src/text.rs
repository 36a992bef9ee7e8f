// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hexadecimal text conversion.
//!
//! Text is big-endian (most significant digit first), case-insensitive and
//! carries no `0x` prefix. An odd number of digits is read as if a leading
//! `0` had been written.

use crate::{buffer::Number, error::{FromHexError, ToHexError}};

impl Number {
	/// Parses hexadecimal text.
	///
	/// Returns an error on empty input or on any non-hex character.
	pub fn from_hex(text: &str) -> Result<Number, FromHexError> {
		if text.is_empty() {
			return Err(FromHexError::Empty);
		}
		if let Some((index, character)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
			return Err(FromHexError::InvalidDigit { character, index });
		}
		Ok(Number::from_hex_lossy(text))
	}

	/// Parses hexadecimal text, reading every non-hex byte as the digit `0`.
	///
	/// Digits are counted in bytes, not characters: a non-ASCII character
	/// stands for as many zero digits as its UTF-8 encoding has bytes, so
	/// `"1é"` reads as `"100"`. Empty input is zero.
	///
	/// Prefer [`Number::from_hex`] unless the input is known to be well formed.
	pub fn from_hex_lossy(text: &str) -> Number {
		let text = text.as_bytes();
		let size = ((text.len() + 1) / 2).max(1);
		let mut number = Number::with_capacity(size);

		// pairs are written from the most significant digit down
		let (head, pairs) = text.split_at(text.len() % 2);
		let mut index = size;
		if let [nibble] = head {
			index -= 1;
			number.digits[index] = lossy_nibble(*nibble);
		}
		for pair in pairs.chunks_exact(2) {
			index -= 1;
			number.digits[index] = (lossy_nibble(pair[0]) << 4) | lossy_nibble(pair[1]);
		}

		number.top = size - 1;
		number.normalize();
		number
	}

	/// Replaces the value with the parsed `text`.
	///
	/// On error the value is left untouched.
	pub fn set_from_hex(&mut self, text: &str) -> Result<(), FromHexError> {
		let parsed = Number::from_hex(text)?;
		self.copy_from(&parsed);
		Ok(())
	}

	/// Renders the value as lowercase hexadecimal into `out`, two characters
	/// per digit, and returns the number of bytes written.
	///
	/// Zero renders as `00`. Fails without writing anything if `out` is too
	/// short.
	pub fn to_hex(&self, out: &mut [u8]) -> Result<usize, ToHexError> {
		let required = self.digits().len() * 2;
		let too_small = ToHexError::BufferTooSmall { required, available: out.len() };
		if out.len() < required {
			return Err(too_small);
		}
		::hex::encode_to_slice(self.to_big_endian(), &mut out[..required]).map_err(|_| too_small)?;
		Ok(required)
	}

	/// Renders the value as an owned lowercase hexadecimal string.
	pub fn to_hex_string(&self) -> String {
		::hex::encode(self.to_big_endian())
	}
}

fn lossy_nibble(c: u8) -> u8 {
	char::from(c).to_digit(16).map_or(0, |digit| digit as u8)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_pairs_and_odd_nibble() {
		let n = Number::from_hex("abcd").unwrap();
		assert_eq!(n.digits(), &[0xcd, 0xab]);

		let n = Number::from_hex("f").unwrap();
		assert_eq!(n.digits(), &[0x0f]);

		let n = Number::from_hex("fff").unwrap();
		assert_eq!(n.digits(), &[0xff, 0x0f]);
	}

	#[test]
	fn parse_is_case_insensitive() {
		assert_eq!(Number::from_hex("DeAdBeEf").unwrap().digits(), &[0xef, 0xbe, 0xad, 0xde]);
	}

	#[test]
	fn parse_normalizes_leading_zeros() {
		let n = Number::from_hex("0000ff").unwrap();
		assert_eq!(n.top(), 0);
		assert_eq!(n.to_hex_string(), "ff");

		let zero = Number::from_hex("0000").unwrap();
		assert!(zero.is_zero());
		assert_eq!(zero.to_hex_string(), "00");
	}

	#[test]
	fn strict_parse_rejects_bad_input() {
		assert_eq!(Number::from_hex(""), Err(FromHexError::Empty));
		assert_eq!(
			Number::from_hex("12x4"),
			Err(FromHexError::InvalidDigit { character: 'x', index: 2 })
		);
		assert_eq!(
			Number::from_hex("0xff"),
			Err(FromHexError::InvalidDigit { character: 'x', index: 1 })
		);
		assert_eq!(
			Number::from_hex("aé"),
			Err(FromHexError::InvalidDigit { character: 'é', index: 1 })
		);
	}

	#[test]
	fn lossy_parse_reads_bad_digits_as_zero() {
		assert_eq!(Number::from_hex_lossy("1g").to_hex_string(), "10");
		assert_eq!(Number::from_hex_lossy("zz").to_hex_string(), "00");
		assert_eq!(Number::from_hex_lossy("").to_hex_string(), "00");
		assert_eq!(Number::from_hex_lossy("x1").to_hex_string(), "01");
		assert_eq!(Number::from_hex_lossy("1é").to_hex_string(), "0100");
		assert_eq!(Number::from_hex_lossy("€").to_hex_string(), "00");
	}

	#[test]
	fn set_from_hex_keeps_value_on_error() {
		let mut n = Number::from_hex("1234").unwrap();
		assert!(n.set_from_hex("-1").is_err());
		assert_eq!(n.to_hex_string(), "1234");
		n.set_from_hex("05").unwrap();
		assert_eq!(n.to_hex_string(), "05");
	}

	#[test]
	fn to_hex_into_bounded_buffer() {
		let n = Number::from_hex("abcd").unwrap();
		let mut buf = [0u8; 20];
		let written = n.to_hex(&mut buf).unwrap();
		assert_eq!(&buf[..written], b"abcd");

		let mut exact = [0u8; 4];
		assert_eq!(n.to_hex(&mut exact), Ok(4));
		assert_eq!(&exact, b"abcd");
	}

	#[test]
	fn to_hex_reports_short_buffer() {
		let n = Number::from_hex("abcdef").unwrap();
		let mut buf = [b'-'; 5];
		assert_eq!(n.to_hex(&mut buf), Err(ToHexError::BufferTooSmall { required: 6, available: 5 }));
		assert_eq!(&buf, b"-----");
	}

	#[test]
	fn zero_renders_one_pair() {
		let mut buf = [0u8; 2];
		assert_eq!(Number::new().to_hex(&mut buf), Ok(2));
		assert_eq!(&buf, b"00");
	}
}
