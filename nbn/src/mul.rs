// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Schoolbook multiplication.

use crate::{arith, shift, Number};

/// `result = a * b`
///
/// Shift-and-add: `a` is shifted by the position of every set bit of `b`
/// and accumulated. Cost is the number of bits in `b` times the cost of an
/// addition.
pub fn multiply(result: &mut Number, a: &Number, b: &Number) {
	let mut max_top = a.top.max(b.top);
	if a.top_byte_high_bit_set() || b.top_byte_high_bit_set() {
		max_top += 1;
	}
	result.set_zero();
	result.grow(2 * (max_top + 2));

	let mut shifted = Number::new();
	for (index, &digit) in b.digits().iter().enumerate() {
		for bit in 0..8 {
			if digit & (1 << bit) == 0 {
				continue;
			}
			shift::shl_u64(&mut shifted, a, (index * 8 + bit) as u64);
			arith::add_in_place(result, &shifted);
		}
	}
}

/// `result = a * byte`
pub fn multiply_u8(result: &mut Number, a: &Number, byte: u8) {
	multiply(result, a, &Number::from(byte));
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consts;

	fn hex(s: &str) -> Number {
		Number::from_hex(s).unwrap()
	}

	#[test]
	fn small_products() {
		let mut r = Number::new();
		let cases = [
			(consts::three(), consts::three(), "09"),
			(consts::two(), consts::one(), "02"),
			(consts::eight(), consts::eight(), "40"),
			(consts::two(), consts::two(), "04"),
			(consts::two(), consts::four(), "08"),
			(consts::one(), consts::one(), "01"),
			(consts::eight(), consts::zero(), "00"),
			(consts::zero(), consts::eight(), "00"),
		];
		for (a, b, expected) in cases {
			multiply(&mut r, a, b);
			assert_eq!(r.to_hex_string(), expected);
		}
	}

	#[test]
	fn wide_products() {
		let mut r = Number::new();
		multiply(&mut r, &hex("ff"), &hex("ff"));
		assert_eq!(r.to_hex_string(), "fe01");

		multiply(&mut r, &hex("ffffff"), &hex("02"));
		assert_eq!(r.to_hex_string(), "01fffffe");

		multiply(&mut r, &hex("deadbeef"), &hex("f0000000"));
		assert_eq!(r.to_hex_string(), "d0c2e30010000000");

		multiply(&mut r, &hex("ffffffffffffffff"), &hex("ffffffffffffffff"));
		assert_eq!(r.to_hex_string(), "fffffffffffffffe0000000000000001");
	}

	#[test]
	fn by_byte() {
		let mut r = Number::new();
		multiply_u8(&mut r, &hex("0101"), 0xff);
		assert_eq!(r.to_hex_string(), "ffff");
		multiply_u8(&mut r, &hex("0101"), 0);
		assert!(r.is_zero());
	}
}
