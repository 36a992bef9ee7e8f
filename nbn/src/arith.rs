// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Increment, decrement, addition and subtraction.
//!
//! Subtraction never fails. When the subtrahend is larger the result wraps
//! modulo `256^w`, where `w` is the digit count of the wider operand, in
//! the way fixed-width unsigned integers wrap.

use crate::{raw, Number};

/// Adds one to `n`.
pub fn increment(n: &mut Number) {
	if n.top_byte_high_bit_set() {
		n.grow(n.top + 2);
	}
	n.denormalize();
	let carried = raw::increment(&mut n.digits);
	debug_assert!(!carried, "increment carry has room to land");
	n.normalize();
}

/// Subtracts one from `n`. Zero wraps to `0xff`.
pub fn decrement(n: &mut Number) {
	let top = n.top;
	raw::decrement(&mut n.digits[..=top]);
	n.normalize();
}

/// `result = a + b`
pub fn add(result: &mut Number, a: &Number, b: &Number) {
	result.copy_from(a);
	add_in_place(result, b);
}

/// `result = a + byte`
pub fn add_u8(result: &mut Number, a: &Number, byte: u8) {
	result.copy_from(a);
	result.grow(result.top + 2);
	result.denormalize();
	let (sum, overflow) = result.digits[0].overflowing_add(byte);
	result.digits[0] = sum;
	if overflow {
		raw::increment(&mut result.digits[1..]);
	}
	result.normalize();
}

/// `result = a - b`, wrapping if `a < b`.
pub fn subtract(result: &mut Number, a: &Number, b: &Number) {
	result.copy_from(a);
	sub_in_place(result, b);
}

/// `result = a - byte`, wrapping if `a < byte`.
pub fn subtract_u8(result: &mut Number, a: &Number, byte: u8) {
	result.copy_from(a);
	let window = result.top + 1;
	if byte > result.digits[0] {
		raw::decrement(&mut result.digits[1..window]);
	}
	result.digits[0] = result.digits[0].wrapping_sub(byte);
	result.normalize();
}

/// `acc += b`
pub(crate) fn add_in_place(acc: &mut Number, b: &Number) {
	// one spare digit for the final carry
	acc.grow(acc.top.max(b.top) + 2);
	acc.denormalize();
	for (i, &digit) in b.digits().iter().enumerate() {
		let sum = u16::from(acc.digits[i]) + u16::from(digit);
		acc.digits[i] = sum as u8;
		if sum > 0xff {
			raw::increment(&mut acc.digits[i + 1..]);
		}
	}
	acc.normalize();
}

/// `acc -= b`, wrapping if `acc < b`.
pub(crate) fn sub_in_place(acc: &mut Number, b: &Number) {
	let b = b.digits();
	let window = (acc.top + 1).max(b.len());
	acc.grow(window);
	acc.denormalize();
	for i in (0..b.len()).rev() {
		if b[i] > acc.digits[i] {
			raw::decrement(&mut acc.digits[i + 1..window]);
		}
		acc.digits[i] = acc.digits[i].wrapping_sub(b[i]);
	}
	acc.normalize();
}
