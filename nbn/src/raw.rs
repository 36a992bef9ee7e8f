// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Carry, borrow and shift primitives over plain little-endian byte slices.
//!
//! These know nothing about a [`Number`](crate::Number)'s `top` or capacity;
//! callers size the slice so the result fits.

/// Adds one to `bytes`, rippling the carry upwards.
///
/// Returns `true` if the carry ran off the end of the slice, in which case
/// every byte has wrapped to zero.
pub fn increment(bytes: &mut [u8]) -> bool {
	for byte in bytes.iter_mut() {
		if *byte == u8::MAX {
			*byte = 0;
		} else {
			*byte += 1;
			return false;
		}
	}
	true
}

/// Subtracts one from `bytes`, rippling the borrow upwards.
///
/// Returns `true` if the borrow ran off the end of the slice, in which case
/// every byte has wrapped to `0xff`.
pub fn decrement(bytes: &mut [u8]) -> bool {
	for byte in bytes.iter_mut() {
		if *byte == 0 {
			*byte = u8::MAX;
		} else {
			*byte -= 1;
			return false;
		}
	}
	true
}

/// Shifts `bytes` left (towards the most significant end) by `shift` bits.
///
/// Bits moved past the end of the slice are lost.
pub fn shift_left(bytes: &mut [u8], shift: u64) {
	let len = bytes.len();
	let byte_shift = whole_bytes(shift, len);
	let bit_shift = (shift % 8) as u32;

	if byte_shift > 0 {
		bytes.copy_within(..len - byte_shift, byte_shift);
		bytes[..byte_shift].fill(0);
	}

	if bit_shift > 0 {
		let mut carry = 0u8;
		for byte in bytes[byte_shift..].iter_mut() {
			let spilled = *byte >> (8 - bit_shift);
			*byte = (*byte << bit_shift) | carry;
			carry = spilled;
		}
	}
}

/// Shifts `bytes` right (towards the least significant end) by `shift` bits.
pub fn shift_right(bytes: &mut [u8], shift: u64) {
	let len = bytes.len();
	let byte_shift = whole_bytes(shift, len);
	let bit_shift = (shift % 8) as u32;

	if bit_shift > 0 {
		let mut carry = 0u8;
		for byte in bytes.iter_mut().rev() {
			let spilled = *byte << (8 - bit_shift);
			*byte = (*byte >> bit_shift) | carry;
			carry = spilled;
		}
	}

	if byte_shift > 0 {
		bytes.copy_within(byte_shift.., 0);
		bytes[len - byte_shift..].fill(0);
	}
}

// whole-byte part of `shift`, clamped to the slice length
fn whole_bytes(shift: u64, len: usize) -> usize {
	usize::try_from(shift / 8).map_or(len, |bytes| bytes.min(len))
}
