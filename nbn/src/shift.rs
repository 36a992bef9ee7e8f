// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logical bit shifts.

use crate::{raw, Number};

/// `result = a << shift`
pub fn shl_u8(result: &mut Number, a: &Number, shift: u8) {
	shl_u64(result, a, u64::from(shift));
}

/// `result = a << shift`
///
/// The buffer grows by `shift / 8` digits plus headroom for the residual
/// bits, so very large shifts need a correspondingly large allocation.
///
/// # Panics
///
/// Panics with "capacity overflow" if a nonzero `a` would need more than
/// `isize::MAX` digits, which only 32-bit targets can reach. A merely
/// unsatisfiable allocation aborts the process like any other.
pub fn shl_u64(result: &mut Number, a: &Number, shift: u64) {
	result.copy_from(a);
	if result.is_zero() {
		return;
	}
	let byte_shift = usize::try_from(shift / 8).unwrap_or(usize::MAX);
	result.grow(result.top.saturating_add(3).saturating_add(byte_shift));
	result.denormalize();
	raw::shift_left(&mut result.digits, shift);
	result.normalize();
}

/// `result = a >> shift`
pub fn shr_u8(result: &mut Number, a: &Number, shift: u8) {
	shr_u64(result, a, u64::from(shift));
}

/// `result = a >> shift`
pub fn shr_u64(result: &mut Number, a: &Number, shift: u64) {
	result.copy_from(a);
	let top = result.top;
	raw::shift_right(&mut result.digits[..=top], shift);
	result.normalize();
}
