// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Division with remainder.

use core::{cmp::Ordering, mem};

use log::{debug, trace};

use crate::{arith, cmp, error::DivisionByZero, shift, Number};

/// Divides `numerator` by `denominator`, writing `⌊n / d⌋` to `quotient`
/// and `n - q * d` to `remainder`.
///
/// Binary long division: one shift, compare and conditional subtract per
/// bit of the numerator. A zero denominator is an error and leaves both
/// outputs untouched.
pub fn divide(
	quotient: &mut Number,
	remainder: &mut Number,
	numerator: &Number,
	denominator: &Number,
) -> Result<(), DivisionByZero> {
	if denominator.is_zero() {
		debug!(target: "nbn", "rejecting division by zero");
		return Err(DivisionByZero);
	}
	let bits = numerator.bits();
	trace!(target: "nbn", "dividing {}-bit numerator by {}-bit denominator", bits, denominator.bits());

	quotient.set_zero();
	quotient.grow(numerator.top + 1);
	quotient.denormalize();
	remainder.set_zero();

	let mut scratch = Number::new();
	for position in (0..bits).rev() {
		shift::shl_u8(&mut scratch, remainder, 1);
		if numerator.bit(position) {
			scratch.digits[0] |= 1;
		}
		if cmp::compare(&scratch, denominator) == Ordering::Less {
			mem::swap(remainder, &mut scratch);
		} else {
			arith::subtract(remainder, &scratch, denominator);
			quotient.digits[position / 8] |= 1 << (position % 8);
		}
	}
	quotient.normalize();
	Ok(())
}

/// `result = numerator mod denominator`
pub fn remainder(result: &mut Number, numerator: &Number, denominator: &Number) -> Result<(), DivisionByZero> {
	let mut quotient = Number::new();
	divide(&mut quotient, result, numerator, denominator)
}

/// Divides `numerator` by a single byte, writing the quotient and returning
/// the remainder.
pub fn divide_u8(quotient: &mut Number, numerator: &Number, denominator: u8) -> Result<u8, DivisionByZero> {
	if denominator == 0 {
		debug!(target: "nbn", "rejecting division by zero");
		return Err(DivisionByZero);
	}
	quotient.copy_from(numerator);
	let denominator = u16::from(denominator);
	let top = quotient.top;
	let mut rem = 0u16;
	for digit in quotient.digits[..=top].iter_mut().rev() {
		let current = (rem << 8) | u16::from(*digit);
		*digit = (current / denominator) as u8;
		rem = current % denominator;
	}
	quotient.normalize();
	Ok(rem as u8)
}
