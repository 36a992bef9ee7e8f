// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The digit buffer backing every [`Number`].

use log::trace;

/// Capacity of a freshly created number.
const INITIAL_CAPACITY: usize = 2;

/// Arbitrary-precision unsigned integer.
///
/// Digits are bytes stored least significant first. `top` is the index of
/// the most significant digit that belongs to the value; bytes above it are
/// scratch space. Every public operation leaves the number normalized: the
/// digit at `top` is nonzero unless `top` is 0, which is how zero is
/// represented.
///
/// Growing the buffer goes through `Vec`, so running out of memory aborts
/// the process rather than leaving a partially grown number behind.
#[derive(Clone)]
pub struct Number {
	pub(crate) digits: Vec<u8>,
	pub(crate) top: usize,
}

impl Number {
	/// Creates a number with the value zero and a minimal buffer.
	pub fn new() -> Self {
		Self::with_capacity(INITIAL_CAPACITY)
	}

	/// Creates a zero with room for at least `capacity` digits.
	pub fn with_capacity(capacity: usize) -> Self {
		Number { digits: vec![0; capacity.max(1)], top: 0 }
	}

	/// Index of the most significant digit.
	#[inline]
	pub fn top(&self) -> usize {
		self.top
	}

	/// Number of digits the buffer can hold without reallocating.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.digits.len()
	}

	/// The significant digits, least significant first.
	///
	/// Zero is a single `0` digit.
	pub fn digits(&self) -> &[u8] {
		&self.digits[..=self.significant_top()]
	}

	/// Whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.digits().iter().all(|&digit| digit == 0)
	}

	/// Number of significant bits; zero has none.
	pub fn bits(&self) -> usize {
		let digits = self.digits();
		let top = digits.len() - 1;
		top * 8 + (8 - digits[top].leading_zeros() as usize)
	}

	/// Returns the bit at `index`, counting from the least significant.
	pub fn bit(&self, index: usize) -> bool {
		self.digits().get(index / 8).map_or(false, |digit| digit & (1 << (index % 8)) != 0)
	}

	/// Resets the value to zero, keeping the buffer.
	pub fn set_zero(&mut self) {
		self.digits[0] = 0;
		self.top = 0;
	}

	/// Makes room for at least `min_capacity` digits.
	///
	/// New digits are zeroed; the value and `top` are untouched.
	pub fn grow(&mut self, min_capacity: usize) {
		if self.digits.len() >= min_capacity {
			return;
		}
		trace!(target: "nbn", "growing digit buffer from {} to {} bytes", self.digits.len(), min_capacity);
		self.digits.resize(min_capacity, 0);
	}

	/// Lowers `top` to the most significant nonzero digit.
	pub fn normalize(&mut self) {
		self.top = self.significant_top();
	}

	/// Zeroes every digit above `top` and extends `top` to the end of the
	/// buffer, exposing the whole buffer as working space for carries.
	///
	/// The number stays denormalized until [`Number::normalize`] is called.
	pub fn denormalize(&mut self) {
		let top = self.top;
		self.digits[top + 1..].fill(0);
		self.top = self.digits.len() - 1;
	}

	/// Whether the most significant digit has its high bit set, meaning an
	/// increment or addition may carry into a new digit.
	pub fn top_byte_high_bit_set(&self) -> bool {
		self.digits[self.top] & 0x80 != 0
	}

	/// Overwrites the value with `other`'s.
	pub fn copy_from(&mut self, other: &Number) {
		let digits = other.digits();
		self.grow(digits.len());
		self.digits[..digits.len()].copy_from_slice(digits);
		self.top = digits.len() - 1;
	}

	fn significant_top(&self) -> usize {
		let mut top = self.top;
		while top > 0 && self.digits[top] == 0 {
			top -= 1;
		}
		top
	}
}

impl Default for Number {
	fn default() -> Self {
		Number::new()
	}
}
