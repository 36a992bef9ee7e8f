// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordering of numbers by value.

use core::{
	cmp::Ordering,
	hash::{Hash, Hasher},
};

use crate::Number;

/// Compares two numbers by value.
///
/// The one with more significant digits is larger; otherwise digits are
/// compared from the most significant down.
pub fn compare(a: &Number, b: &Number) -> Ordering {
	let (a, b) = (a.digits(), b.digits());
	a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// The larger of `a` and `b`; `a` on a tie.
pub fn max<'a>(a: &'a Number, b: &'a Number) -> &'a Number {
	match compare(a, b) {
		Ordering::Less => b,
		_ => a,
	}
}

/// The smaller of `a` and `b`; `a` on a tie.
pub fn min<'a>(a: &'a Number, b: &'a Number) -> &'a Number {
	match compare(a, b) {
		Ordering::Greater => b,
		_ => a,
	}
}

impl Ord for Number {
	fn cmp(&self, other: &Number) -> Ordering {
		compare(self, other)
	}
}

impl PartialOrd for Number {
	fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Number {
	fn eq(&self, other: &Number) -> bool {
		self.digits() == other.digits()
	}
}

impl Eq for Number {}

impl Hash for Number {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.digits().hash(state);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hex(s: &str) -> Number {
		Number::from_hex(s).unwrap()
	}

	#[test]
	fn orders_by_length_then_digits() {
		assert_eq!(compare(&hex("feee"), &hex("5d30")), Ordering::Greater);
		assert_eq!(compare(&hex("5d30"), &hex("feee")), Ordering::Less);
		assert_eq!(compare(&hex("0100"), &hex("ff")), Ordering::Greater);
		assert_eq!(compare(&hex("ff01"), &hex("ff02")), Ordering::Less);
		assert_eq!(compare(&hex("00"), &hex("0000")), Ordering::Equal);
	}

	#[test]
	fn equality_ignores_capacity() {
		let mut wide = Number::with_capacity(32);
		wide.copy_from(&hex("abcd"));
		assert_eq!(wide, hex("abcd"));
		assert_eq!(compare(&wide, &wide), Ordering::Equal);
	}

	#[test]
	fn max_and_min_prefer_first_on_tie() {
		let a = hex("10");
		let b = hex("10");
		assert!(core::ptr::eq(max(&a, &b), &a));
		assert!(core::ptr::eq(min(&a, &b), &a));

		let c = hex("20");
		assert!(core::ptr::eq(max(&a, &c), &c));
		assert!(core::ptr::eq(min(&a, &c), &a));
	}
}
