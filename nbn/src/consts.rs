// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared constants for the values `0..=10`.
//!
//! The table is built on first use and lives for the rest of the process.
//! Constants are only ever handed out by shared reference:
//!
//! ```compile_fail
//! let mut result = nbn::Number::new();
//! nbn::arith::add(nbn::consts::one(), &result, nbn::consts::two());
//! ```

use lazy_static::lazy_static;

use crate::Number;

/// Number of shared constants.
pub const COUNT: usize = 11;

lazy_static! {
	static ref TABLE: [Number; COUNT] = core::array::from_fn(Number::from);
}

/// The shared constant for `value`, if there is one.
pub fn small(value: u8) -> Option<&'static Number> {
	TABLE.get(usize::from(value))
}

macro_rules! constants {
	($($name:ident = $value:literal),* $(,)?) => {
		$(
			#[doc = concat!("The shared constant ", stringify!($value), ".")]
			pub fn $name() -> &'static Number {
				&TABLE[$value]
			}
		)*
	};
}

constants! {
	zero = 0,
	one = 1,
	two = 2,
	three = 3,
	four = 4,
	five = 5,
	six = 6,
	seven = 7,
	eight = 8,
	nine = 9,
	ten = 10,
}
