// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operator and formatting traits on top of the engine functions.
//!
//! Unlike [`arith::subtract`], the `-` operator treats a negative result as
//! a bug and panics, as the primitive integer types do in debug builds.
//! `/` and `%` panic on a zero denominator.

use core::{
	fmt,
	ops::{
		Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
		SubAssign,
	},
	str::FromStr,
};

use crate::{arith, cmp, div, error::FromHexError, mul, shift, Number};

macro_rules! panic_on_overflow {
	($name: expr) => {
		if $name {
			panic!("arithmetic operation overflow")
		}
	};
}

impl Number {
	/// Checked subtraction. Returns `None` if `other > self`.
	pub fn checked_sub(&self, other: &Number) -> Option<Number> {
		if cmp::compare(self, other) == core::cmp::Ordering::Less {
			return None;
		}
		let mut result = Number::new();
		arith::subtract(&mut result, self, other);
		Some(result)
	}

	/// Returns a pair `(self / other, self % other)`, or `None` if `other`
	/// is zero.
	pub fn checked_div_mod(&self, other: &Number) -> Option<(Number, Number)> {
		let mut quotient = Number::new();
		let mut remainder = Number::new();
		div::divide(&mut quotient, &mut remainder, self, other).ok()?;
		Some((quotient, remainder))
	}

	/// Checked division. Returns `None` if `other` is zero.
	pub fn checked_div(&self, other: &Number) -> Option<Number> {
		self.checked_div_mod(other).map(|(quotient, _)| quotient)
	}

	/// Checked remainder. Returns `None` if `other` is zero.
	pub fn checked_rem(&self, other: &Number) -> Option<Number> {
		self.checked_div_mod(other).map(|(_, remainder)| remainder)
	}

	/// Returns a pair `(self / other, self % other)`.
	///
	/// # Panics
	///
	/// Panics if `other` is zero.
	pub fn div_mod(&self, other: &Number) -> (Number, Number) {
		self.checked_div_mod(other).expect("attempt to divide by zero")
	}
}

impl<'a, 'b> Add<&'b Number> for &'a Number {
	type Output = Number;

	fn add(self, other: &'b Number) -> Number {
		let mut result = Number::new();
		arith::add(&mut result, self, other);
		result
	}
}

impl<'a, 'b> Sub<&'b Number> for &'a Number {
	type Output = Number;

	fn sub(self, other: &'b Number) -> Number {
		let result = self.checked_sub(other);
		panic_on_overflow!(result.is_none());
		result.unwrap_or_default()
	}
}

impl<'a, 'b> Mul<&'b Number> for &'a Number {
	type Output = Number;

	fn mul(self, other: &'b Number) -> Number {
		let mut result = Number::new();
		mul::multiply(&mut result, self, other);
		result
	}
}

impl<'a, 'b> Div<&'b Number> for &'a Number {
	type Output = Number;

	fn div(self, other: &'b Number) -> Number {
		self.div_mod(other).0
	}
}

impl<'a, 'b> Rem<&'b Number> for &'a Number {
	type Output = Number;

	fn rem(self, other: &'b Number) -> Number {
		self.div_mod(other).1
	}
}

macro_rules! forward_binop {
	($imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
		impl $imp<Number> for Number {
			type Output = Number;

			fn $method(self, other: Number) -> Number {
				$imp::$method(&self, &other)
			}
		}

		impl<'a> $imp<&'a Number> for Number {
			type Output = Number;

			fn $method(self, other: &'a Number) -> Number {
				$imp::$method(&self, other)
			}
		}

		impl<'a> $imp<Number> for &'a Number {
			type Output = Number;

			fn $method(self, other: Number) -> Number {
				$imp::$method(self, &other)
			}
		}

		impl<'a> $imp_assign<&'a Number> for Number {
			fn $method_assign(&mut self, other: &'a Number) {
				*self = $imp::$method(&*self, other);
			}
		}

		impl $imp_assign<Number> for Number {
			fn $method_assign(&mut self, other: Number) {
				$imp_assign::$method_assign(self, &other);
			}
		}
	};
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl<'a> Add<u8> for &'a Number {
	type Output = Number;

	fn add(self, byte: u8) -> Number {
		let mut result = Number::new();
		arith::add_u8(&mut result, self, byte);
		result
	}
}

impl Add<u8> for Number {
	type Output = Number;

	fn add(self, byte: u8) -> Number {
		&self + byte
	}
}

impl<'a> Sub<u8> for &'a Number {
	type Output = Number;

	fn sub(self, byte: u8) -> Number {
		panic_on_overflow!(*self < Number::from(byte));
		let mut result = Number::new();
		arith::subtract_u8(&mut result, self, byte);
		result
	}
}

impl Sub<u8> for Number {
	type Output = Number;

	fn sub(self, byte: u8) -> Number {
		&self - byte
	}
}

impl<'a> Shl<u64> for &'a Number {
	type Output = Number;

	fn shl(self, shift: u64) -> Number {
		let mut result = Number::new();
		shift::shl_u64(&mut result, self, shift);
		result
	}
}

impl Shl<u64> for Number {
	type Output = Number;

	fn shl(self, shift: u64) -> Number {
		&self << shift
	}
}

impl ShlAssign<u64> for Number {
	fn shl_assign(&mut self, shift: u64) {
		*self = &*self << shift;
	}
}

impl<'a> Shr<u64> for &'a Number {
	type Output = Number;

	fn shr(self, shift: u64) -> Number {
		let mut result = Number::new();
		shift::shr_u64(&mut result, self, shift);
		result
	}
}

impl Shr<u64> for Number {
	type Output = Number;

	fn shr(self, shift: u64) -> Number {
		&self >> shift
	}
}

impl ShrAssign<u64> for Number {
	fn shr_assign(&mut self, shift: u64) {
		*self = &*self >> shift;
	}
}

impl FromStr for Number {
	type Err = FromHexError;

	fn from_str(value: &str) -> Result<Number, Self::Err> {
		Number::from_hex(value)
	}
}

impl fmt::Debug for Number {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.is_zero() {
			return f.pad_integral(true, "", "0");
		}

		let mut digits = Vec::new();
		let mut current = self.clone();
		let mut next = Number::new();
		while !current.is_zero() {
			let digit = div::divide_u8(&mut next, &current, 10).map_err(|_| fmt::Error)?;
			digits.push(char::from(b'0' + digit));
			core::mem::swap(&mut current, &mut next);
		}

		let text: String = digits.iter().rev().collect();
		f.pad_integral(true, "", &text)
	}
}

impl fmt::LowerHex for Number {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_hex_string())
	}
}
