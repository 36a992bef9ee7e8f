// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions between numbers, byte slices and primitive integers.

use byteorder::{ByteOrder, LittleEndian};

use crate::{buffer::Number, error::TryFromNumberError};

impl Number {
	/// Builds a number from little-endian bytes.
	pub fn from_little_endian(slice: &[u8]) -> Self {
		let mut number = Number::with_capacity(slice.len());
		if !slice.is_empty() {
			number.digits[..slice.len()].copy_from_slice(slice);
			number.top = slice.len() - 1;
			number.normalize();
		}
		number
	}

	/// Builds a number from big-endian bytes.
	pub fn from_big_endian(slice: &[u8]) -> Self {
		let mut number = Number::with_capacity(slice.len());
		if !slice.is_empty() {
			for (digit, byte) in number.digits.iter_mut().zip(slice.iter().rev()) {
				*digit = *byte;
			}
			number.top = slice.len() - 1;
			number.normalize();
		}
		number
	}

	/// The significant digits, least significant first.
	pub fn to_little_endian(&self) -> Vec<u8> {
		self.digits().to_vec()
	}

	/// The significant digits, most significant first.
	pub fn to_big_endian(&self) -> Vec<u8> {
		self.digits().iter().rev().copied().collect()
	}

	/// Low 8 digits as a `u64`; higher digits are ignored.
	pub fn low_u64(&self) -> u64 {
		let digits = self.digits();
		let len = digits.len().min(8);
		let mut bytes = [0u8; 8];
		bytes[..len].copy_from_slice(&digits[..len]);
		LittleEndian::read_u64(&bytes)
	}
}

impl From<u64> for Number {
	fn from(value: u64) -> Number {
		let mut bytes = [0u8; 8];
		LittleEndian::write_u64(&mut bytes, value);
		Number::from_little_endian(&bytes)
	}
}

macro_rules! impl_map_from {
	($from:ty) => {
		impl From<$from> for Number {
			fn from(value: $from) -> Number {
				From::from(value as u64)
			}
		}
	};
}

impl_map_from!(u8);
impl_map_from!(u16);
impl_map_from!(u32);
impl_map_from!(usize);

macro_rules! impl_try_from_for_primitive {
	($to:ty) => {
		impl<'a> TryFrom<&'a Number> for $to {
			type Error = TryFromNumberError;

			#[inline]
			fn try_from(number: &'a Number) -> Result<$to, TryFromNumberError> {
				if number.bits() > <$to>::BITS as usize {
					Err(TryFromNumberError::Overflow)
				} else {
					Ok(number.low_u64() as $to)
				}
			}
		}

		impl TryFrom<Number> for $to {
			type Error = TryFromNumberError;

			#[inline]
			fn try_from(number: Number) -> Result<$to, TryFromNumberError> {
				<$to>::try_from(&number)
			}
		}
	};
}

impl_try_from_for_primitive!(u8);
impl_try_from_for_primitive!(u16);
impl_try_from_for_primitive!(u32);
impl_try_from_for_primitive!(u64);
impl_try_from_for_primitive!(usize);

#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for Number {
	fn arbitrary(g: &mut quickcheck::Gen) -> Self {
		let bytes: Vec<u8> = quickcheck::Arbitrary::arbitrary(g);
		Number::from_little_endian(&bytes)
	}

	fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
		Box::new(quickcheck::Arbitrary::shrink(&self.to_little_endian()).map(|bytes| Number::from_little_endian(&bytes)))
	}
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Number {
	fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
		let bytes: &[u8] = u.arbitrary()?;
		Ok(Number::from_little_endian(bytes))
	}
}
