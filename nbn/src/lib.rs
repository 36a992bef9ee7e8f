// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary-precision unsigned integers.
//!
//! A [`Number`] is a growable little-endian byte buffer together with the
//! index of its most significant digit. The engine functions in [`arith`],
//! [`shift`], [`mul`] and [`div`] take their operands by shared reference
//! and write into a caller-supplied `&mut Number`, so a result buffer can be
//! reused across many operations:
//!
//! ```
//! use nbn::{arith, Number};
//!
//! let a: Number = "feee".parse().unwrap();
//! let b: Number = "5d30".parse().unwrap();
//! let mut sum = Number::new();
//! arith::add(&mut sum, &a, &b);
//! assert_eq!(sum.to_hex_string(), "015c1e");
//! ```
//!
//! The usual operator traits are implemented on top of the engine for
//! callers that prefer allocating a fresh result:
//!
//! ```
//! use nbn::Number;
//!
//! let a = Number::from(0xdeadbeef_u32);
//! let b = Number::from(0xf0000000_u32);
//! assert_eq!(format!("{:x}", &a * &b), "d0c2e30010000000");
//! ```
//!
//! Small constants `0..=10` are shared through [`consts`]. They are handed
//! out as `&'static Number`, so they can never be used as a destination.

pub mod arith;
mod buffer;
pub mod cmp;
pub mod consts;
mod conv;
pub mod div;
mod error;
pub mod mul;
mod ops;
pub mod raw;
pub mod shift;
mod text;

pub use self::{
	buffer::Number,
	error::{DivisionByZero, FromHexError, ToHexError, TryFromNumberError},
};

static_assertions::assert_impl_all!(Number: Clone, Default, Send, Sync);
