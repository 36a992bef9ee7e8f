// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nbn::{div, Number};
use rug::{integer::Order, Integer};

fn from_gmp(x: Integer) -> Number {
	let digits = x.to_digits::<u8>(Order::LsfLe);
	Number::from_little_endian(&digits)
}

fuzz_target!(|input: (Number, Number)| {
	let (n, d) = input;
	let n_gmp = Integer::from_digits(&n.to_little_endian(), Order::LsfLe);
	let d_gmp = Integer::from_digits(&d.to_little_endian(), Order::LsfLe);

	let mut q = Number::new();
	let mut r = Number::new();
	if d.is_zero() {
		assert!(div::divide(&mut q, &mut r, &n, &d).is_err());
		return;
	}
	div::divide(&mut q, &mut r, &n, &d).unwrap();
	let (q_gmp, r_gmp) = n_gmp.div_rem(d_gmp);
	assert_eq!((from_gmp(q_gmp), from_gmp(r_gmp)), (q, r));
});
