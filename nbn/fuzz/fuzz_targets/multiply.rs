// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nbn::{arith, mul, Number};
use rug::{integer::Order, Integer};

fn to_gmp(x: &Number) -> Integer {
	Integer::from_digits(&x.to_little_endian(), Order::LsfLe)
}

fuzz_target!(|input: (Number, Number)| {
	let (a, b) = input;
	let mut product = Number::new();
	mul::multiply(&mut product, &a, &b);
	assert_eq!(to_gmp(&product), to_gmp(&a) * to_gmp(&b));

	let mut sum = Number::new();
	arith::add(&mut sum, &a, &b);
	assert_eq!(to_gmp(&sum), to_gmp(&a) + to_gmp(&b));
});
