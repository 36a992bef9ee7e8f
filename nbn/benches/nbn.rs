// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! benchmarking for nbn
//! should be started with:
//! ```bash
//! cargo bench -p nbn
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nbn::{arith, div, mul, shift, Number};
use num_bigint::BigUint;

criterion_group!(
	benches,
	increment,
	add,
	sub,
	shl,
	mul_vs_biguint,
	div_vs_biguint,
	from_hex,
	to_hex,
	to_decimal,
);
criterion_main!(benches);

fn operand(bytes: usize, seed: u8) -> Number {
	let digits: Vec<u8> = (0..bytes).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed) | 1).collect();
	Number::from_little_endian(&digits)
}

fn to_biguint(n: &Number) -> BigUint {
	BigUint::from_bytes_le(&n.to_little_endian())
}

fn increment(c: &mut Criterion) {
	c.bench_function("increment", |b| {
		b.iter(|| {
			let mut n = Number::from(0x0f10u32);
			for _ in 0..20000 {
				arith::increment(&mut n);
			}
			black_box(n)
		})
	});
}

fn add(c: &mut Criterion) {
	let x = operand(64, 7);
	let y = operand(64, 11);
	let mut result = Number::new();
	c.bench_function("add_512", |b| {
		b.iter(|| {
			arith::add(&mut result, black_box(&x), black_box(&y));
		})
	});
}

fn sub(c: &mut Criterion) {
	let x = operand(64, 7);
	let y = operand(32, 11);
	let mut result = Number::new();
	c.bench_function("sub_512", |b| {
		b.iter(|| {
			arith::subtract(&mut result, black_box(&x), black_box(&y));
		})
	});
}

fn shl(c: &mut Criterion) {
	let x = operand(64, 3);
	let mut result = Number::new();
	c.bench_function("shl_1027", |b| {
		b.iter(|| {
			shift::shl_u64(&mut result, black_box(&x), black_box(1027));
		})
	});
}

fn mul_vs_biguint(c: &mut Criterion) {
	let mut group = c.benchmark_group("mul");
	for bytes in [8usize, 32, 128] {
		let x = operand(bytes, 5);
		let y = operand(bytes, 9);
		let mut result = Number::new();
		group.bench_with_input(BenchmarkId::new("nbn", bytes), &bytes, |b, _| {
			b.iter(|| mul::multiply(&mut result, black_box(&x), black_box(&y)))
		});
		let (bx, by) = (to_biguint(&x), to_biguint(&y));
		group.bench_with_input(BenchmarkId::new("biguint", bytes), &bytes, |b, _| {
			b.iter(|| black_box(&bx) * black_box(&by))
		});
	}
	group.finish();
}

fn div_vs_biguint(c: &mut Criterion) {
	let mut group = c.benchmark_group("div");
	for bytes in [8usize, 32, 128] {
		let n = operand(bytes * 2, 13);
		let d = operand(bytes, 17);
		let mut quotient = Number::new();
		let mut remainder = Number::new();
		group.bench_with_input(BenchmarkId::new("nbn", bytes), &bytes, |b, _| {
			b.iter(|| div::divide(&mut quotient, &mut remainder, black_box(&n), black_box(&d)))
		});
		let (bn, bd) = (to_biguint(&n), to_biguint(&d));
		group.bench_with_input(BenchmarkId::new("biguint", bytes), &bytes, |b, _| {
			b.iter(|| black_box(&bn) / black_box(&bd))
		});
	}
	group.finish();
}

fn from_hex(c: &mut Criterion) {
	let text = operand(256, 1).to_hex_string();
	c.bench_function("from_hex_2048", |b| b.iter(|| Number::from_hex(black_box(&text))));
}

fn to_hex(c: &mut Criterion) {
	let n = operand(256, 1);
	let mut buf = vec![0u8; 512];
	c.bench_function("to_hex_2048", |b| b.iter(|| n.to_hex(black_box(&mut buf))));
}

fn to_decimal(c: &mut Criterion) {
	let n = operand(32, 1);
	c.bench_function("to_decimal_256", |b| b.iter(|| black_box(&n).to_string()));
}
