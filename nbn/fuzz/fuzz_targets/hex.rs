// Copyright 2021 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nbn::Number;

fuzz_target!(|text: &str| {
	let lossy = Number::from_hex_lossy(text);
	if let Ok(strict) = Number::from_hex(text) {
		assert_eq!(strict, lossy);
	}

	let rendered = lossy.to_hex_string();
	assert_eq!(rendered.len() % 2, 0);
	assert_eq!(Number::from_hex(&rendered), Ok(lossy));
});
