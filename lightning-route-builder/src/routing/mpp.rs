// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Splitting of a payment's value across the parts of a multi-path payment.

/// Splits `total_msat` into `path_count` shares which sum to exactly `total_msat`.
///
/// Every path receives `total_msat / path_count`, except the last one, which also absorbs the
/// remainder of that division.
pub fn split_amount(total_msat: u64, path_count: usize) -> Vec<u64> {
	if path_count == 0 {
		return Vec::new();
	}
	let share_msat = total_msat / path_count as u64;
	let mut shares = vec![share_msat; path_count];
	shares[path_count - 1] = total_msat - share_msat * (path_count as u64 - 1);
	shares
}
