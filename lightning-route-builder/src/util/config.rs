// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Various user-configurable limits and settings which [`build_route`] applies for you.
//!
//! [`build_route`]: crate::routing::router::build_route

/// Settings applied while building a route.
///
/// `Default::default()` provides sane defaults. Use `<type>::max_value()` as appropriate to skip
/// checking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouteBuilderConfig {
	/// The smallest fee, in millisatoshi, credited to every forwarding hop.
	///
	/// A hop whose base fee and proportional fee add up to less than this is paid this amount
	/// instead, so that nodes forwarding tiny amounts over zero-fee channels still have something
	/// to gain from it.
	///
	/// Default value: 1.
	pub min_hop_fee_msat: u64,
	/// The maximum total CLTV expiry delta we accept for a single path, including the final hop's
	/// delta as raised to the invoice's `min_final_cltv_expiry_delta`.
	///
	/// Default value: `u32::max_value()`, ie no limit beyond the locktime threshold.
	pub max_total_cltv_expiry_delta: u32,
}

impl Default for RouteBuilderConfig {
	fn default() -> RouteBuilderConfig {
		RouteBuilderConfig { min_hop_fee_msat: 1, max_total_cltv_expiry_delta: u32::max_value() }
	}
}
