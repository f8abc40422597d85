// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Fee accumulation along a single path.
//!
//! A hop's fee depends on the amount it forwards downstream, so amounts are worked out from the
//! recipient back towards the sender.

use crate::routing::hop::RoutingFees;
use crate::routing::path::Path;
use crate::util::config::RouteBuilderConfig;
use crate::util::errors::RouteBuilderError;

/// The maximum value, in msat, that may be sent over a path. This is the total supply of bitcoin.
pub const MAX_VALUE_MSAT: u64 = 21_000_000_0000_0000_000;

/// Computes the fee owed for forwarding `amount_msat` over a channel with the given fees, or `None`
/// on overflow.
pub fn compute_fees(amount_msat: u64, channel_fees: RoutingFees) -> Option<u64> {
	amount_msat
		.checked_mul(channel_fees.proportional_millionths)
		.and_then(|part| channel_fees.base_msat.checked_add(part / 1_000_000))
}

/// Returns the amount each hop of `path` has to forward so that the recipient ends up with
/// exactly `amount_msat`, in the same order as `path.hops`.
///
/// The last hop forwards `amount_msat` itself. Every other hop forwards `amount_msat` plus the
/// fees of all hops after it, where the fee of hop `i` is computed over the amount it forwards
/// and raised to [`RouteBuilderConfig::min_hop_fee_msat`] if it falls short of it. The first
/// hop's own fee is never charged, as the sender doesn't pay itself for using its own channel.
pub fn path_forward_amounts(
	path: &Path, amount_msat: u64, config: &RouteBuilderConfig,
) -> Result<Vec<u64>, RouteBuilderError> {
	let mut amounts = vec![0; path.hops.len()];
	let mut cur_value_msat = amount_msat;
	for (idx, hop) in path.hops.iter().enumerate().rev() {
		amounts[idx] = cur_value_msat;
		// Fee for the use of the current hop which will be deducted on the previous hop.
		// Irrelevant for the first hop, as it doesn't have the previous hop.
		if idx == 0 {
			break;
		}
		let fee_msat = compute_fees(cur_value_msat, hop.fees).ok_or_else(|| {
			RouteBuilderError::InvalidRoute {
				err: format!("Fee of channel {} overflowed", hop.channel_name),
			}
		})?;
		cur_value_msat = cur_value_msat
			.checked_add(core::cmp::max(fee_msat, config.min_hop_fee_msat))
			.filter(|value_msat| *value_msat < MAX_VALUE_MSAT)
			.ok_or_else(|| RouteBuilderError::InvalidRoute {
				err: format!("Channel fees overflowed on path {}", path.path_id),
			})?;
	}
	Ok(amounts)
}
