// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! CLTV expiry computation for a single path.

use crate::routing::path::Path;
use crate::util::config::RouteBuilderConfig;
use crate::util::errors::RouteBuilderError;

use bitcoin::absolute::LOCK_TIME_THRESHOLD;

/// Sums the CLTV expiry deltas of `path`, walking from the sender to the recipient.
///
/// The final hop contributes at least `min_final_cltv_expiry_delta`, so a path never undercuts
/// what the invoice asks of the recipient. Returns `None` on overflow.
pub fn path_cltv_expiry_delta(path: &Path, min_final_cltv_expiry_delta: u32) -> Option<u32> {
	let final_idx = path.hops.len().saturating_sub(1);
	path.hops.iter().enumerate().try_fold(0u32, |total, (idx, hop)| {
		let delta = if idx == final_idx {
			core::cmp::max(hop.cltv_expiry_delta, min_final_cltv_expiry_delta)
		} else {
			hop.cltv_expiry_delta
		};
		total.checked_add(delta)
	})
}

/// Returns the absolute block height at which the HTLCs of every hop on `path` expire.
///
/// All hops of a path share this one height: the whole path's CLTV budget is added once to
/// `best_block_height`.
pub fn path_cltv_expiry(
	path: &Path, min_final_cltv_expiry_delta: u32, best_block_height: u32,
	config: &RouteBuilderConfig,
) -> Result<u32, RouteBuilderError> {
	let total_cltv_expiry_delta = path_cltv_expiry_delta(path, min_final_cltv_expiry_delta)
		.ok_or_else(|| RouteBuilderError::InvalidRoute {
			err: format!("CLTV expiry delta of path {} overflowed", path.path_id),
		})?;
	if total_cltv_expiry_delta > config.max_total_cltv_expiry_delta {
		return Err(RouteBuilderError::InvalidRoute {
			err: format!(
				"Total CLTV expiry delta of path {} is {}, above the maximum of {}",
				path.path_id, total_cltv_expiry_delta, config.max_total_cltv_expiry_delta
			),
		});
	}
	best_block_height
		.checked_add(total_cltv_expiry_delta)
		.filter(|cltv_expiry| *cltv_expiry < LOCK_TIME_THRESHOLD)
		.ok_or_else(|| RouteBuilderError::InvalidRoute {
			err: format!("CLTV expiry of path {} overflowed", path.path_id),
		})
}
