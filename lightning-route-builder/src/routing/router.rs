// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The top-level route building logic lives here.
//!
//! You probably want to read your hops with [`read_hop_table`], decode the invoice into
//! [`InvoiceParameters`] and hand both to [`build_route`].
//!
//! [`read_hop_table`]: crate::routing::hop::read_hop_table

use crate::ln::invoice::InvoiceParameters;
use crate::ln::onion_payload::FinalPayload;
use crate::routing::cltv::path_cltv_expiry;
use crate::routing::fees::{path_forward_amounts, MAX_VALUE_MSAT};
use crate::routing::hop::Hop;
use crate::routing::mpp::split_amount;
use crate::routing::path::group_paths;
use crate::util::config::RouteBuilderConfig;
use crate::util::errors::RouteBuilderError;
use crate::util::logger::{Logger, WithContext};

use core::fmt;
use core::ops::Deref;

/// The instructions for a single hop of a [`Route`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RouteHop {
	/// The path this hop belongs to.
	pub path_id: u32,
	/// The channel name, as given in the hop it was built from.
	pub channel_name: String,
	/// The amount to send over this channel: the value the recipient gets on this path plus the
	/// fees of every hop after this one.
	pub amount_msat: u64,
	/// The absolute block height the HTLC on this channel expires at.
	pub cltv_expiry: u32,
	/// The `payment_data` record for the recipient. Only set on the final hop of each path, and
	/// only if the payment is split over more than one path.
	pub final_payload: Option<FinalPayload>,
}

/// Writes the hop as a `path_id,channel_name,amount_msat,cltv_expiry,payload` line, with `NULL`
/// in place of a missing payload.
impl fmt::Display for RouteHop {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{},{},{},{},",
			self.path_id, self.channel_name, self.amount_msat, self.cltv_expiry
		)?;
		match self.final_payload {
			Some(ref payload) => write!(f, "{}", payload),
			None => f.write_str("NULL"),
		}
	}
}

/// One part of a (potentially multi-part) payment.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RoutePath {
	/// The id of the path, as given in its hops.
	pub path_id: u32,
	/// The share of the invoice amount the recipient receives over this path.
	pub value_msat: u64,
	/// The absolute block height all HTLCs of this path expire at.
	pub cltv_expiry: u32,
	/// The hops, in the order they were given. The last one is adjacent to the recipient.
	pub hops: Vec<RouteHop>,
}

impl RoutePath {
	/// Gets the fees for this path, ie what the sender puts in on top of [`Self::value_msat`].
	pub fn get_path_fees(&self) -> u64 {
		self.hops.first().map(|hop| hop.amount_msat.saturating_sub(self.value_msat)).unwrap_or(0)
	}
}

/// A route directs a payment from the sender to the recipient. It may take multiple paths, each
/// composed of one or more hops.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Route {
	/// The paths taken, in the order their hops were given.
	pub paths: Vec<RoutePath>,
}

impl Route {
	/// Returns every hop of every path, in the order the hops were given.
	pub fn hops(&self) -> impl Iterator<Item = &RouteHop> {
		self.paths.iter().flat_map(|path| path.hops.iter())
	}

	/// Returns the total amount of fees paid on this [`Route`].
	///
	/// Routes returned by [`build_route`] never send [`MAX_VALUE_MSAT`] or more in total, so this
	/// only saturates for hand-assembled routes.
	pub fn get_total_fees(&self) -> u64 {
		self.paths.iter().fold(0u64, |total, path| total.saturating_add(path.get_path_fees()))
	}

	/// Returns the total amount paid on this [`Route`], excluding the fees.
	pub fn get_total_amount(&self) -> u64 {
		self.paths.iter().fold(0u64, |total, path| total.saturating_add(path.value_msat))
	}
}

/// Parses the current block height.
pub fn parse_block_height(s: &str) -> Result<u32, RouteBuilderError> {
	s.trim().parse::<u32>().map_err(|e| RouteBuilderError::InvalidBlockHeight {
		err: format!("{:?} is not a valid block height: {}", s, e),
	})
}

/// Builds the per-hop instructions for paying `invoice` over the paths described by `hops`.
///
/// `hops` lists every path's hops contiguously, each path going from the sender's channel to the
/// recipient's. The invoice amount is split evenly over the paths, with any remainder going to the
/// last one, and HTLCs expire relative to `best_block_height`.
///
/// Nothing is returned unless every path could be built.
pub fn build_route<L: Deref>(
	hops: &[Hop], invoice: &InvoiceParameters, best_block_height: u32,
	config: &RouteBuilderConfig, logger: L,
) -> Result<Route, RouteBuilderError>
where
	L::Target: Logger,
{
	let paths = group_paths(hops)?;
	let is_mpp = paths.len() > 1;
	let shares = split_amount(invoice.total_msat, paths.len());
	log_debug!(
		logger,
		"Splitting {} msat over {} path(s): {}",
		invoice.total_msat,
		paths.len(),
		log_iter!(shares.iter())
	);

	let mut route_paths = Vec::with_capacity(paths.len());
	let mut total_sent_msat: u64 = 0;
	for (path, value_msat) in paths.iter().zip(shares.into_iter()) {
		let path_logger = WithContext::from(&logger, Some(path.path_id));
		let amounts = path_forward_amounts(path, value_msat, config)?;
		// Each path is capped on its own, the sum over all of them has to be too.
		total_sent_msat = total_sent_msat
			.checked_add(amounts[0])
			.filter(|sent_msat| *sent_msat < MAX_VALUE_MSAT)
			.ok_or_else(|| RouteBuilderError::InvalidRoute {
				err: format!("Total value sent overflowed at path {}", path.path_id),
			})?;
		let cltv_expiry =
			path_cltv_expiry(path, invoice.min_final_cltv_expiry_delta, best_block_height, config)?;
		log_trace!(
			path_logger,
			"{} hop(s) delivering {} msat for {} msat, expiring at {}",
			path.hops.len(),
			value_msat,
			amounts[0],
			cltv_expiry
		);

		let final_idx = path.hops.len() - 1;
		let route_hops = path
			.hops
			.iter()
			.zip(amounts.into_iter())
			.enumerate()
			.map(|(idx, (hop, amount_msat))| RouteHop {
				path_id: hop.path_id,
				channel_name: hop.channel_name.clone(),
				amount_msat,
				cltv_expiry,
				final_payload: if is_mpp && idx == final_idx {
					Some(FinalPayload::new(&invoice.payment_secret, invoice.total_msat))
				} else {
					None
				},
			})
			.collect();
		route_paths.push(RoutePath {
			path_id: path.path_id,
			value_msat,
			cltv_expiry,
			hops: route_hops,
		});
	}

	let route = Route { paths: route_paths };
	log_info!(
		logger,
		"Built route paying {} msat over {} path(s) with {} msat in fees",
		route.get_total_amount(),
		route.paths.len(),
		route.get_total_fees()
	);
	log_trace!(logger, "{}", log_route!(route));
	Ok(route)
}
