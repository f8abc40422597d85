// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Error types live here.

use core::fmt;

/// Indicates that a route could not be built from the given inputs.
///
/// None of these are transient: the same inputs always fail the same way, and no records are
/// produced when any of them is returned.
#[derive(Clone, PartialEq, Eq)]
pub enum RouteBuilderError {
	/// The hop table could not be used, eg a row had the wrong number of columns, a numeric column
	/// did not parse, or the hops of one path were not contiguous.
	MalformedInput {
		/// A human-readable error message
		err: String,
	},
	/// The invoice failed to decode or does not describe a payable amount.
	InvalidInvoice {
		/// A human-readable error message
		err: String,
	},
	/// The current block height is not a valid unsigned 32-bit integer.
	InvalidBlockHeight {
		/// A human-readable error message
		err: String,
	},
	/// The hops describe a route we cannot express, eg the accumulated fees overflowed or the
	/// total CLTV expiry delta is above the configured maximum.
	InvalidRoute {
		/// A human-readable error message
		err: String,
	},
}

impl fmt::Debug for RouteBuilderError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			RouteBuilderError::MalformedInput { ref err } => write!(f, "Malformed input: {}", err),
			RouteBuilderError::InvalidInvoice { ref err } => write!(f, "Invalid invoice: {}", err),
			RouteBuilderError::InvalidBlockHeight { ref err } => {
				write!(f, "Invalid block height: {}", err)
			},
			RouteBuilderError::InvalidRoute { ref err } => write!(f, "Invalid route: {}", err),
		}
	}
}

impl fmt::Display for RouteBuilderError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

impl std::error::Error for RouteBuilderError {}

#[cfg(test)]
mod tests {
	use super::RouteBuilderError;

	#[test]
	fn displays_variant_and_message() {
		let err =
			RouteBuilderError::MalformedInput { err: "line 3: expected 5 columns".to_owned() };
		assert_eq!(err.to_string(), "Malformed input: line 3: expected 5 columns");
		let err = RouteBuilderError::InvalidBlockHeight { err: "-1".to_owned() };
		assert_eq!(format!("{:?}", err), "Invalid block height: -1");
	}
}
