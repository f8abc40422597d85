// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The `payment_data` record handed to the final hop of each part of a multi-path payment.

use core::fmt;

/// The TLV type of the `payment_data` record.
pub const PAYMENT_DATA_TLV_TYPE: u64 = 8;
/// The length of the `payment_data` value: a 32-byte payment secret and an 8-byte total amount.
pub const PAYMENT_DATA_TLV_LEN: u64 = 40;

/// Tells the recipient which payment a part belongs to and how much the parts add up to, so it
/// can wait for all of them before claiming.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FinalPayload {
	/// The invoice's payment secret, written out verbatim.
	pub payment_secret: String,
	/// The full invoice amount, not just the share sent over this part.
	pub total_msat: u64,
}

impl FinalPayload {
	/// Builds the payload for a payment whose parts add up to `total_msat`.
	pub fn new(payment_secret: &str, total_msat: u64) -> Self {
		FinalPayload { payment_secret: payment_secret.to_owned(), total_msat }
	}
}

/// Hex encoding of the record: type, length and total amount as 64-bit big-endian integers, with
/// the payment secret between the last two.
impl fmt::Display for FinalPayload {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{:016x}{:016x}{}{:016x}",
			PAYMENT_DATA_TLV_TYPE, PAYMENT_DATA_TLV_LEN, self.payment_secret, self.total_msat
		)
	}
}
