// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The parts of a BOLT11 invoice a route is built against.

use crate::util::errors::RouteBuilderError;

use lightning_invoice::Bolt11Invoice;
use lightning_types::payment::PaymentSecret;

use core::str::FromStr;

/// What the payee asked for in its invoice.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct InvoiceParameters {
	/// The amount the payee expects to receive in total, across all parts. Never zero.
	pub total_msat: u64,
	/// The CLTV expiry delta the payee requires on the final hop of each path.
	pub min_final_cltv_expiry_delta: u32,
	/// The payment secret, as handed to the payee in the `payment_data` record of multi-path
	/// payments. Taken verbatim, it is never decoded.
	pub payment_secret: String,
}

impl InvoiceParameters {
	/// Extracts the parameters from a decoded invoice.
	///
	/// Fails for invoices which leave the amount up to the payer, as there's nothing to split.
	pub fn from_bolt11(invoice: &Bolt11Invoice) -> Result<Self, RouteBuilderError> {
		let total_msat = match invoice.amount_milli_satoshis() {
			Some(amount_msat) if amount_msat > 0 => amount_msat,
			Some(_) => {
				return Err(RouteBuilderError::InvalidInvoice {
					err: "invoice amount is zero".to_owned(),
				})
			},
			None => {
				return Err(RouteBuilderError::InvalidInvoice {
					err: "invoice does not specify an amount".to_owned(),
				})
			},
		};
		let min_final_cltv_expiry_delta =
			u32::try_from(invoice.min_final_cltv_expiry_delta()).map_err(|_| {
				RouteBuilderError::InvalidInvoice {
					err: format!(
						"min_final_cltv_expiry_delta {} is too large",
						invoice.min_final_cltv_expiry_delta()
					),
				}
			})?;
		Ok(InvoiceParameters {
			total_msat,
			min_final_cltv_expiry_delta,
			payment_secret: encode_payment_secret(invoice.payment_secret()),
		})
	}
}

/// Decodes a BOLT11 invoice string, eg `lnbc2500u1p...`.
impl FromStr for InvoiceParameters {
	type Err = RouteBuilderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invoice = Bolt11Invoice::from_str(s.trim())
			.map_err(|e| RouteBuilderError::InvalidInvoice { err: e.to_string() })?;
		InvoiceParameters::from_bolt11(&invoice)
	}
}

/// Lowercase hex of the 32 secret bytes, as carried in the `payment_data` record.
pub fn encode_payment_secret(payment_secret: &PaymentSecret) -> String {
	log_bytes!(payment_secret.0).to_string()
}

#[cfg(test)]
mod tests {
	use super::{encode_payment_secret, InvoiceParameters};
	use crate::util::errors::RouteBuilderError;

	use lightning_types::payment::PaymentSecret;

	use core::str::FromStr;

	// BOLT 11 test vector: "Please send $3 for a cup of coffee to the same peer, within one minute"
	const COFFEE_INVOICE: &str = "lnbc2500u1pvjluezsp5zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zygspp5qqqsyqcyq5rqwzqfqqqsyqcyq5rqwzqfqqqsyqcyq5rqwzqfqypqdq5xysxxatsyp3k7enxv4jsxqzpu9qrsgquk0rl77nj30yxdy8j9vdx85fkpmdla2087ne0xh8nhedh8w27kyke0lp53ut353s06fv3qfegext0eh0ymjpf39tuven09sam30g4vgpfna3rh";

	// BOLT 11 test vector: "Please make a donation of any amount" (no amount)
	const DONATION_INVOICE: &str = "lnbc1pvjluezsp5zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zygspp5qqqsyqcyq5rqwzqfqqqsyqcyq5rqwzqfqqqsyqcyq5rqwzqfqypqdpl2pkx2ctnv5sxxmmwwd5kgetjypeh2ursdae8g6twvus8g6rfwvs8qun0dfjkxaq9qrsgq357wnc5r2ueh7ck6q93dj32dlqnls087fxdwk8qakdyafkq3yap9us6v52vjjsrvywa6rt52cm9r9zqt8r2t7mlcwspyetp5h2tztugp9lfyql";

	#[test]
	fn decodes_invoice_parameters() {
		let params = InvoiceParameters::from_str(COFFEE_INVOICE).unwrap();
		assert_eq!(params.total_msat, 250_000_000);
		// No `c` field, so the BOLT 11 default applies
		assert_eq!(params.min_final_cltv_expiry_delta, 18);
		assert_eq!(params.payment_secret, "11".repeat(32));
	}

	#[test]
	fn rejects_amountless_invoice() {
		match InvoiceParameters::from_str(DONATION_INVOICE) {
			Err(RouteBuilderError::InvalidInvoice { err }) => assert!(err.contains("amount")),
			res => panic!("unexpected result {:?}", res),
		}
	}

	#[test]
	fn rejects_garbage() {
		assert!(matches!(
			InvoiceParameters::from_str("lnbc1notaninvoice"),
			Err(RouteBuilderError::InvalidInvoice { .. })
		));
		assert!(matches!(
			InvoiceParameters::from_str(""),
			Err(RouteBuilderError::InvalidInvoice { .. })
		));
	}

	#[test]
	fn payment_secret_is_lowercase_hex() {
		let mut secret = [0u8; 32];
		secret[0] = 0xab;
		secret[31] = 0x0f;
		let encoded = encode_payment_secret(&PaymentSecret(secret));
		assert_eq!(encoded.len(), 64);
		assert!(encoded.starts_with("ab00"));
		assert!(encoded.ends_with("000f"));
	}
}
