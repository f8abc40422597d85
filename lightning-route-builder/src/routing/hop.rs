// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The hops a route is built from, and a reader for the CSV hop tables they usually come in.

use crate::util::errors::RouteBuilderError;

use std::io::BufRead;
use std::str::FromStr;

/// The number of columns in a hop table row.
pub const HOP_TABLE_COLUMNS: usize = 5;

/// Fees for routing via a given channel.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct RoutingFees {
	/// Flat routing fee in millisatoshis.
	pub base_msat: u64,
	/// Liquidity-based routing fee in millionths of a routed amount.
	/// In other words, 10000 is 1%.
	pub proportional_millionths: u64,
}

/// A single channel in a payment path, as given to us. Hops of one path are listed from the one
/// closest to the sender to the one closest to the recipient.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Hop {
	/// The path this hop belongs to. All hops of a path must be contiguous in the hop list.
	pub path_id: u32,
	/// An opaque name for the channel, passed through to the built route unmodified.
	pub channel_name: String,
	/// The number of blocks this hop requires between accepting an HTLC and its expiry.
	pub cltv_expiry_delta: u32,
	/// The fees charged for forwarding over this channel.
	pub fees: RoutingFees,
}

fn parse_column<T: FromStr>(
	field: &str, column: &str, line_number: usize,
) -> Result<T, RouteBuilderError>
where
	T::Err: core::fmt::Display,
{
	field.parse::<T>().map_err(|e| RouteBuilderError::MalformedInput {
		err: format!("line {}: invalid {} {:?}: {}", line_number, column, field, e),
	})
}

// Trims the field and drops one pair of enclosing double quotes, if any.
fn unquote(field: &str) -> &str {
	let field = field.trim();
	field.strip_prefix('"').and_then(|f| f.strip_suffix('"')).unwrap_or(field)
}

fn parse_row(line: &str, line_number: usize) -> Result<Hop, RouteBuilderError> {
	let fields: Vec<&str> = line.split(',').map(unquote).collect();
	if fields.len() != HOP_TABLE_COLUMNS {
		return Err(RouteBuilderError::MalformedInput {
			err: format!(
				"line {}: expected {} columns, got {}",
				line_number,
				HOP_TABLE_COLUMNS,
				fields.len()
			),
		});
	}
	Ok(Hop {
		path_id: parse_column(fields[0], "path_id", line_number)?,
		channel_name: fields[1].to_owned(),
		cltv_expiry_delta: parse_column(fields[2], "cltv_delta", line_number)?,
		fees: RoutingFees {
			base_msat: parse_column(fields[3], "base_fee", line_number)?,
			proportional_millionths: parse_column(fields[4], "fee_rate_ppm", line_number)?,
		},
	})
}

/// Reads a hop table: a CSV header row, which is ignored, followed by one
/// `path_id,channel_name,cltv_delta,base_fee,fee_rate_ppm` row per hop.
///
/// Fields are trimmed and may be wrapped in double quotes, eg `0,"AliceBob",40,1,0`. Quoting
/// does not escape anything though: a comma always separates fields, even between quotes, and
/// doubled quotes are kept as they are.
///
/// Blank lines are skipped. Any row which fails to parse fails the whole table.
pub fn read_hop_table<R: BufRead>(reader: R) -> Result<Vec<Hop>, RouteBuilderError> {
	let mut hops = Vec::new();
	for (idx, line) in reader.lines().enumerate() {
		let line = line.map_err(|e| RouteBuilderError::MalformedInput {
			err: format!("failed to read hop table: {}", e),
		})?;
		if idx == 0 {
			continue;
		}
		let line = line.trim_end_matches('\r');
		if line.trim().is_empty() {
			continue;
		}
		hops.push(parse_row(line, idx + 1)?);
	}
	Ok(hops)
}

/// Parses an in-memory hop table. See [`read_hop_table`].
pub fn parse_hop_table(table: &str) -> Result<Vec<Hop>, RouteBuilderError> {
	read_hop_table(table.as_bytes())
}

#[cfg(test)]
mod tests {
	use super::{parse_hop_table, Hop, RoutingFees};
	use crate::util::errors::RouteBuilderError;

	#[test]
	fn parses_rows_after_header() {
		let table = "path_id,channel_name,cltv_delta,base_fee,fee_rate_ppm\n\
			0,AliceBob,40,1000,1\n\
			0,BobCarol, 9 ,0,200\r\n\
			\n\
			1,AliceDave,144,2,0\n";
		let hops = parse_hop_table(table).unwrap();
		assert_eq!(hops.len(), 3);
		assert_eq!(
			hops[1],
			Hop {
				path_id: 0,
				channel_name: "BobCarol".to_owned(),
				cltv_expiry_delta: 9,
				fees: RoutingFees { base_msat: 0, proportional_millionths: 200 },
			}
		);
		assert_eq!(hops[2].path_id, 1);
		assert_eq!(hops[2].cltv_expiry_delta, 144);
	}

	#[test]
	fn header_only_table_is_empty() {
		let table = "path_id,channel_name,cltv_delta,base_fee,fee_rate_ppm\n";
		assert!(parse_hop_table(table).unwrap().is_empty());
		assert!(parse_hop_table("").unwrap().is_empty());
	}

	#[test]
	fn strips_enclosing_quotes() {
		let table = "header\n0,\"AliceBob\",\"40\", 1 ,\"0\"\n1,\"\",9,0,0\n";
		let hops = parse_hop_table(table).unwrap();
		assert_eq!(hops[0].channel_name, "AliceBob");
		assert_eq!(hops[0].cltv_expiry_delta, 40);
		assert_eq!(hops[0].fees, RoutingFees { base_msat: 1, proportional_millionths: 0 });
		assert_eq!(hops[1].channel_name, "");

		// Only a matching pair is dropped
		let hops = parse_hop_table("header\n0,\"Alice,1,2,3\n").unwrap();
		assert_eq!(hops[0].channel_name, "\"Alice");
	}

	#[test]
	fn quoted_commas_still_separate_fields() {
		let err = parse_hop_table("header\n0,\"Alice,Bob\",40,1,0\n").unwrap_err();
		assert_eq!(
			err,
			RouteBuilderError::MalformedInput {
				err: "line 2: expected 5 columns, got 6".to_owned()
			}
		);
	}

	#[test]
	fn rejects_wrong_column_count() {
		let err = parse_hop_table("header\n0,AliceBob,40,1000\n").unwrap_err();
		assert_eq!(
			err,
			RouteBuilderError::MalformedInput {
				err: "line 2: expected 5 columns, got 4".to_owned()
			}
		);
	}

	#[test]
	fn rejects_non_numeric_fields() {
		match parse_hop_table("header\n0,AliceBob,40,1000,1\nx,BobCarol,9,0,0\n") {
			Err(RouteBuilderError::MalformedInput { err }) => {
				assert!(err.starts_with("line 3: invalid path_id"), "{}", err)
			},
			res => panic!("unexpected result {:?}", res),
		}
		// cltv_delta is a u32
		assert!(parse_hop_table("header\n0,AliceBob,4294967296,0,0\n").is_err());
		assert!(parse_hop_table("header\n0,AliceBob,40,-1,0\n").is_err());
		assert!(parse_hop_table("header\n0,AliceBob,40,0,1.5\n").is_err());
	}
}
