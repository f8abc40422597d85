// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Prints the per-hop HTLC instructions for paying a BOLT11 invoice over the paths in a hop
//! table, one `path_id,channel_name,amount_msat,cltv_expiry,payload` line per hop.

use clap::Parser;

use lightning_route_builder::ln::invoice::InvoiceParameters;
use lightning_route_builder::routing::hop::read_hop_table;
use lightning_route_builder::routing::router::{build_route, parse_block_height};
use lightning_route_builder::util::config::RouteBuilderConfig;
use lightning_route_builder::util::errors::RouteBuilderError;
use lightning_route_builder::util::logger::{Level, Logger, Record};
use lightning_route_builder::log_debug;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "route-builder", version)]
#[command(
	about = "Builds per-hop HTLC instructions for paying a BOLT11 invoice",
	long_about = None
)]
struct Cli {
	/// CSV hop table: a header row, then one
	/// `path_id,channel_name,cltv_delta,base_fee,fee_rate_ppm` row per hop
	hop_table: PathBuf,

	/// The BOLT11 invoice to pay
	invoice: String,

	/// The current block height
	#[arg(allow_hyphen_values = true)]
	block_height: String,

	/// The smallest fee credited to every forwarding hop
	#[arg(long, default_value_t = RouteBuilderConfig::default().min_hop_fee_msat)]
	min_hop_fee_msat: u64,

	/// The largest total CLTV expiry delta accepted on a path
	#[arg(long, default_value_t = RouteBuilderConfig::default().max_total_cltv_expiry_delta)]
	max_total_cltv_expiry_delta: u32,

	/// Least severe level written to stderr: trace, debug, info, warn or error
	#[arg(long, default_value = "warn")]
	log_level: Level,
}

struct StderrLogger {
	level: Level,
}

impl Logger for StderrLogger {
	fn log(&self, record: Record) {
		if record.level >= self.level {
			eprintln!("{}", record);
		}
	}
}

fn run(cli: &Cli, logger: &StderrLogger) -> Result<Vec<String>, RouteBuilderError> {
	let file = File::open(&cli.hop_table).map_err(|e| RouteBuilderError::MalformedInput {
		err: format!("failed to open {}: {}", cli.hop_table.display(), e),
	})?;
	let hops = read_hop_table(BufReader::new(file))?;
	log_debug!(logger, "Read {} hop(s) from {}", hops.len(), cli.hop_table.display());

	let invoice = InvoiceParameters::from_str(&cli.invoice)?;
	let best_block_height = parse_block_height(&cli.block_height)?;
	let config = RouteBuilderConfig {
		min_hop_fee_msat: cli.min_hop_fee_msat,
		max_total_cltv_expiry_delta: cli.max_total_cltv_expiry_delta,
	};

	let route = build_route(&hops, &invoice, best_block_height, &config, logger)?;
	Ok(route.hops().map(|hop| hop.to_string()).collect())
}

fn main() {
	let cli = Cli::parse();
	let logger = StderrLogger { level: cli.log_level };
	match run(&cli, &logger) {
		Ok(lines) => {
			for line in lines {
				println!("{}", line);
			}
		},
		Err(e) => {
			// Printed regardless of the log level, which may have compiled logging out entirely.
			eprintln!("route-builder: {}", e);
			process::exit(1);
		},
	}
}
