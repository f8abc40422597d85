// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

use crate::routing::hop::{Hop, RoutingFees};
use crate::util::logger::{Logger, Record};

use std::collections::HashMap;
use std::sync::Mutex;

pub struct TestLogger {
	pub lines: Mutex<HashMap<(String, String), usize>>,
	last: Mutex<Option<(Option<u32>, String)>>,
}

impl TestLogger {
	pub fn new() -> TestLogger {
		TestLogger { lines: Mutex::new(HashMap::new()), last: Mutex::new(None) }
	}
	pub fn assert_log(&self, module: String, line: String, count: usize) {
		let log_entries = self.lines.lock().unwrap();
		assert_eq!(log_entries.get(&(module, line)), Some(&count));
	}

	/// Search for the number of occurrence of the logged lines which
	/// 1. belongs to the specified module and
	/// 2. contains `line` in it.
	/// And asserts if the number of occurrences is the same with the given `count`
	pub fn assert_log_contains(&self, module: &str, line: &str, count: usize) {
		let log_entries = self.lines.lock().unwrap();
		let l: usize = log_entries
			.iter()
			.filter(|&(&(ref m, ref l), _c)| m == module && l.contains(line))
			.map(|(_, c)| c)
			.sum();
		assert_eq!(l, count)
	}

	/// The path context of the most recently logged record, if anything was logged.
	pub fn last_path_id(&self) -> Option<Option<u32>> {
		self.last.lock().unwrap().as_ref().map(|(path_id, _)| *path_id)
	}

	/// The most recently logged record, as rendered by its `Display` implementation.
	pub fn last_formatted(&self) -> Option<String> {
		self.last.lock().unwrap().as_ref().map(|(_, line)| line.clone())
	}
}

impl Logger for TestLogger {
	fn log(&self, record: Record) {
		*self
			.lines
			.lock()
			.unwrap()
			.entry((record.module_path.to_string(), format!("{}", record.args)))
			.or_insert(0) += 1;
		*self.last.lock().unwrap() = Some((record.path_id, record.to_string()));
		println!("{:<5} [{} : {}] {}", record.level, record.module_path, record.line, record.args);
	}
}

/// Builds a hop on the given path with the given fee policy.
pub fn hop(
	path_id: u32, channel_name: &str, cltv_expiry_delta: u32, base_msat: u64,
	proportional_millionths: u64,
) -> Hop {
	Hop {
		path_id,
		channel_name: channel_name.to_owned(),
		cltv_expiry_delta,
		fees: RoutingFees { base_msat, proportional_millionths },
	}
}
