// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Splits a flat hop list into the payment paths it describes.

use crate::routing::hop::Hop;
use crate::util::errors::RouteBuilderError;

use std::collections::HashSet;

/// A maximal run of contiguous hops sharing one `path_id`, from the hop closest to the sender to
/// the one closest to the recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Path<'a> {
	/// The id shared by every hop in [`Self::hops`].
	pub path_id: u32,
	/// The hops of this path, never empty.
	pub hops: &'a [Hop],
}

impl<'a> Path<'a> {
	/// The hop adjacent to the recipient, which is the only one that may carry a final payload.
	pub fn final_hop(&self) -> &'a Hop {
		&self.hops[self.hops.len() - 1]
	}
}

/// Groups `hops` into [`Path`]s, preserving the order of both the paths and the hops within them.
///
/// Fails if the list is empty or if a `path_id` shows up again after a different one, as the hops
/// of a path would then no longer be contiguous.
pub fn group_paths(hops: &[Hop]) -> Result<Vec<Path<'_>>, RouteBuilderError> {
	if hops.is_empty() {
		return Err(RouteBuilderError::MalformedInput {
			err: "hop table contains no hops".to_owned(),
		});
	}

	let mut paths = Vec::new();
	let mut seen_path_ids = HashSet::new();
	let mut start = 0;
	for idx in 1..=hops.len() {
		let is_final_hop = idx == hops.len() || hops[idx].path_id != hops[start].path_id;
		if !is_final_hop {
			continue;
		}
		let path_id = hops[start].path_id;
		if !seen_path_ids.insert(path_id) {
			return Err(RouteBuilderError::MalformedInput {
				err: format!(
					"hops of path {} are not contiguous (hop {} reopens it)",
					path_id,
					start + 1
				),
			});
		}
		paths.push(Path { path_id, hops: &hops[start..idx] });
		start = idx;
	}
	Ok(paths)
}

#[cfg(test)]
mod tests {
	use super::group_paths;
	use crate::util::errors::RouteBuilderError;
	use crate::util::test_utils::hop;

	#[test]
	fn groups_contiguous_runs() {
		let hops = vec![
			hop(0, "AliceBob", 40, 0, 0),
			hop(0, "BobCarol", 9, 0, 0),
			hop(1, "AliceDave", 40, 0, 0),
			hop(1, "DaveErin", 40, 0, 0),
			hop(1, "ErinCarol", 9, 0, 0),
			hop(2, "AliceCarol", 9, 0, 0),
		];
		let paths = group_paths(&hops).unwrap();
		assert_eq!(paths.len(), 3);
		assert_eq!(paths[0].path_id, 0);
		assert_eq!(paths[0].hops, &hops[0..2]);
		assert_eq!(paths[1].hops.len(), 3);
		assert_eq!(paths[1].final_hop().channel_name, "ErinCarol");
		assert_eq!(paths[2].hops, &hops[5..]);
	}

	#[test]
	fn path_ids_need_not_be_sequential() {
		let hops = vec![hop(7, "a", 1, 0, 0), hop(3, "b", 1, 0, 0)];
		let paths = group_paths(&hops).unwrap();
		assert_eq!(paths.iter().map(|p| p.path_id).collect::<Vec<_>>(), vec![7, 3]);
	}

	#[test]
	fn rejects_non_contiguous_paths() {
		let hops = vec![hop(0, "a", 1, 0, 0), hop(1, "b", 1, 0, 0), hop(0, "c", 1, 0, 0)];
		match group_paths(&hops) {
			Err(RouteBuilderError::MalformedInput { err }) => assert!(err.contains("path 0")),
			res => panic!("unexpected result {:?}", res),
		}
	}

	#[test]
	fn rejects_empty_hop_list() {
		assert!(matches!(group_paths(&[]), Err(RouteBuilderError::MalformedInput { .. })));
	}
}
