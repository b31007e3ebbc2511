//! The [WalkBoxMatrix] owns every [WalkBox] of a room and records how to get
//! from any one of them to any other.
//!
//! Routing is precomputed: the adjacency of every pair of boxes produces a
//! distance matrix of `0` (itself), `1` (touching) or [INFINITY_DISTANCE]
//! (not proven to be connected) which is relaxed with Floyd-Warshall. The
//! relaxation records an intermediate box for each pair rather than the
//! immediate neighbour so a lookup follows the intermediates back until it
//! reaches a box that is one hop away.
//!
//! ```text
//!  next hops for a row of three boxes where box1 is the bridge
//!
//!        to:  0  1  2
//!  from 0:  [ 0, 1, 1 ]
//!  from 1:  [ 0, 1, 2 ]
//!  from 2:  [ 1, 1, 2 ]
//! ```
//!
//! Rooms contain tens of boxes so the `O(n³)` rebuild is run in full every
//! time a box is enabled or disabled.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Every walk box of a room along with the table describing how to route between them. Boxes are referred to by their index within the matrix
#[derive(Component, Clone, Debug, Default, Reflect)]
pub struct WalkBoxMatrix {
	/// Walk boxes in declaration order, the index of a box is its node ID
	walkboxes: Vec<WalkBox>,
	/// For a pair `[from][to]` the box to travel through next, [None] when `to` cannot be reached from `from`
	next_hops: Vec<Vec<Option<usize>>>,
}

impl WalkBoxMatrix {
	/// Create a new instance of [WalkBoxMatrix] and build its next-hop table
	pub fn new(walkboxes: Vec<WalkBox>) -> Self {
		for (i, walkbox) in walkboxes.iter().enumerate() {
			if walkboxes[..i].iter().any(|w| w.get_id() == walkbox.get_id()) {
				warn!(
					"Walk box ID `{}` has been declared more than once, lookups by ID will use the first declaration",
					walkbox.get_id()
				);
			}
		}
		if walkboxes.len() >= INFINITY_DISTANCE as usize {
			warn!(
				"{} walk boxes exceeds the supported room size of {}, distant boxes may be treated as unreachable",
				walkboxes.len(),
				INFINITY_DISTANCE - 1
			);
		}
		let mut matrix = WalkBoxMatrix {
			walkboxes,
			next_hops: Vec::new(),
		};
		matrix.rebuild_next_hops();
		matrix
	}
	/// Get a reference to the list of walk boxes
	pub fn get_boxes(&self) -> &Vec<WalkBox> {
		&self.walkboxes
	}
	/// Get a walk box by its index
	pub fn get_box(&self, index: usize) -> Option<&WalkBox> {
		self.walkboxes.get(index)
	}
	/// Get a walk box by its ID
	pub fn get_box_by_id(&self, id: &str) -> Option<&WalkBox> {
		self.walkboxes.iter().find(|w| w.get_id() == id)
	}
	/// Find the index of a walk box from its ID
	pub fn get_index_of(&self, id: &str) -> Option<usize> {
		self.walkboxes.iter().position(|w| w.get_id() == id)
	}
	/// Get a reference to the next-hop table
	pub fn get_next_hops(&self) -> &Vec<Vec<Option<usize>>> {
		&self.next_hops
	}
	/// Number of walk boxes in the room
	pub fn len(&self) -> usize {
		self.walkboxes.len()
	}
	pub fn is_empty(&self) -> bool {
		self.walkboxes.is_empty()
	}
	/// The edges of every enabled walk box, used to draw an overlay of the walkable area
	pub fn enabled_edges(&self) -> Vec<(Vec2, Vec2)> {
		self.walkboxes
			.iter()
			.filter(|w| w.is_enabled())
			.flat_map(|w| w.edges())
			.collect()
	}
	/// Enable or disable the walk box with the ID `id` and rebuild the next-hop table. Unknown IDs are ignored, scripts are free to reference boxes that a room may not have.
	///
	/// Paths handed out before this call are unaffected, only future calls to [WalkBoxMatrix::find_path] see the new connectivity
	pub fn enable_box(&mut self, id: &str, enabled: bool) {
		if let Some(walkbox) = self.walkboxes.iter_mut().find(|w| w.get_id() == id) {
			walkbox.set_enabled(enabled);
			self.rebuild_next_hops();
		} else {
			debug!("No walk box with ID `{}`, ignoring enable({})", id, enabled);
		}
	}
	/// Derive the next-hop table from the adjacency of the current enabled boxes
	fn rebuild_next_hops(&mut self) {
		let count = self.walkboxes.len();
		let mut distances = vec![vec![INFINITY_DISTANCE; count]; count];
		let mut next_hops = vec![vec![None; count]; count];
		// each box has distance 0 to itself, 1 to its direct neighbours and
		// `INFINITY_DISTANCE` to everything else
		for (i, walkbox) in self.walkboxes.iter().enumerate() {
			for (j, other) in self.walkboxes.iter().enumerate() {
				if i == j {
					distances[i][j] = 0;
					next_hops[i][j] = Some(i);
				} else if walkbox.is_adjacent(other) {
					distances[i][j] = 1;
					next_hops[i][j] = Some(j);
				}
			}
		}
		for k in 0..count {
			for i in 0..count {
				for j in 0..count {
					let via_k = distances[i][k] + distances[k][j];
					if via_k < distances[i][j] {
						distances[i][j] = via_k;
						next_hops[i][j] = Some(k);
					}
				}
			}
		}
		debug!("Rebuilt next-hop table of {} walk boxes", count);
		self.next_hops = next_hops;
	}
	/// Find the immediate neighbour of `from` to walk into when heading for `to`. Returns [None] if `to` cannot be reached (disconnected or disabled) or either index is out of range
	pub fn next_hop_resolved(&self, from: usize, to: usize) -> Option<usize> {
		let count = self.walkboxes.len();
		if from >= count || to >= count {
			return None;
		}
		let mut hop = to;
		// every intermediate is strictly closer to `from` than the box before
		// it so this ends within `count` steps
		for _ in 0..count {
			let next = self.next_hops[from][hop]?;
			if next == hop {
				return Some(hop);
			}
			hop = next;
		}
		error!(
			"Next-hop table does not resolve from walk box {} to {}",
			from, to
		);
		None
	}
	/// Find the walk box containing `point`. If several boxes contain it the lowest index wins. If none do the nearest box is returned instead and the flag is `false`. Returns [None] for an empty matrix
	pub fn region_at(&self, point: Vec2) -> Option<(usize, bool)> {
		let mut min_distance = f32::MAX;
		let mut nearest = None;
		for (i, walkbox) in self.walkboxes.iter().enumerate() {
			if walkbox.contains_point(point) {
				trace!("Point {:?} is inside walk box {}", point, i);
				return Some((i, true));
			}
			let d = walkbox.distance(point);
			if d < min_distance {
				min_distance = d;
				nearest = Some(i);
			}
		}
		nearest.map(|i| (i, false))
	}
}
