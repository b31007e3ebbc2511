//! Spawn the walk boxes of a room as a single entity
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The walk boxes of a room. Spawn one per room and point each [WalkBoxActor] at the spawned entity
#[derive(Bundle)]
pub struct WalkBoxNavigationBundle {
	/// Walk boxes and their next-hop table
	walkbox_matrix: WalkBoxMatrix,
}

impl WalkBoxNavigationBundle {
	/// Create a new instance of [WalkBoxNavigationBundle] from already validated walk boxes
	pub fn new(walkboxes: Vec<WalkBox>) -> Self {
		WalkBoxNavigationBundle {
			walkbox_matrix: WalkBoxMatrix::new(walkboxes),
		}
	}
	/// Create a new instance of [WalkBoxNavigationBundle] from a prepared [WalkBoxMatrix]
	pub fn from_matrix(walkbox_matrix: WalkBoxMatrix) -> Self {
		WalkBoxNavigationBundle { walkbox_matrix }
	}
	/// Create a new instance of [WalkBoxNavigationBundle] where the walk boxes are declared in a `ron` file on disk. A single malformed walk box fails the whole room
	#[cfg(feature = "ron")]
	pub fn new_from_ron(path: &str) -> Result<Self, RoomLoadError> {
		let room = RoomWalkBoxes::from_ron(path)?;
		let walkbox_matrix = room.to_matrix()?;
		Ok(WalkBoxNavigationBundle { walkbox_matrix })
	}
	pub fn get_walkbox_matrix(&self) -> &WalkBoxMatrix {
		&self.walkbox_matrix
	}
}
