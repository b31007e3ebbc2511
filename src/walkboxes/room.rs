//! Declarations of the walk boxes of a room as authored in content data.
//!
//! With the `ron` feature a room can be described on disk:
//!
//! ```text
//! (
//! 	walkboxes: [
//! 		(id: "floor", vertices: ((0.0, 0.0), (320.0, 0.0), (320.0, 60.0), (0.0, 60.0))),
//! 		(id: "stairs", vertices: ((120.0, 60.0), (200.0, 60.0), (190.0, 90.0), (130.0, 90.0)), scale: 0.7),
//! 		(id: "balcony", vertices: ((130.0, 90.0), (190.0, 90.0), (190.0, 120.0), (130.0, 120.0)), scale: 0.5, enabled: false),
//! 	],
//! )
//! ```
//!
//! `vertices` is a tuple of four `(x, y)` corners. `scale` defaults to `1.0`
//! and `enabled` defaults to `true`.
//!

use crate::prelude::*;
use bevy::prelude::*;
#[cfg(feature = "ron")]
use thiserror::Error;

/// Reasons the walk boxes of a room could not be loaded from disk
#[cfg(feature = "ron")]
#[derive(Error, Debug)]
pub enum RoomLoadError {
	/// The room file could not be opened
	#[error("failed opening room file: {0}")]
	Io(#[from] std::io::Error),
	/// The room file is not valid RON
	#[error("failed deserializing room walk boxes: {0}")]
	Ron(#[from] ron::error::SpannedError),
	/// A walk box in the room is malformed
	#[error(transparent)]
	WalkBox(#[from] WalkBoxError),
}

/// Scale used when a declaration doesn't specify one
#[cfg(feature = "serde")]
fn default_scale() -> f32 {
	1.0
}

/// Enabled state used when a declaration doesn't specify one
#[cfg(feature = "serde")]
fn default_enabled() -> bool {
	true
}

/// Authored description of a single walk box
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WalkBoxDeclaration {
	/// Name of the walk box
	pub id: String,
	/// `(x, y)` corners of the walk box
	pub vertices: [(f32, f32); 4],
	/// Perspective scale of actors in the walk box
	#[cfg_attr(feature = "serde", serde(default = "default_scale"))]
	pub scale: f32,
	/// Whether the walk box starts out walkable
	#[cfg_attr(feature = "serde", serde(default = "default_enabled"))]
	pub enabled: bool,
}

impl WalkBoxDeclaration {
	/// Create a new instance of [WalkBoxDeclaration] with a scale of `1.0` which starts enabled
	pub fn new(id: impl Into<String>, vertices: [(f32, f32); 4]) -> Self {
		WalkBoxDeclaration {
			id: id.into(),
			vertices,
			scale: 1.0,
			enabled: true,
		}
	}
	/// Validate the declaration and build the [WalkBox]
	pub fn build(&self) -> Result<WalkBox, WalkBoxError> {
		let vertices = self.vertices.map(|(x, y)| Vec2::new(x, y));
		Ok(WalkBox::new(self.id.clone(), vertices, self.scale)?.with_enabled(self.enabled))
	}
}

/// Every walk box declared for a room, in declaration order
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomWalkBoxes {
	/// The declarations, the order decides the index of each walk box
	pub walkboxes: Vec<WalkBoxDeclaration>,
}

impl RoomWalkBoxes {
	/// Create a new instance of [RoomWalkBoxes]
	pub fn new(walkboxes: Vec<WalkBoxDeclaration>) -> Self {
		RoomWalkBoxes { walkboxes }
	}
	/// Build every declared walk box. The first malformed declaration aborts loading of the whole room
	pub fn build(&self) -> Result<Vec<WalkBox>, WalkBoxError> {
		self.walkboxes.iter().map(|d| d.build()).collect()
	}
	/// Build the [WalkBoxMatrix] of the room
	pub fn to_matrix(&self) -> Result<WalkBoxMatrix, WalkBoxError> {
		Ok(WalkBoxMatrix::new(self.build()?))
	}
	/// From a `ron` file read the walk box declarations of a room
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, RoomLoadError> {
		let file = std::fs::File::open(path)?;
		let room: RoomWalkBoxes = ron::de::from_reader(file)?;
		debug!("Read {} walk box declarations from {}", room.walkboxes.len(), path);
		Ok(room)
	}
}
