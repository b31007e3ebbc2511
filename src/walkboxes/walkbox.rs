//! A [WalkBox] is a convex quadrilateral describing an area of floor an actor
//! can stand on. Convexity means an actor can walk in a straight line between
//! any two points inside the box, so pathing within a single box is trivial
//! and the interesting work happens between boxes.
//!
//! ```text
//!  v3 ________________ v2
//!    /                |
//!   /                 |
//!  /   scale: 0.8     |
//! /___________________|
//! v0                  v1
//! ```
//!
//! The vertices must be wound consistently (all clockwise or all
//! counter-clockwise). A box that turns back on itself or whose vertices are
//! all collinear is rejected when it is built, the room data is malformed and
//! cannot be navigated.
//!

use crate::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

/// Reasons a [WalkBox] cannot be built from the supplied data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalkBoxError {
	/// The winding of the vertices changes direction, so the polygon is concave or self-intersecting
	#[error("walk box `{id}` must be a convex polygon, vertices {vertices:?} change direction")]
	Concave {
		/// ID of the offending walk box
		id: String,
		/// Vertices as supplied
		vertices: [Vec2; 4],
	},
	/// All of the vertices sit along a line so the box has no area
	#[error("walk box `{id}` is degenerate, vertices {vertices:?} are collinear")]
	Degenerate {
		/// ID of the offending walk box
		id: String,
		/// Vertices as supplied
		vertices: [Vec2; 4],
	},
	/// Scale must be a positive finite number
	#[error("walk box `{id}` has a scale of {scale}, scale must be positive")]
	InvalidScale {
		/// ID of the offending walk box
		id: String,
		/// Scale as supplied
		scale: f32,
	},
}

/// A convex quadrilateral region of walkable floor
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct WalkBox {
	/// Unique name of the box within a room, used by scripts to enable or disable it
	id: String,
	/// Corners of the box, wound consistently
	vertices: [Vec2; 4],
	/// Disabled boxes cannot be walked into
	enabled: bool,
	/// Perspective multiplier applied to the size and speed of actors standing in the box
	scale: f32,
}

impl WalkBox {
	/// Create a new instance of [WalkBox]. Fails if the vertices do not form a convex, non-degenerate polygon or if the `scale` is not positive
	pub fn new(id: impl Into<String>, vertices: [Vec2; 4], scale: f32) -> Result<Self, WalkBoxError> {
		let id = id.into();
		if !scale.is_finite() || scale <= 0.0 {
			return Err(WalkBoxError::InvalidScale { id, scale });
		}
		let mut total_cross_product = 0.0;
		// `true` when turning anti-clockwise
		let mut winding: Option<bool> = None;
		for i in 0..vertices.len() {
			let cp = cross_product(
				vertices[i],
				vertices[(i + 1) % vertices.len()],
				vertices[(i + 2) % vertices.len()],
			);
			if cp == 0.0 {
				continue;
			}
			total_cross_product += cp;
			match winding {
				None => winding = Some(cp > 0.0),
				Some(direction) if direction != (cp > 0.0) => {
					return Err(WalkBoxError::Concave { id, vertices });
				}
				Some(_) => {}
			}
		}
		if total_cross_product == 0.0 {
			return Err(WalkBoxError::Degenerate { id, vertices });
		}
		Ok(WalkBox {
			id,
			vertices,
			enabled: true,
			scale,
		})
	}
	/// Consume the box and set whether it starts enabled
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}
	pub fn get_id(&self) -> &str {
		&self.id
	}
	pub fn get_vertices(&self) -> &[Vec2; 4] {
		&self.vertices
	}
	pub fn get_scale(&self) -> f32 {
		self.scale
	}
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}
	/// Only the owning [WalkBoxMatrix] toggles boxes so that its next-hop table stays in step
	pub(crate) fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
	}
	/// Iterate over the four `(start, end)` edges of the box
	pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
		let count = self.vertices.len();
		(0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % count]))
	}
	/// Whether `point` lies inside the box. The boundary counts as inside: vertices and any point along an edge are contained
	pub fn contains_point(&self, point: Vec2) -> bool {
		if self.vertices.iter().any(|v| equals(point, *v)) {
			return true;
		}
		let mut intersections = 0;
		for (start, end) in self.edges() {
			if is_on_segment(point, start, end) {
				return true;
			}
			if is_intersecting(point, start, end) {
				intersections += 1;
			}
		}
		// odd count means inside
		intersections % 2 == 1
	}
	/// Two boxes are adjacent when both are enabled and a vertex of one lies inside the other. The check is made both ways so it is symmetric
	pub fn is_adjacent(&self, other: &WalkBox) -> bool {
		if !self.enabled || !other.enabled {
			return false;
		}
		other.vertices.iter().any(|v| self.contains_point(*v))
			|| self.vertices.iter().any(|v| other.contains_point(*v))
	}
	/// Shortest distance from `point` to the edges of the box
	pub fn distance(&self, point: Vec2) -> f32 {
		distance(point, self.closest_boundary_point(point))
	}
	/// The point along the edges of the box that is nearest to `point`. When two edges are equally near the earlier edge wins
	pub fn closest_boundary_point(&self, point: Vec2) -> Vec2 {
		let mut min_distance = f32::MAX;
		let mut closest = self.vertices[0];
		for (start, end) in self.edges() {
			let candidate = closest_point_on_segment(point, start, end);
			let d = distance(point, candidate);
			if d < min_distance {
				min_distance = d;
				closest = candidate;
			}
		}
		closest
	}
	/// `point` itself if the box contains it, otherwise the nearest point on the boundary of the box
	pub fn closest_point(&self, point: Vec2) -> Vec2 {
		if self.contains_point(point) {
			point
		} else {
			self.closest_boundary_point(point)
		}
	}
}
