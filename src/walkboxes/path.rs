//! Converting a pair of points into a list of [WayPoint]s an actor can walk
//! through.
//!
//! The walk box containing the start and the walk box containing the goal
//! are located (or the nearest ones if either point is off the mesh), then
//! the next-hop table is followed box by box. Each time the route crosses
//! into a new box a waypoint is placed at the point on the new box's boundary
//! nearest to where the actor currently is.
//!
//! ```text
//!  +-------+-------+-------+
//!  |       |       |     G |
//!  |       |       x-------|
//!  |       |     / |       |
//!  +-------+---x---+-------+
//!  |       |  /    |       |
//!  |   S---x       |       |
//!  |       |       |       |
//!  +-------+-------+-------+
//! ```
//!
//! When the route crosses into a box whose scale differs by more than the
//! permitted step, extra waypoints are blended in before the crossing so the
//! actor shrinks or grows gradually rather than popping to a new size.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A point along a path, the walk box it belongs to and the scale an actor should be drawn at when it reaches it
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct WayPoint {
	/// Index of the walk box within the [WalkBoxMatrix]
	walkbox: usize,
	/// Where the actor should walk to
	position: Vec2,
	/// Scale of the actor at this point
	scale: f32,
}

impl WayPoint {
	/// Create a new instance of [WayPoint]
	pub fn new(walkbox: usize, position: Vec2, scale: f32) -> Self {
		WayPoint {
			walkbox,
			position,
			scale,
		}
	}
	pub fn get_walkbox(&self) -> usize {
		self.walkbox
	}
	pub fn get_position(&self) -> Vec2 {
		self.position
	}
	pub fn get_scale(&self) -> f32 {
		self.scale
	}
}

impl WalkBoxMatrix {
	/// Build a path of [WayPoint]s from `from` to `to`.
	///
	/// - The first waypoint is always `from` itself
	/// - If `to` is off the mesh the path ends at the nearest point of the nearest walk box
	/// - If `to` cannot be reached (the walk boxes are disconnected or the destination is disabled) the path ends at the point nearest to `to` on the last box that could be reached
	///
	/// An empty matrix produces an empty path
	pub fn find_path(&self, from: Vec2, to: Vec2, blend: &ScaleBlend) -> Vec<WayPoint> {
		let (Some((mut current, _)), Some((target, _))) = (self.region_at(from), self.region_at(to))
		else {
			warn!("Cannot find a path across a room without any walk boxes");
			return Vec::new();
		};
		let walkboxes = self.get_boxes();
		let mut path = vec![WayPoint::new(current, from, walkboxes[current].get_scale())];
		let mut position = from;
		while current != target {
			let Some(next) = self.next_hop_resolved(current, target) else {
				debug!(
					"Walk box {} cannot be reached from {}, stopping short",
					target, current
				);
				break;
			};
			let crossing = walkboxes[next].closest_boundary_point(position);
			let current_scale = walkboxes[current].get_scale();
			let next_scale = walkboxes[next].get_scale();
			let segments = blend.segments_for(next_scale - current_scale);
			for step in 1..segments {
				let t = step as f32 / segments as f32;
				path.push(WayPoint::new(
					current,
					position.lerp(crossing, t),
					current_scale + (next_scale - current_scale) * t,
				));
			}
			path.push(WayPoint::new(next, crossing, next_scale));
			current = next;
			position = crossing;
		}
		let last = &walkboxes[current];
		path.push(WayPoint::new(current, last.closest_point(to), last.get_scale()));
		trace!("Path from {:?} to {:?}: {:?}", from, to, path);
		path
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;

	/// Helper for building a unit square with its bottom left corner at `(x, y)`
	fn unit(id: &str, x: f32, y: f32, scale: f32) -> WalkBox {
		WalkBox::new(
			id,
			[
				Vec2::new(x, y),
				Vec2::new(x + 1.0, y),
				Vec2::new(x + 1.0, y + 1.0),
				Vec2::new(x, y + 1.0),
			],
			scale,
		)
		.unwrap()
	}
	/// ```text
	///   +-------+-------+-------+
	///   | box3  | box4  | box5  |
	///   +-------+-------+-------+
	///   | box0  | box1  | box2  |
	///   +-------+-------+-------+
	/// ```
	fn grid() -> WalkBoxMatrix {
		let mut boxes = Vec::new();
		for row in 0..2 {
			for column in 0..3 {
				boxes.push(unit(
					&format!("box{}", row * 3 + column),
					column as f32,
					row as f32,
					1.0,
				));
			}
		}
		WalkBoxMatrix::new(boxes)
	}

	#[test]
	fn same_box_is_two_waypoints() {
		let matrix = grid();
		let path = matrix.find_path(
			Vec2::new(0.2, 0.2),
			Vec2::new(0.8, 0.7),
			&ScaleBlend::default(),
		);
		let actual = vec![
			WayPoint::new(0, Vec2::new(0.2, 0.2), 1.0),
			WayPoint::new(0, Vec2::new(0.8, 0.7), 1.0),
		];
		assert_eq!(actual, path);
	}
	#[test]
	fn neighbouring_boxes() {
		let matrix = grid();
		let path = matrix.find_path(
			Vec2::new(0.5, 0.5),
			Vec2::new(1.5, 0.5),
			&ScaleBlend::default(),
		);
		let actual = vec![
			WayPoint::new(0, Vec2::new(0.5, 0.5), 1.0),
			WayPoint::new(1, Vec2::new(1.0, 0.5), 1.0),
			WayPoint::new(1, Vec2::new(1.5, 0.5), 1.0),
		];
		assert_eq!(actual, path);
	}
	#[test]
	fn across_grid_ends_at_goal() {
		let matrix = grid();
		let to = Vec2::new(2.5, 1.5);
		let path = matrix.find_path(Vec2::new(0.5, 0.5), to, &ScaleBlend::default());
		let last = path.last().unwrap();
		assert_eq!(to, last.get_position());
		assert_eq!(5, last.get_walkbox());
		// each crossing moves into a box adjacent to the previous one
		for pair in path.windows(2) {
			let a = matrix.get_box(pair[0].get_walkbox()).unwrap();
			let b = matrix.get_box(pair[1].get_walkbox()).unwrap();
			assert!(a == b || a.is_adjacent(b));
		}
	}
	#[test]
	fn snap_goal_outside_mesh() {
		let matrix = grid();
		let path = matrix.find_path(
			Vec2::new(0.5, 0.5),
			Vec2::new(3.5, 1.5),
			&ScaleBlend::default(),
		);
		assert_eq!(Vec2::new(3.0, 1.5), path.last().unwrap().get_position());
	}
	#[test]
	fn start_outside_mesh_is_kept() {
		let matrix = grid();
		let from = Vec2::new(-1.0, 0.5);
		let path = matrix.find_path(from, Vec2::new(0.5, 0.5), &ScaleBlend::default());
		let actual = vec![
			WayPoint::new(0, from, 1.0),
			WayPoint::new(0, Vec2::new(0.5, 0.5), 1.0),
		];
		assert_eq!(actual, path);
	}
	#[test]
	fn stops_short_when_disconnected() {
		let mut matrix = WalkBoxMatrix::new(vec![
			unit("left", 0.0, 0.0, 1.0),
			unit("bridge", 1.0, 0.0, 1.0),
			unit("right", 2.0, 0.0, 1.0),
		]);
		matrix.enable_box("bridge", false);
		let path = matrix.find_path(
			Vec2::new(0.5, 0.5),
			Vec2::new(2.5, 0.5),
			&ScaleBlend::default(),
		);
		let actual = vec![
			WayPoint::new(0, Vec2::new(0.5, 0.5), 1.0),
			WayPoint::new(0, Vec2::new(1.0, 0.5), 1.0),
		];
		assert_eq!(actual, path);
	}
	#[test]
	fn blend_scale_when_crossing() {
		let matrix = WalkBoxMatrix::new(vec![
			unit("near", 0.0, 0.0, 1.0),
			unit("far", 1.0, 0.0, 0.3),
		]);
		let path = matrix.find_path(
			Vec2::new(0.5, 0.5),
			Vec2::new(1.5, 0.5),
			&ScaleBlend::new(0.04),
		);
		let minimum_blended = ((0.7_f32 / 0.04).ceil() as usize) - 1;
		// start, blended points, crossing and goal
		assert!(path.len() >= minimum_blended + 3);
		for pair in path.windows(2) {
			assert!(pair[1].get_scale() <= pair[0].get_scale());
		}
		let blended: Vec<&WayPoint> = path[1..path.len() - 2].iter().collect();
		assert!(blended.len() >= minimum_blended);
		for pair in blended.windows(2) {
			assert!(pair[1].get_scale() < pair[0].get_scale());
			assert!(pair[1].get_position().x > pair[0].get_position().x);
		}
		let crossing = path[path.len() - 2];
		assert_eq!(Vec2::new(1.0, 0.5), crossing.get_position());
		assert_eq!(0.3, crossing.get_scale());
	}
	#[test]
	fn no_blend_when_disabled() {
		let matrix = WalkBoxMatrix::new(vec![
			unit("near", 0.0, 0.0, 1.0),
			unit("far", 1.0, 0.0, 0.3),
		]);
		let path = matrix.find_path(
			Vec2::new(0.5, 0.5),
			Vec2::new(1.5, 0.5),
			&ScaleBlend::disabled(),
		);
		assert_eq!(3, path.len());
	}
	#[test]
	fn empty_matrix_gives_empty_path() {
		let matrix = WalkBoxMatrix::new(vec![]);
		let path = matrix.find_path(Vec2::ZERO, Vec2::ONE, &ScaleBlend::default());
		assert!(path.is_empty());
	}
	#[test]
	fn tiny_scale_step_is_capped() {
		let matrix = WalkBoxMatrix::new(vec![
			unit("near", 0.0, 0.0, 1.0),
			unit("far", 1.0, 0.0, 0.3),
		]);
		let path = matrix.find_path(
			Vec2::new(0.5, 0.5),
			Vec2::new(1.5, 0.5),
			&ScaleBlend::new(1e-6),
		);
		// start, blended points, crossing and goal
		assert_eq!(MAX_BLEND_SEGMENTS - 1 + 3, path.len());
	}
}
