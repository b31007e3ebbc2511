//! Point and line segment helpers used to test walk box shapes
//!
//! All functions work on [Vec2] in whatever coordinate space the room
//! geometry was authored in
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Turn test for three consecutive points, based on the vectors `b - a` and `c - b`. Positive and negative results indicate the direction of the turn, zero means the points are collinear
pub fn cross_product(a: Vec2, b: Vec2, c: Vec2) -> f32 {
	(b - a).perp_dot(c - b)
}

/// Project `p` onto the segment `[start, end]` and clamp it to the extent of the segment. A segment of zero length returns `start`
pub fn closest_point_on_segment(p: Vec2, start: Vec2, end: Vec2) -> Vec2 {
	let segment = end - start;
	let length_squared = segment.length_squared();
	if length_squared == 0.0 {
		return start;
	}
	let t = ((p - start).dot(segment) / length_squared).clamp(0.0, 1.0);
	start + t * segment
}

/// Whether a horizontal ray cast from `p` towards `+x` crosses the edge `[start, end]`.
///
/// The edge is treated as half-open in `y` (an endpoint only counts when the other endpoint is below it) so a ray passing exactly through a vertex shared by two edges is only counted once, and horizontal edges never count
pub fn is_intersecting(p: Vec2, start: Vec2, end: Vec2) -> bool {
	if (start.y > p.y) == (end.y > p.y) {
		return false;
	}
	let intersect_x = (end.x - start.x) * (p.y - start.y) / (end.y - start.y) + start.x;
	p.x < intersect_x
}

/// Euclidean distance between two points
pub fn distance(p: Vec2, q: Vec2) -> f32 {
	p.distance(q)
}

/// Whether two points are the same within [GEOMETRY_EPSILON]
pub fn equals(p: Vec2, q: Vec2) -> bool {
	p.abs_diff_eq(q, GEOMETRY_EPSILON)
}

/// Whether `p` lies on the segment `[start, end]` within [GEOMETRY_EPSILON]
pub fn is_on_segment(p: Vec2, start: Vec2, end: Vec2) -> bool {
	distance(p, closest_point_on_segment(p, start, end)) <= GEOMETRY_EPSILON
}
