//! Useful structures and constants shared by the walk box types
//!

use bevy::prelude::*;

/// Distance recorded between two walk boxes that have not been proven to be connected. Meshes are room sized (tens of boxes) so no real route can get close to this
pub const INFINITY_DISTANCE: u32 = 255;
/// Tolerance used when comparing points and testing whether a point sits on an edge
pub const GEOMETRY_EPSILON: f32 = 1e-4;
/// The largest jump in actor scale allowed between two consecutive waypoints before sub-waypoints get blended in
pub const DEFAULT_MAX_SCALE_STEP: f32 = 0.04;
/// Upper bound on the segments a single crossing is split into, however small the scale step
pub const MAX_BLEND_SEGMENTS: usize = 64;
/// Walking speed of an actor in units per second. Actors walk faster across the screen than they do into the depth of it
pub const DEFAULT_ACTOR_SPEED: Vec2 = Vec2::new(80.0, 20.0);

/// Controls how a path smooths the change of actor scale when it crosses from one walk box into another with a noticeably different scale
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ScaleBlend {
	/// Largest change of scale permitted between two consecutive waypoints. A value of `0.0` or less disables blending
	max_scale_step: f32,
}

impl Default for ScaleBlend {
	fn default() -> Self {
		ScaleBlend {
			max_scale_step: DEFAULT_MAX_SCALE_STEP,
		}
	}
}

impl ScaleBlend {
	/// Create a new instance of [ScaleBlend]. A step that isn't finite disables blending
	pub fn new(max_scale_step: f32) -> Self {
		if !max_scale_step.is_finite() {
			return ScaleBlend::disabled();
		}
		ScaleBlend { max_scale_step }
	}
	/// A [ScaleBlend] which never inserts sub-waypoints
	pub fn disabled() -> Self {
		ScaleBlend { max_scale_step: 0.0 }
	}
	pub fn get_max_scale_step(&self) -> f32 {
		self.max_scale_step
	}
	/// For a change of scale between two walk boxes find how many segments the crossing should be split into, at most [MAX_BLEND_SEGMENTS]. A result of `1` means no sub-waypoints are needed
	pub fn segments_for(&self, scale_delta: f32) -> usize {
		let delta = scale_delta.abs();
		if !self.max_scale_step.is_finite()
			|| self.max_scale_step <= 0.0
			|| !delta.is_finite()
			|| delta <= self.max_scale_step
		{
			return 1;
		}
		let segments = (delta / self.max_scale_step).ceil();
		if segments >= MAX_BLEND_SEGMENTS as f32 {
			MAX_BLEND_SEGMENTS
		} else {
			segments as usize
		}
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn small_delta_needs_no_blending() {
		let blend = ScaleBlend::default();
		assert_eq!(1, blend.segments_for(0.03));
		assert_eq!(1, blend.segments_for(-0.04));
	}
	#[test]
	fn large_delta_is_split() {
		let blend = ScaleBlend::new(0.1);
		assert_eq!(5, blend.segments_for(0.45));
		assert_eq!(5, blend.segments_for(-0.45));
	}
	#[test]
	fn disabled_blend() {
		let blend = ScaleBlend::disabled();
		assert_eq!(1, blend.segments_for(0.9));
	}
	#[test]
	fn tiny_step_is_capped() {
		let blend = ScaleBlend::new(1e-9);
		assert_eq!(MAX_BLEND_SEGMENTS, blend.segments_for(0.7));
		assert_eq!(MAX_BLEND_SEGMENTS, blend.segments_for(-0.7));
	}
	#[test]
	fn non_finite_step_disables_blending() {
		assert_eq!(ScaleBlend::disabled(), ScaleBlend::new(f32::NAN));
		assert_eq!(ScaleBlend::disabled(), ScaleBlend::new(f32::INFINITY));
		assert_eq!(1, ScaleBlend::new(f32::NAN).segments_for(0.7));
	}
}
