//! Gizmo overlay of the walk boxes of each room and the remaining routes of
//! walking actors
//!

use crate::prelude::*;
use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;

/// Translucent green used for walk box edges
const WALKBOX_COLOUR: Color = Color::srgba(0.333, 1.0, 0.333, 0.49);
/// Yellow used for routes
const ROUTE_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);

/// Only draw when gizmos are available and the overlay is turned on
pub fn is_debug_drawable(
	settings: Res<WalkBoxSettings>,
	store: Option<Res<GizmoConfigStore>>,
) -> bool {
	store.is_some() && settings.is_draw_debug()
}

/// Outline every enabled walk box
#[cfg(not(tarpaulin_include))]
pub fn draw_walkboxes(rooms: Query<&WalkBoxMatrix>, mut gizmos: Gizmos) {
	for matrix in rooms.iter() {
		for (start, end) in matrix.enabled_edges() {
			gizmos.line_2d(start, end, WALKBOX_COLOUR);
		}
	}
}

/// Trace the path each walking actor has yet to cover
#[cfg(not(tarpaulin_include))]
pub fn draw_routes(actors: Query<(&WalkRoute, &Transform)>, mut gizmos: Gizmos) {
	for (route, transform) in actors.iter() {
		let mut previous = transform.translation.truncate();
		for waypoint in route.get_waypoints() {
			gizmos.line_2d(previous, waypoint.get_position(), ROUTE_COLOUR);
			previous = waypoint.get_position();
		}
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	use bevy::ecs::system::RunSystemOnce;
	#[test]
	fn not_drawable_without_gizmos() {
		let mut world = World::new();
		world.init_resource::<WalkBoxSettings>();
		let drawable = world.run_system_once(is_debug_drawable).unwrap();
		assert!(!drawable);
	}
	#[test]
	fn drawable_with_gizmos() {
		let mut world = World::new();
		world.init_resource::<WalkBoxSettings>();
		world.init_resource::<GizmoConfigStore>();
		assert!(world.run_system_once(is_debug_drawable).unwrap());
		world
			.resource_mut::<WalkBoxSettings>()
			.set_draw_debug(false);
		assert!(!world.run_system_once(is_debug_drawable).unwrap());
	}
}
