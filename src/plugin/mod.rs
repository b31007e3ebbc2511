//! Defines the Bevy [Plugin] for walk box navigation
//!
//! Each frame runs in three stages:
//!
//! 1. [OrderingSet::Toggle] - walk boxes are enabled/disabled and next-hop tables rebuilt
//! 2. [OrderingSet::Request] - walk requests are turned into a [WalkRoute] for each actor
//! 3. [OrderingSet::Walk] - actors step along their routes
//!
//! so a door opened and a walk requested in the same frame already see the new table
//!

use crate::prelude::*;
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub mod debug_layer;
pub mod movement_layer;
pub mod walkbox_layer;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	Toggle,
	Request,
	Walk,
}

/// Global tuning of the plugin
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Resource, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct WalkBoxSettings {
	/// Largest change of actor scale between two waypoints, `0.0` disables blending
	max_scale_step: f32,
	/// Whether the debug overlay is drawn when the `debug` feature is enabled
	draw_debug: bool,
}

impl Default for WalkBoxSettings {
	fn default() -> Self {
		WalkBoxSettings {
			max_scale_step: DEFAULT_MAX_SCALE_STEP,
			draw_debug: true,
		}
	}
}

impl WalkBoxSettings {
	/// Create a new instance of [WalkBoxSettings]
	pub fn new(max_scale_step: f32, draw_debug: bool) -> Self {
		WalkBoxSettings {
			max_scale_step,
			draw_debug,
		}
	}
	pub fn get_max_scale_step(&self) -> f32 {
		self.max_scale_step
	}
	pub fn set_max_scale_step(&mut self, max_scale_step: f32) {
		self.max_scale_step = max_scale_step;
	}
	pub fn is_draw_debug(&self) -> bool {
		self.draw_debug
	}
	pub fn set_draw_debug(&mut self, draw_debug: bool) {
		self.draw_debug = draw_debug;
	}
	/// The [ScaleBlend] used when building paths
	pub fn scale_blend(&self) -> ScaleBlend {
		ScaleBlend::new(self.max_scale_step)
	}
}

pub struct WalkBoxNavigationPlugin;

impl Plugin for WalkBoxNavigationPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<WalkBox>()
			.register_type::<WalkBoxMatrix>()
			.register_type::<WayPoint>()
			.register_type::<ScaleBlend>()
			.register_type::<WalkBoxSettings>()
			.register_type::<WalkBoxActor>()
			.register_type::<WalkRoute>()
			.init_resource::<WalkBoxSettings>()
			.add_event::<walkbox_layer::EventToggleWalkBox>()
			.add_event::<movement_layer::EventWalkTo>()
			.add_event::<movement_layer::EventStopWalking>()
			.add_event::<movement_layer::EventWalkCompleted>()
			.configure_sets(
				Update,
				(
					OrderingSet::Toggle,
					OrderingSet::Request,
					OrderingSet::Walk,
				)
					.chain(),
			)
			.add_systems(
				Update,
				(
					walkbox_layer::process_walkbox_toggles.in_set(OrderingSet::Toggle),
					(
						movement_layer::stop_walking,
						movement_layer::process_walk_requests,
					)
						.chain()
						.in_set(OrderingSet::Request),
					movement_layer::walk_actors.in_set(OrderingSet::Walk),
				),
			);
		#[cfg(feature = "debug")]
		app.add_systems(
			Update,
			(debug_layer::draw_walkboxes, debug_layer::draw_routes)
				.after(OrderingSet::Walk)
				.run_if(debug_layer::is_debug_drawable),
		);
	}
}
