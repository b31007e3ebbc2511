//! Logic for turning walk requests into routes and stepping actors along
//! them each frame
//!
//! An actor walks towards the head of its [WalkRoute] at a per-axis speed
//! scaled by the waypoint's scale, so actors deeper into the scene (a smaller
//! scale) also move more slowly. Once the actor lands on the waypoint it is
//! dropped from the route and the next one becomes the target. When nothing
//! is left the route is removed and an [EventWalkCompleted] is sent
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Ask an actor to walk to a point of its room
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct EventWalkTo {
	/// Entity with a [WalkBoxActor]
	actor: Entity,
	/// Where the actor should go
	target: Vec2,
}

impl EventWalkTo {
	/// Create a new instance of [EventWalkTo]
	pub fn new(actor: Entity, target: Vec2) -> Self {
		EventWalkTo { actor, target }
	}
	pub fn get_actor(&self) -> Entity {
		self.actor
	}
	pub fn get_target(&self) -> Vec2 {
		self.target
	}
}

/// Make an actor stop where it stands, discarding the rest of its route
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct EventStopWalking {
	/// Entity with a [WalkBoxActor]
	actor: Entity,
}

impl EventStopWalking {
	/// Create a new instance of [EventStopWalking]
	pub fn new(actor: Entity) -> Self {
		EventStopWalking { actor }
	}
	pub fn get_actor(&self) -> Entity {
		self.actor
	}
}

/// Sent once an actor has walked through every waypoint of its route
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct EventWalkCompleted {
	/// Entity which arrived
	actor: Entity,
}

impl EventWalkCompleted {
	/// Create a new instance of [EventWalkCompleted]
	pub fn new(actor: Entity) -> Self {
		EventWalkCompleted { actor }
	}
	pub fn get_actor(&self) -> Entity {
		self.actor
	}
}

/// Marks an entity as able to walk across the walk boxes of a room
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
pub struct WalkBoxActor {
	/// Entity holding the [WalkBoxMatrix] the actor walks on
	room: Entity,
	/// Units per second along `x` and `y` at a scale of `1.0`
	speed: Vec2,
}

impl WalkBoxActor {
	/// Create a new instance of [WalkBoxActor] walking at [DEFAULT_ACTOR_SPEED]
	pub fn new(room: Entity) -> Self {
		WalkBoxActor {
			room,
			speed: DEFAULT_ACTOR_SPEED,
		}
	}
	pub fn with_speed(mut self, speed: Vec2) -> Self {
		self.speed = speed;
		self
	}
	pub fn get_room(&self) -> Entity {
		self.room
	}
	/// Move the actor into a different room
	pub fn set_room(&mut self, room: Entity) {
		self.room = room;
	}
	pub fn get_speed(&self) -> Vec2 {
		self.speed
	}
}

/// The waypoints an actor has yet to reach
#[derive(Component, Clone, Debug, Default, PartialEq, Reflect)]
pub struct WalkRoute {
	/// Remaining waypoints, the head is the current target
	waypoints: Vec<WayPoint>,
}

impl WalkRoute {
	/// Create a new instance of [WalkRoute] from the output of [WalkBoxMatrix::find_path]. The first waypoint is where the actor already stands so it is dropped
	pub fn new(mut path: Vec<WayPoint>) -> Self {
		if !path.is_empty() {
			path.remove(0);
		}
		WalkRoute { waypoints: path }
	}
	pub fn get_waypoints(&self) -> &Vec<WayPoint> {
		&self.waypoints
	}
	/// The waypoint the actor is currently heading to
	pub fn get_target(&self) -> Option<&WayPoint> {
		self.waypoints.first()
	}
	/// The waypoint has been reached
	fn advance(&mut self) {
		if !self.waypoints.is_empty() {
			self.waypoints.remove(0);
		}
	}
	pub fn is_finished(&self) -> bool {
		self.waypoints.is_empty()
	}
}

/// Move `value` towards `target` by at most `step`, landing on it exactly when it's within reach
fn approach(value: f32, target: f32, step: f32) -> f32 {
	if (target - value).abs() <= step {
		target
	} else {
		value + step * (target - value).signum()
	}
}

/// Move `position` one frame towards `target`
pub fn step_towards(position: Vec2, target: Vec2, speed: Vec2, scale: f32, delta: f32) -> Vec2 {
	let step = speed * scale * delta;
	Vec2::new(
		approach(position.x, target.x, step.x),
		approach(position.y, target.y, step.y),
	)
}

/// Discard the routes of actors asked to stop
#[cfg(not(tarpaulin_include))]
pub fn stop_walking(
	mut events: EventReader<EventStopWalking>,
	routes: Query<Entity, With<WalkRoute>>,
	mut commands: Commands,
) {
	for event in events.read() {
		if routes.contains(event.get_actor()) {
			debug!("Actor {:?} stopped walking", event.get_actor());
			commands.entity(event.get_actor()).remove::<WalkRoute>();
		}
	}
}

/// Read [EventWalkTo] and give each actor a [WalkRoute] across the walk boxes of its room
#[cfg(not(tarpaulin_include))]
pub fn process_walk_requests(
	mut events: EventReader<EventWalkTo>,
	actors: Query<(&WalkBoxActor, &Transform)>,
	rooms: Query<&WalkBoxMatrix>,
	settings: Res<WalkBoxSettings>,
	mut commands: Commands,
) {
	// an actor clicked several times in one frame only walks to the latest point
	let mut coalesced: Vec<(Entity, Vec2)> = Vec::new();
	for event in events.read() {
		if let Some(existing) = coalesced.iter_mut().find(|(e, _)| *e == event.get_actor()) {
			existing.1 = event.get_target();
		} else {
			coalesced.push((event.get_actor(), event.get_target()));
		}
	}
	let blend = settings.scale_blend();
	for (entity, target) in coalesced {
		let Ok((actor, transform)) = actors.get(entity) else {
			warn!("Entity {:?} cannot walk, it is not a WalkBoxActor", entity);
			continue;
		};
		let Ok(matrix) = rooms.get(actor.get_room()) else {
			warn!(
				"Actor {:?} cannot walk, room {:?} has no walk boxes",
				entity,
				actor.get_room()
			);
			continue;
		};
		let path = matrix.find_path(transform.translation.truncate(), target, &blend);
		if path.is_empty() {
			continue;
		}
		debug!(
			"Actor {:?} walking to {:?} through {} waypoints",
			entity,
			target,
			path.len()
		);
		commands.entity(entity).insert(WalkRoute::new(path));
	}
}

/// Step every walking actor along its [WalkRoute]
#[cfg(not(tarpaulin_include))]
pub fn walk_actors(
	mut actors: Query<(Entity, &WalkBoxActor, &mut WalkRoute, &mut Transform)>,
	time: Res<Time>,
	mut event_completed: EventWriter<EventWalkCompleted>,
	mut commands: Commands,
) {
	let delta = time.delta_secs();
	for (entity, actor, mut route, mut transform) in actors.iter_mut() {
		let position = transform.translation.truncate();
		if let Some(target) = route.get_target().copied() {
			let moved = step_towards(
				position,
				target.get_position(),
				actor.get_speed(),
				target.get_scale(),
				delta,
			);
			transform.translation.x = moved.x;
			transform.translation.y = moved.y;
			transform.scale = Vec3::new(target.get_scale(), target.get_scale(), transform.scale.z);
			if moved == target.get_position() {
				trace!("Actor {:?} reached {:?}", entity, moved);
				route.advance();
			}
		}
		if route.is_finished() {
			debug!("Actor {:?} finished walking", entity);
			commands.entity(entity).remove::<WalkRoute>();
			event_completed.write(EventWalkCompleted::new(entity));
		}
	}
}
