//! Logic for scripted changes to the walk boxes of a room, such as a door
//! opening up a new area of floor
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Used to enable or disable a walk box of a room
#[derive(Event, Clone, Debug, PartialEq)]
pub struct EventToggleWalkBox {
	/// Entity holding the [WalkBoxMatrix] of the room
	room: Entity,
	/// Name of the walk box
	id: String,
	/// Whether the walk box should be walkable
	enabled: bool,
}

impl EventToggleWalkBox {
	/// Create a new instance of [EventToggleWalkBox]
	pub fn new(room: Entity, id: impl Into<String>, enabled: bool) -> Self {
		EventToggleWalkBox {
			room,
			id: id.into(),
			enabled,
		}
	}
	pub fn get_room(&self) -> Entity {
		self.room
	}
	pub fn get_id(&self) -> &str {
		&self.id
	}
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}
}

/// Read [EventToggleWalkBox] and rebuild the next-hop table of each affected [WalkBoxMatrix]
#[cfg(not(tarpaulin_include))]
pub fn process_walkbox_toggles(
	mut events: EventReader<EventToggleWalkBox>,
	mut rooms: Query<&mut WalkBoxMatrix>,
) {
	for event in events.read() {
		match rooms.get_mut(event.get_room()) {
			Ok(mut matrix) => {
				debug!(
					"Setting walk box {} of room {:?} to enabled: {}",
					event.get_id(),
					event.get_room(),
					event.is_enabled()
				);
				matrix.enable_box(event.get_id(), event.is_enabled());
			}
			Err(_) => warn!(
				"Cannot toggle walk box {}, entity {:?} has no walk boxes",
				event.get_id(),
				event.get_room()
			),
		}
	}
}
