//! Load the walk boxes of a room from a `ron` file and navigate them
//!

use bevy::prelude::*;
use bevy_walkbox_navigation_plugin::prelude::*;

/// Path to the room fixture
fn room_path() -> String {
	env!("CARGO_MANIFEST_DIR").to_string() + "/assets/room_walkboxes.ron"
}

#[test]
fn declarations_take_defaults() {
	let room = RoomWalkBoxes::from_ron(&room_path()).unwrap();
	let box0 = &room.walkboxes[0];
	assert_eq!("box0", box0.id);
	assert_eq!(1.0, box0.scale);
	assert!(box0.enabled);
	let box8 = &room.walkboxes[8];
	assert_eq!(0.5, box8.scale);
	assert!(!box8.enabled);
}

#[test]
fn bundle_from_disk() {
	let bundle = WalkBoxNavigationBundle::new_from_ron(&room_path()).unwrap();
	let matrix = bundle.get_walkbox_matrix();
	assert_eq!(9, matrix.len());
	assert_eq!(Some(7), matrix.get_index_of("box7"));
	// box8 starts disabled
	assert_eq!(None, matrix.next_hop_resolved(7, 8));
}

#[test]
fn walk_up_the_stairs() {
	let bundle = WalkBoxNavigationBundle::new_from_ron(&room_path()).unwrap();
	let matrix = bundle.get_walkbox_matrix();
	let to = Vec2::new(0.5, 3.5);
	let path = matrix.find_path(Vec2::new(0.5, 0.5), to, &ScaleBlend::default());
	let last = path.last().unwrap();
	assert_eq!(to, last.get_position());
	assert_eq!(0.5, last.get_scale());
	// the scale never grows walking further into the room
	for pair in path.windows(2) {
		assert!(pair[1].get_scale() <= pair[0].get_scale());
	}
}

#[test]
fn open_closed_box() {
	let mut matrix = RoomWalkBoxes::from_ron(&room_path())
		.unwrap()
		.to_matrix()
		.unwrap();
	matrix.enable_box("box8", true);
	assert_eq!(Some(8), matrix.next_hop_resolved(7, 8));
}

#[test]
fn malformed_room_fails() {
	let dir = std::env::temp_dir().join("walkbox_malformed_room.ron");
	std::fs::write(
		&dir,
		r#"(walkboxes: [(id: "bent", vertices: ((0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 4.0)))])"#,
	)
	.unwrap();
	let result = WalkBoxNavigationBundle::new_from_ron(dir.to_str().unwrap());
	assert!(matches!(
		result,
		Err(RoomLoadError::WalkBox(WalkBoxError::Concave { .. }))
	));
}

#[test]
fn invalid_ron_fails() {
	let dir = std::env::temp_dir().join("walkbox_invalid_room.ron");
	std::fs::write(&dir, "(walkboxes: [(id: 3)])").unwrap();
	let result = RoomWalkBoxes::from_ron(dir.to_str().unwrap());
	assert!(matches!(result, Err(RoomLoadError::Ron(_))));
}
