//! This is a plugin for Bevy game engine to navigate actors across the walk boxes of a 2D point-and-click adventure room
//!

pub mod bundle;
pub mod plugin;
pub mod walkboxes;

pub mod prelude;
