//! `use bevy_walkbox_navigation_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::walkboxes::{
	geometry::*, path::*, room::*, utilities::*, walkbox::*, walkbox_matrix::*, *,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{movement_layer::*, walkbox_layer::*, *},
};

#[cfg(feature = "debug")]
#[doc(hidden)]
pub use crate::plugin::debug_layer::*;
