//! Walk boxes are the means of describing the walkable floor of an adventure game room.
//!
//! [SCUMM walk boxes](https://wiki.scummvm.org/index.php/SCUMM/Technical_Reference/Box_resources)
//!
//! The floor of a room is divided into a series of convex quadrilaterals
//! ("walk boxes"). Because each box is convex an actor can walk in a
//! straight line between any two points inside it, so pathfinding only has
//! to decide which sequence of boxes to cross and where to cross each
//! boundary.
//!
//! ```text
//!           +-------+
//!           |       |
//!   +-------|       |-------+
//!   |       |       |       |
//!   | box6  | box7  | box8  |
//!   |       |       |       |
//!   +-------|       |-------+
//!           |       |
//!   +-------+-------+-------+
//!   |       |       |       |
//!   | box3  | box4  | box5  |
//!   |       |       |       |
//!   +-------+-------+-------+
//!   |       |       |       |
//!   | box0  | box1  | box2  |
//!   |       |       |       |
//!   +-------+-------+-------+
//! ```
//!
//! Definitions:
//!
//! * Walk box - a convex quadrilateral of walkable floor with a perspective `scale` applied to actors standing inside it
//! * Mesh - all of the walk boxes of a room, owned by a [walkbox_matrix::WalkBoxMatrix]
//! * Adjacency - two enabled walk boxes touch when a vertex of one lies inside (or on the boundary of) the other
//! * Next-hop table - an all-pairs table built with a Floyd-Warshall relaxation that records which box to head for next when travelling from one box to another
//! * Waypoint - a point on a path along with the box it belongs to and the scale an actor should be drawn at
//!

pub mod geometry;
pub mod path;
pub mod room;
pub mod utilities;
pub mod walkbox;
pub mod walkbox_matrix;
