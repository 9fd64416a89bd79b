//! Items, bags, rooms, and exits for misadventure games.
//!
//! This crate provides:
//! - [`Item`] - Something the player can refer to by one of several names
//! - [`Bag`] - A set of items, such as an inventory or a room's contents
//! - [`Directions`] - Declared exit directions and their opposites
//! - [`World`] / [`Room`] - Rooms linked by two-way exits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bag;
pub mod item;
pub mod room;

pub use bag::Bag;
pub use item::Item;
pub use room::{Directions, Room, RoomId, World};
