//! Rooms, exits, and the directions that connect them.
//!
//! Exits are always two-way: connecting the hall `north` to the kitchen also
//! connects the kitchen `south` to the hall. Which direction is the reverse
//! of which is recorded in [`Directions`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use misadventure_foundation::{Error, ErrorKind, Result};

use crate::bag::Bag;

// =============================================================================
// Directions
// =============================================================================

/// Declared directions, each paired with its opposite.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directions {
    reverse: BTreeMap<String, String>,
}

impl Default for Directions {
    /// `north`/`south` and `east`/`west`.
    fn default() -> Self {
        let mut directions = Self::empty();
        for (forward, reverse) in [("north", "south"), ("east", "west")] {
            directions.link(forward, reverse);
        }
        directions
    }
}

impl Directions {
    /// Creates a set with no directions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            reverse: BTreeMap::new(),
        }
    }

    /// Declares a new pair of opposite directions.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::InvalidDirection` if either name is not all lowercase
    /// - `ErrorKind::DuplicateDirection` if either name is already declared,
    ///   or both names are the same
    ///
    /// Nothing is declared unless both names are accepted.
    pub fn add(&mut self, forward: &str, reverse: &str) -> Result<()> {
        for direction in [forward, reverse] {
            if !is_lowercase(direction) {
                return Err(Error::new(ErrorKind::InvalidDirection(
                    direction.to_string(),
                )));
            }
            if self.reverse.contains_key(direction) {
                return Err(Error::new(ErrorKind::DuplicateDirection(
                    direction.to_string(),
                )));
            }
        }
        if forward == reverse {
            return Err(Error::new(ErrorKind::DuplicateDirection(
                forward.to_string(),
            )));
        }
        self.link(forward, reverse);
        Ok(())
    }

    /// The opposite of `direction`, if declared.
    #[must_use]
    pub fn reverse(&self, direction: &str) -> Option<&str> {
        self.reverse.get(direction).map(String::as_str)
    }

    /// Returns true if `direction` has been declared.
    #[must_use]
    pub fn contains(&self, direction: &str) -> bool {
        self.reverse.contains_key(direction)
    }

    /// Every declared direction, alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.reverse.keys().map(String::as_str)
    }

    fn link(&mut self, forward: &str, reverse: &str) {
        self.reverse.insert(forward.to_string(), reverse.to_string());
        self.reverse.insert(reverse.to_string(), forward.to_string());
    }
}

/// Has at least one letter and no capitals.
fn is_lowercase(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_uppercase)
}

// =============================================================================
// Rooms
// =============================================================================

/// Handle to a room in a [`World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(usize);

impl RoomId {
    /// The index of the room within its world.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A place the player can be.
///
/// A room may declare named states (lights on, lights off, ...), each with
/// its own description; the selected state's description replaces the base
/// one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    description: String,
    exits: HashMap<String, RoomId>,
    states: BTreeMap<String, String>,
    state: Option<String>,
    /// What is lying around in the room.
    pub items: Bag,
}

impl Room {
    /// Creates a room. Surrounding whitespace is trimmed from the description.
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            description: description.trim().to_string(),
            ..Self::default()
        }
    }

    /// Builder method to place items in the room.
    #[must_use]
    pub fn with_items(mut self, items: Bag) -> Self {
        self.items = items;
        self
    }

    /// The description of the current state, or the base description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.state
            .as_ref()
            .and_then(|state| self.states.get(state))
            .map_or(&self.description, |d| d)
    }

    /// Declares a named state. Re-declaring a state replaces its description.
    pub fn add_state(&mut self, name: impl Into<String>, description: &str) {
        self.states
            .insert(name.into(), description.trim().to_string());
    }

    /// Selects a declared state.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::UnknownState` if `name` was never declared.
    pub fn set_state(&mut self, name: &str) -> Result<()> {
        if !self.states.contains_key(name) {
            return Err(Error::new(ErrorKind::UnknownState(name.to_string())));
        }
        self.state = Some(name.to_string());
        Ok(())
    }

    /// The selected state, if any.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// =============================================================================
// World
// =============================================================================

/// All rooms of a game plus the directions between them.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    directions: Directions,
    rooms: Vec<Room>,
}

impl World {
    /// Creates an empty world with the default directions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the direction set.
    #[must_use]
    pub fn with_directions(mut self, directions: Directions) -> Self {
        self.directions = directions;
        self
    }

    /// The declared directions.
    #[must_use]
    pub fn directions(&self) -> &Directions {
        &self.directions
    }

    /// Mutable access to the declared directions, e.g. to add `up`/`down`.
    pub fn directions_mut(&mut self) -> &mut Directions {
        &mut self.directions
    }

    /// Adds a room and returns its handle.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::UnknownRoom` for a handle from another world.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.0)
            .ok_or_else(|| Error::new(ErrorKind::UnknownRoom(id.0)))
    }

    /// Looks up a room for modification.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::UnknownRoom` for a handle from another world.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id.0)
            .ok_or_else(|| Error::new(ErrorKind::UnknownRoom(id.0)))
    }

    /// Connects `from` to `to` in `direction`, and `to` back to `from` in the
    /// reverse direction. Existing exits in those directions are replaced.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::UnknownDirection` if `direction` was never declared
    /// - `ErrorKind::UnknownRoom` if either handle is foreign
    pub fn connect(&mut self, from: RoomId, direction: &str, to: RoomId) -> Result<()> {
        let reverse = self.reverse_of(direction)?.to_string();
        self.room(to)?;
        self.room_mut(from)?.exits.insert(direction.to_string(), to);
        self.room_mut(to)?.exits.insert(reverse, from);
        Ok(())
    }

    /// Where `direction` leads from `room`, or `None` if there is no exit
    /// that way.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::UnknownDirection` if `direction` was never declared
    /// - `ErrorKind::UnknownRoom` if `room` is foreign
    pub fn exit(&self, room: RoomId, direction: &str) -> Result<Option<RoomId>> {
        self.reverse_of(direction)?;
        Ok(self.room(room)?.exits.get(direction).copied())
    }

    /// The directions that lead out of `room`, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::UnknownRoom` if `room` is foreign.
    pub fn exits(&self, room: RoomId) -> Result<Vec<&str>> {
        let mut exits: Vec<&str> = self.room(room)?.exits.keys().map(String::as_str).collect();
        exits.sort_unstable();
        Ok(exits)
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if no rooms have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn reverse_of(&self, direction: &str) -> Result<&str> {
        self.directions
            .reverse(direction)
            .ok_or_else(|| Error::new(ErrorKind::UnknownDirection(direction.to_string())))
    }
}
