//! Integration tests for directions and rooms
//!
//! Tests direction declarations, two-way exits, and room states.

use misadventure_foundation::ErrorKind;
use misadventure_world::{Directions, Item, Room, RoomId, World};

fn house() -> (World, [RoomId; 3]) {
    let mut world = World::new();
    world.directions_mut().add("up", "down").unwrap();
    let hall = world.add_room(Room::new("A hall."));
    let kitchen = world.add_room(Room::new("A kitchen."));
    let attic = world.add_room(Room::new("An attic."));
    world.connect(hall, "north", kitchen).unwrap();
    world.connect(hall, "up", attic).unwrap();
    (world, [hall, kitchen, attic])
}

// =============================================================================
// Directions
// =============================================================================

#[test]
fn new_directions_come_in_pairs() {
    let mut directions = Directions::default();
    directions.add("in", "out").unwrap();
    assert_eq!(directions.reverse("in"), Some("out"));
    assert_eq!(directions.reverse("out"), Some("in"));
    assert_eq!(directions.reverse("sideways"), None);
}

#[test]
fn directions_must_be_lowercase() {
    let mut directions = Directions::empty();
    let err = directions.add("Up", "down").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDirection(ref d) if d == "Up"));
    assert!(!directions.contains("down"));
}

#[test]
fn directions_cannot_be_redeclared() {
    let mut directions = Directions::default();
    let err = directions.add("up", "north").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateDirection(ref d) if d == "north"));
    assert!(!directions.contains("up"));

    let err = directions.add("round", "round").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateDirection(_)));
}

// =============================================================================
// World
// =============================================================================

#[test]
fn exits_lead_both_ways() {
    let (world, [hall, kitchen, attic]) = house();
    assert_eq!(world.exit(hall, "north").unwrap(), Some(kitchen));
    assert_eq!(world.exit(kitchen, "south").unwrap(), Some(hall));
    assert_eq!(world.exit(attic, "down").unwrap(), Some(hall));
    assert_eq!(world.exit(kitchen, "east").unwrap(), None);
    assert_eq!(world.exits(hall).unwrap(), ["north", "up"]);
    assert_eq!(world.len(), 3);
}

#[test]
fn undeclared_directions_are_errors() {
    let (mut world, [hall, kitchen, _]) = house();
    let err = world.connect(hall, "widdershins", kitchen).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownDirection(_)));
    assert!(world.exit(hall, "widdershins").is_err());
}

#[test]
fn rooms_from_another_world_are_errors() {
    let (big, [_, _, attic]) = house();
    let mut small = World::new();
    let only = small.add_room(Room::new("A cupboard."));
    assert!(matches!(
        small.room(attic).unwrap_err().kind,
        ErrorKind::UnknownRoom(2)
    ));
    assert!(small.connect(only, "north", attic).is_err());
    assert!(small.exits(only).unwrap().is_empty());
    assert!(big.room(only).is_ok());
}

#[test]
fn room_items_can_be_changed_in_place() {
    let (mut world, [hall, ..]) = house();
    world
        .room_mut(hall)
        .unwrap()
        .items
        .insert(Item::new("umbrella"));
    assert!(world.room(hall).unwrap().items.contains_name("umbrella"));
}

// =============================================================================
// Room States
// =============================================================================

#[test]
fn descriptions_are_trimmed() {
    let room = Room::new(
        "
        A dusty attic.
        ",
    );
    assert_eq!(room.description(), "A dusty attic.");
    assert_eq!(room.to_string(), "A dusty attic.");
}

#[test]
fn state_replaces_description() {
    let mut room = Room::new("A living room.");
    room.add_state("dark", "It is pitch black.");
    assert_eq!(room.state(), None);
    assert_eq!(room.description(), "A living room.");

    room.set_state("dark").unwrap();
    assert_eq!(room.state(), Some("dark"));
    assert_eq!(room.description(), "It is pitch black.");
}

#[test]
fn unknown_state_keeps_the_current_one() {
    let mut room = Room::new("A living room.");
    room.add_state("dark", "It is pitch black.");
    room.set_state("dark").unwrap();
    let err = room.set_state("flooded").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownState(_)));
    assert_eq!(room.state(), Some("dark"));
}
