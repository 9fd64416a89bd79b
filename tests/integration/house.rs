//! Walking around the house through the dispatcher.

use misadventure::foundation::ErrorKind;
use misadventure::parser::DispatchOutcome;

use crate::common::{House, commands};

#[test]
fn walking_changes_the_active_context() {
    let mut d = commands();
    let mut house = House::new();

    assert!(d.dispatch(&mut house, "go north").unwrap().is_matched());
    assert_eq!(house.room_name(), "house.kitchen");
    assert_eq!(d.context().map(|c| c.as_str()), Some("house.kitchen"));

    assert!(d.dispatch(&mut house, "DOWN").unwrap().is_matched());
    assert_eq!(house.room_name(), "house.cellar");

    d.dispatch(&mut house, "up").unwrap();
    d.dispatch(&mut house, "south").unwrap();
    assert_eq!(house.room_name(), "house.hall");
}

#[test]
fn room_commands_follow_the_player() {
    let mut d = commands();
    let mut house = House::new();

    assert_eq!(
        d.dispatch(&mut house, "chop apple").unwrap(),
        DispatchOutcome::Unmatched("chop apple".into())
    );
    d.dispatch(&mut house, "north").unwrap();
    d.dispatch(&mut house, "take green apple").unwrap();
    assert!(d.dispatch(&mut house, "chop apple").unwrap().is_matched());
    assert_eq!(house.said, ["chopped apple"]);

    assert!(!d.dispatch(&mut house, "switch off light").unwrap().is_matched());
}

#[test]
fn items_move_into_the_inventory() {
    let mut d = commands();
    let mut house = House::new();
    d.dispatch(&mut house, "north").unwrap();
    d.dispatch(&mut house, "take knife").unwrap();

    assert!(house.inventory.contains_name("knife"));
    let kitchen = house.world.exit(house.rooms[0].0, "north").unwrap().unwrap();
    assert!(!house.world.room(kitchen).unwrap().items.contains_name("knife"));

    let err = d.dispatch(&mut house, "take knife").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Handler(_)));
    assert_eq!(house.inventory.len(), 1);
}

#[test]
fn blocked_exits_leave_the_player_in_place() {
    let mut d = commands();
    let mut house = House::new();

    let err = d.dispatch(&mut house, "south").unwrap_err();
    assert_eq!(err.to_string(), "command failed: you can't go south");
    assert_eq!(house.room_name(), "house.hall");
    assert_eq!(d.context().map(|c| c.as_str()), Some("house.hall"));
}

#[test]
fn unknown_directions_surface_world_errors() {
    let mut d = commands();
    let mut house = House::new();
    let err = d.dispatch(&mut house, "go sideways").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownDirection(_)));
}

#[test]
fn room_state_changes_description() {
    let mut d = commands();
    let mut house = House::new();
    d.dispatch(&mut house, "switch off light").unwrap();
    let hall = house.world.room(house.here).unwrap();
    assert_eq!(hall.description(), "It is too dark to see.");
}

#[test]
fn help_shows_what_is_possible_here() {
    let mut d = commands().with_help();
    let mut house = House::new();
    d.dispatch(&mut house, "north").unwrap();

    let DispatchOutcome::Help(lines) = d.dispatch(&mut house, "help").unwrap() else {
        panic!("expected help");
    };
    assert!(lines.contains(&"chop ITEM".to_string()));
    assert!(!lines.contains(&"switch off light".to_string()));
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));
}
