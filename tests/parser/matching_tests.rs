//! Tests for matching one pattern against player input.

use misadventure_foundation::Arguments;
use misadventure_parser::{InputTokenizer, Pattern};

fn try_match(template: &str, input: &str) -> Option<Arguments> {
    Pattern::compile(template, None)
        .unwrap()
        .matches(&InputTokenizer::tokenize(input))
}

fn captured(template: &str, input: &str) -> Vec<(String, String)> {
    try_match(template, input)
        .unwrap_or_else(|| panic!("{template:?} should match {input:?}"))
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_lone_placeholder_takes_everything() {
    assert_eq!(
        captured("take ITEM", "take red rusty key"),
        pairs(&[("item", "red rusty key")])
    );
}

#[test]
fn test_literal_splits_placeholders() {
    assert_eq!(
        captured("put ITEM in CONTAINER", "put old brass key in wooden box"),
        pairs(&[("item", "old brass key"), ("container", "wooden box")])
    );
}

#[test]
fn test_missing_literal_never_matches() {
    assert!(try_match("put ITEM in CONTAINER", "put key box").is_none());
    assert!(try_match("put ITEM in CONTAINER", "put key on the box").is_none());
}

#[test]
fn test_first_placeholder_wins_ambiguity() {
    assert_eq!(
        captured("put ITEM in CONTAINER", "put ring in box in chest"),
        pairs(&[("item", "ring in box"), ("container", "chest")])
    );
    assert_eq!(
        captured("give ITEM PERSON", "give the old map the captain"),
        pairs(&[("item", "the old map the"), ("person", "captain")])
    );
}

#[test]
fn test_input_is_case_insensitive() {
    assert_eq!(
        captured("take ITEM", "TAKE The Lamp"),
        pairs(&[("item", "the lamp")])
    );
}

#[test]
fn test_prefix_must_match_exactly() {
    assert!(try_match("pick up ITEM", "pick lamp").is_none());
    assert!(try_match("pick up ITEM", "pick down lamp").is_none());
    assert!(try_match("look", "look around").is_none());
    assert!(try_match("look around", "look").is_none());
    assert!(try_match("look", "look").unwrap().is_empty());
}

#[test]
fn test_every_placeholder_needs_a_word() {
    assert!(try_match("take ITEM", "take").is_none());
    assert!(try_match("put ITEM in CONTAINER", "put in box").is_none());
    assert!(try_match("put ITEM in CONTAINER", "put key in").is_none());
}

#[test]
fn test_trailing_literal() {
    assert_eq!(
        captured("ITEM please", "the salt please"),
        pairs(&[("item", "the salt")])
    );
    assert!(try_match("ITEM please", "the salt thanks").is_none());
}

#[test]
fn test_punctuation_stays_attached() {
    assert!(try_match("look", "look!").is_none());
    assert_eq!(captured("say SOMETHING", "say hello, world!"), pairs(&[("something", "hello, world!")]));
}

#[test]
fn test_empty_input_matches_nothing() {
    assert!(try_match("look", "").is_none());
    assert!(try_match("ITEM", "   ").is_none());
}
