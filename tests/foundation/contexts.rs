//! Integration tests for hierarchical contexts
//!
//! Tests validation, the within relation, and specificity ordering.

use misadventure_foundation::context::{matches, specificity, validate};
use misadventure_foundation::{CONTEXT_SEP, Context, ContextFault, ErrorKind};

fn ctx(path: &str) -> Context {
    Context::new(path).unwrap()
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn global_context_is_always_valid() {
    assert!(validate(None).is_ok());
}

#[test]
fn separator_is_a_dot() {
    assert_eq!(CONTEXT_SEP, '.');
}

#[test]
fn malformed_paths_are_rejected() {
    for path in ["", ".", ".hall", "hall.", "hall..stairs", "a...b"] {
        let err = Context::new(path).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidContext { .. }),
            "{path:?} should be rejected"
        );
        assert!(err.is_registration_error());
    }
}

#[test]
fn rejection_lists_every_broken_rule() {
    let err = Context::new(".hall..").unwrap_err();
    let ErrorKind::InvalidContext { context, faults } = err.kind else {
        panic!("expected InvalidContext");
    };
    assert_eq!(context, ".hall..");
    assert_eq!(
        faults,
        vec![
            ContextFault::LeadingSeparator,
            ContextFault::TrailingSeparator,
            ContextFault::DoubledSeparator,
        ]
    );
}

#[test]
fn path_text_is_kept() {
    let c = ctx("house.cellar");
    assert_eq!(c.as_str(), "house.cellar");
    assert_eq!(c.to_string(), "house.cellar");
    assert_eq!(&*c, "house.cellar");
    assert_eq!(format!("{c:?}"), "Context(\"house.cellar\")");
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn commands_stay_available_below_their_context() {
    let deep = ctx("house.kitchen.pantry");
    assert!(matches(Some(&ctx("house")), Some(&deep)));
    assert!(matches(Some(&ctx("house.kitchen")), Some(&deep)));
    assert!(matches(Some(&deep), Some(&deep)));
}

#[test]
fn prefix_must_end_on_a_segment_boundary() {
    assert!(!matches(Some(&ctx("house.kit")), Some(&ctx("house.kitchen"))));
    assert!(!matches(Some(&ctx("kitchen")), Some(&ctx("kitchenette"))));
}

#[test]
fn deeper_commands_are_hidden_above() {
    assert!(!matches(Some(&ctx("house.kitchen")), Some(&ctx("house"))));
}

#[test]
fn global_sees_only_global() {
    assert!(matches(None, None));
    assert!(!matches(Some(&ctx("house")), None));
}

#[test]
fn specificity_is_depth() {
    assert_eq!(specificity(None), 0);
    assert_eq!(specificity(Some(&ctx("house"))), 1);
    assert_eq!(specificity(Some(&ctx("house.kitchen"))), 2);
}

#[test]
fn walking_up_the_hierarchy() {
    let mut current = Some(ctx("a.b.c"));
    let mut seen = Vec::new();
    while let Some(c) = current {
        seen.push(c.to_string());
        current = c.parent();
    }
    assert_eq!(seen, ["a.b.c", "a.b", "a"]);
}
