//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use misadventure_foundation::{Error, ErrorContext, ErrorKind, TemplateFault};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_template() {
    let err = Error::invalid_template("take Lamp", TemplateFault::MixedCase("Lamp".into()));
    assert!(matches!(err.kind, ErrorKind::InvalidTemplate { .. }));
    assert!(err.is_registration_error());
}

#[test]
fn error_signature_mismatch() {
    let err = Error::signature_mismatch("go", "go DIRECTION", vec!["direction".into()], vec![]);
    assert!(matches!(err.kind, ErrorKind::SignatureMismatch { .. }));
    assert!(err.is_registration_error());
}

#[test]
fn error_handler() {
    let err = Error::handler("the door is locked");
    assert!(matches!(err.kind, ErrorKind::Handler(_)));
    assert!(!err.is_registration_error());
}

#[test]
fn error_internal() {
    let err = Error::internal("terminal went away");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert!(!err.is_registration_error());
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn display_template_faults() {
    let cases = [
        (TemplateFault::Empty, "at least one word"),
        (TemplateFault::NonAlphabetic("l4mp".into()), "letters only"),
        (TemplateFault::MixedCase("Lamp".into()), "not a mix"),
        (TemplateFault::DuplicatePlaceholder("item".into()), "\"ITEM\" may only be used once"),
    ];
    for (fault, expected) in cases {
        let msg = Error::invalid_template("t", fault).to_string();
        assert!(msg.contains(expected), "{msg:?} should contain {expected:?}");
    }
}

#[test]
fn display_signature_mismatch() {
    let err = Error::signature_mismatch(
        "put",
        "put ITEM in CONTAINER",
        vec!["item".into(), "container".into()],
        vec!["item".into()],
    );
    assert_eq!(
        err.to_string(),
        "the handler put(item) has the wrong signature for \"put ITEM in CONTAINER\"; \
         the parameters should be (item, container)"
    );
}

#[test]
fn display_world_errors() {
    assert_eq!(
        Error::new(ErrorKind::InvalidDirection("North".into())).to_string(),
        "invalid direction \"North\": directions must be all lowercase"
    );
    assert_eq!(
        Error::new(ErrorKind::UnknownRoom(7)).to_string(),
        "room #7 does not exist"
    );
    assert!(
        Error::new(ErrorKind::UnknownState("dusty".into()))
            .to_string()
            .contains("dusty")
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::handler("oops");
    assert!(err.context.is_none());
}

#[test]
fn error_with_context() {
    let err = Error::handler("oops").with_context(
        ErrorContext::new()
            .with_input("jump around")
            .with_template("jump around")
            .with_frame("jump"),
    );
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.input.as_deref(), Some("jump around"));
    assert_eq!(ctx.stack, ["jump"]);
    assert_eq!(
        ctx.to_string(),
        "while handling \"jump around\" (matched \"jump around\")\n  in jump\n"
    );
}

#[test]
fn error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::internal("x"));
}
