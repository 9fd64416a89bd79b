//! Tracing a dispatch session end to end.

use misadventure::debug::{DispatchEvent, ObservabilityConfig, Tracer, TracerConfig};

use crate::common::{House, commands};

fn traced(lines: &[&str], tracer: &mut Tracer) -> House {
    let mut d = commands();
    let mut house = House::new();
    for line in lines {
        let _ = d.dispatch_observed(&mut house, line, tracer);
    }
    house
}

#[test]
fn every_stage_is_recorded() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    traced(&["north"], &mut tracer);

    let types: Vec<_> = tracer
        .buffer()
        .iter()
        .map(|r| r.event.event_type())
        .collect();
    assert_eq!(types.first(), Some(&"line-received"));
    assert_eq!(types.last(), Some(&"context-changed"));
    assert!(types.contains(&"handler-invoked"));

    let Some(DispatchEvent::ContextChanged { from, to }) =
        tracer.buffer().last().map(|r| r.event.clone())
    else {
        panic!("expected a context change");
    };
    assert_eq!(from.as_deref(), Some("house.hall"));
    assert_eq!(to.as_deref(), Some("house.kitchen"));
}

#[test]
fn records_are_grouped_by_line() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    traced(&["north", "dance", "quit"], &mut tracer);

    assert_eq!(tracer.current_line(), 3);
    assert_eq!(tracer.buffer().lines(), [1, 2, 3]);
    assert_eq!(tracer.buffer().by_event_type("unmatched").len(), 1);
    let last_line = tracer.buffer().records_for_line(3);
    assert!(matches!(
        &last_line.last().unwrap().event,
        DispatchEvent::BuiltinInvoked { builtin, .. } if builtin == "quit"
    ));
}

#[test]
fn development_preset_keeps_resolutions_only() {
    let mut tracer = ObservabilityConfig::development()
        .with_trace_to_stderr(false)
        .to_tracer();
    traced(&["take sword", "north", "take knife"], &mut tracer);

    assert!(tracer.buffer().by_event_type("attempt").is_empty());
    assert!(tracer.buffer().by_event_type("candidates").is_empty());
    assert_eq!(tracer.buffer().by_event_type("handler-invoked").len(), 3);
    assert_eq!(tracer.buffer().by_event_type("context-changed").len(), 1);
}

#[test]
fn human_and_json_renderings() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    traced(&["take the knife"], &mut tracer);

    let invoke = tracer.buffer().by_event_type("handler-invoked")[0].clone();
    assert_eq!(
        tracer.format_record(&invoke),
        "L0001   INVOKE take (\"take ITEM\") {item=\"the knife\"}"
    );

    tracer.set_json_format(true);
    let json = tracer.format_record(&invoke);
    assert!(json.starts_with('{') && json.ends_with('}'));
    assert!(json.contains("\"type\":\"handler-invoked\""));
    assert!(json.contains("\"args\":{\"item\":\"the knife\"}"));
}

#[test]
fn disabled_tracer_still_counts_lines() {
    let mut tracer = Tracer::disabled();
    let house = traced(&["say hi", "say there"], &mut tracer);
    assert_eq!(house.said, ["hi", "there"]);
    assert_eq!(tracer.current_line(), 2);
    assert!(tracer.buffer().is_empty());
}
