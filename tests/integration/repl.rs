//! Driving the REPL with scripted input.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use misadventure::debug::{Tracer, TracerConfig};
use misadventure::foundation::Result;
use misadventure::runtime::{LineEditor, ReadResult, Repl, ReplConfig};

use crate::common::{House, commands};

/// Replays canned input and remembers what it was offered.
struct ScriptedEditor {
    input: VecDeque<ReadResult>,
    offered: Rc<RefCell<Vec<Vec<String>>>>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines
                .iter()
                .map(|line| ReadResult::Line((*line).to_string()))
                .collect(),
            offered: Rc::default(),
        }
    }

    fn interrupted(mut self) -> Self {
        self.input.push_front(ReadResult::Interrupted);
        self
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.input.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_commands(&mut self, templates: &[String]) {
        self.offered.borrow_mut().push(templates.to_vec());
    }
}

#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn session(editor: ScriptedEditor) -> (Repl<House, ScriptedEditor>, Transcript) {
    let out = Transcript::default();
    let repl = Repl::with_editor(editor, commands(), House::new())
        .with_config(ReplConfig::new().with_width(40))
        .with_output(Box::new(out.clone()));
    (repl, out)
}

#[test]
fn plays_until_quit() {
    let (mut repl, _out) = session(ScriptedEditor::new(&[
        "north",
        "take knife",
        "quit",
        "south",
    ]));
    repl.run().unwrap();

    let house = repl.into_state();
    assert_eq!(house.room_name(), "house.kitchen");
    assert!(house.inventory.contains_name("knife"));
}

#[test]
fn completion_follows_the_active_context() {
    let editor = ScriptedEditor::new(&["north"]);
    let offered = Rc::clone(&editor.offered);
    let (mut repl, _out) = session(editor);
    repl.run().unwrap();

    let offered = offered.borrow();
    assert_eq!(offered.len(), 2);
    assert!(offered[0].contains(&"switch off light".to_string()));
    assert!(offered[1].contains(&"chop ITEM".to_string()));
    assert!(!offered[1].contains(&"switch off light".to_string()));
    assert!(offered[1].contains(&"help".to_string()));
    assert!(offered[1].contains(&"?".to_string()));
}

#[test]
fn failures_are_reported_and_play_continues() {
    let (mut repl, out) = session(ScriptedEditor::new(&["south", "xyzzy", "say still here"]));
    repl.run().unwrap();

    let text = out.text();
    assert!(text.contains("Error: command failed: you can't go south\n"));
    assert!(text.contains("while handling \"south\" (matched \"south\")"));
    assert!(text.contains("I don't understand 'xyzzy'.\n"));
    assert_eq!(repl.state().said, ["still here"]);
}

#[test]
fn interrupt_does_not_end_the_session() {
    let (mut repl, _out) = session(ScriptedEditor::new(&["say hello"]).interrupted());
    repl.run().unwrap();
    assert_eq!(repl.state().said, ["hello"]);
}

#[test]
fn help_in_the_kitchen() {
    let (mut repl, out) = session(ScriptedEditor::new(&["north", "?"]));
    repl.run().unwrap();
    assert!(out.text().contains(
        "Here is a list of the commands you can give:\n\
         ?\nchop ITEM\ndown\ngo DIRECTION\nhelp\nnorth\nquit\nsay SOMETHING\nsouth\ntake ITEM\nup\n"
    ));
}

#[test]
fn session_is_traced() {
    let (repl, _out) = session(ScriptedEditor::new(&["north", "down", "nowhere"]));
    let mut repl = repl.with_tracer(Tracer::new(TracerConfig::new().enabled()));
    repl.run().unwrap();

    let tracer = repl.tracer();
    assert_eq!(tracer.current_line(), 3);
    assert_eq!(tracer.buffer().by_event_type("context-changed").len(), 2);
    assert_eq!(tracer.buffer().by_event_type("unmatched").len(), 1);
}
