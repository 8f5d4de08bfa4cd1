//! Unit tests for wizard module
//!
//! Drives the state machine with synthetic events; no terminal involved.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{ops::ControlFlow, sync::Mutex};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tempfile::TempDir;

use crate::config::{Command, ConfigError, Flag};
use crate::config_store::{Commander, ConfigStore};
use crate::wizard::{
    Choice, Effect, FlagStep, Step, WizardEvent, WizardOutcome, WizardState,
    terminal::{apply_effect, map_event},
    view::render,
};

/// Records added commands, or rejects every add as an invalid command.
#[derive(Default)]
struct FakeCommander {
    added: Mutex<Vec<(String, Command)>>,
    rejection: Option<String>,
}

impl Commander for FakeCommander {
    fn add_command(&self, name: &str, command: Command) -> Result<(), ConfigError> {
        if let Some(reason) = &self.rejection {
            return Err(ConfigError::InvalidCommand {
                reason: reason.clone(),
            });
        }
        self.added.lock().unwrap().push((name.to_string(), command));
        Ok(())
    }

    fn delete_command(&self, name: &str) -> Result<(), ConfigError> {
        Err(ConfigError::NotFound(name.to_string()))
    }
}

/// Runs a flow without flags up to the final Enter and returns its effect.
fn submit(name: &str, exec: &str) -> (WizardState, Effect) {
    let events = script(&[
        typed(name),
        typed(""),
        vec![WizardEvent::Down, WizardEvent::Enter],
        exec.chars().map(WizardEvent::Char).collect(),
    ]);
    let (state, effects) = feed(WizardState::new(), &events);
    assert!(effects.is_empty());
    state.transition(WizardEvent::Enter)
}

fn feed(mut state: WizardState, events: &[WizardEvent]) -> (WizardState, Vec<Effect>) {
    let mut effects = Vec::new();
    for event in events {
        let (next, effect) = state.transition(*event);
        state = next;
        if effect != Effect::None {
            effects.push(effect);
        }
    }
    (state, effects)
}

fn typed(text: &str) -> Vec<WizardEvent> {
    let mut events: Vec<_> = text.chars().map(WizardEvent::Char).collect();
    events.push(WizardEvent::Enter);
    events
}

fn script(parts: &[Vec<WizardEvent>]) -> Vec<WizardEvent> {
    parts.concat()
}

#[test]
fn starts_at_name_with_empty_input() {
    let state = WizardState::new();

    assert_eq!(state.step(), Step::Name);
    assert_eq!(state.input().value(), "");
    assert_eq!(state.choice(), Choice::Yes);
}

#[test]
fn flow_without_flags_submits_command() {
    let events = script(&[
        typed("build"),
        typed("Build it"),
        vec![WizardEvent::Down, WizardEvent::Enter],
        typed("make all"),
    ]);

    let (state, effects) = feed(WizardState::new(), &events);

    assert_eq!(state.step(), Step::End);
    assert_eq!(
        effects,
        [Effect::Submit {
            name: "build".to_string(),
            command: Command {
                description: "Build it".to_string(),
                exec: "make all".to_string(),
                flags: vec![],
            },
        }]
    );
}

#[test]
fn flag_loop_collects_flags_in_order() {
    let events = script(&[
        typed("greet"),
        typed(""),
        vec![WizardEvent::Enter],
        typed("msg"),
        typed("hi"),
        vec![WizardEvent::Enter],
        vec![WizardEvent::Enter],
        typed("to"),
        typed("world"),
        vec![WizardEvent::Down, WizardEvent::Enter],
        vec![WizardEvent::Down, WizardEvent::Enter],
        typed("echo {{.msg}} {{.to}}"),
    ]);

    let (_, effects) = feed(WizardState::new(), &events);

    let Some(Effect::Submit { command, .. }) = effects.first() else {
        panic!("expected submit, got {effects:?}");
    };
    assert_eq!(
        command.flags,
        [
            Flag {
                name: "msg".to_string(),
                value: "hi".to_string(),
                required: true,
            },
            Flag {
                name: "to".to_string(),
                value: "world".to_string(),
                required: false,
            },
        ]
    );
    assert_eq!(command.exec, "echo {{.msg}} {{.to}}");
}

#[test]
fn answering_no_skips_to_exec() {
    let events = script(&[typed("a"), typed("b"), vec![WizardEvent::Char('j'), WizardEvent::Enter]]);

    let (state, _) = feed(WizardState::new(), &events);

    assert_eq!(state.step(), Step::Exec);
    assert!(state.flags().is_empty());
}

#[test]
fn choice_navigation_is_clamped() {
    let events = script(&[
        typed("a"),
        typed("b"),
        vec![WizardEvent::Down, WizardEvent::Down, WizardEvent::Up, WizardEvent::Up],
    ]);

    let (state, _) = feed(WizardState::new(), &events);

    assert_eq!(state.step(), Step::Flags(FlagStep::Question));
    assert_eq!(state.choice(), Choice::Yes);
}

#[test]
fn choice_resets_to_first_option_after_commit() {
    let events = script(&[
        typed("a"),
        typed("b"),
        vec![WizardEvent::Enter],
        typed("f"),
        typed("v"),
        vec![WizardEvent::Down, WizardEvent::Enter],
    ]);

    let (state, _) = feed(WizardState::new(), &events);

    assert_eq!(state.step(), Step::Flags(FlagStep::Question));
    assert_eq!(state.choice(), Choice::Yes);
    assert!(!state.flags()[0].required);
}

#[test]
fn cancel_quits_from_any_step() {
    let prefixes = [
        vec![],
        typed("a"),
        script(&[typed("a"), typed("b")]),
        script(&[typed("a"), typed("b"), vec![WizardEvent::Enter]]),
        script(&[typed("a"), typed("b"), vec![WizardEvent::Down, WizardEvent::Enter]]),
    ];

    for prefix in prefixes {
        let (state, effects) = feed(WizardState::new(), &prefix);
        assert!(effects.is_empty());

        let (_, effect) = state.transition(WizardEvent::Cancel);
        assert_eq!(effect, Effect::Quit);
    }
}

#[test]
fn text_editing_moves_cursor_and_deletes() {
    let events = [
        WizardEvent::Char('l'),
        WizardEvent::Char('s'),
        WizardEvent::Left,
        WizardEvent::Left,
        WizardEvent::Left,
        WizardEvent::Char('x'),
        WizardEvent::Right,
        WizardEvent::Backspace,
        WizardEvent::Right,
        WizardEvent::Right,
        WizardEvent::Char('é'),
    ];

    let (state, _) = feed(WizardState::new(), &events);

    assert_eq!(state.input().value(), "xsé");
    assert_eq!(state.input().cursor(), 3);
}

#[test]
fn backspace_on_empty_input_is_noop() {
    let (state, _) = feed(WizardState::new(), &[WizardEvent::Backspace]);

    assert_eq!(state.input().value(), "");
    assert_eq!(state.input().cursor(), 0);
}

#[test]
fn end_state_ignores_input_and_keeps_error() {
    let events = script(&[
        typed("add"),
        typed(""),
        vec![WizardEvent::Down, WizardEvent::Enter],
        typed("ls"),
    ]);
    let (state, _) = feed(WizardState::new(), &events);
    let state = state.with_error("invalid command name 'add'");

    let (state, effects) = feed(
        state,
        &[WizardEvent::Enter, WizardEvent::Char('x'), WizardEvent::Up],
    );

    assert!(effects.is_empty());
    assert_eq!(state.step(), Step::End);
    assert_eq!(state.error(), Some("invalid command name 'add'"));
    assert_eq!(state.transition(WizardEvent::Cancel).1, Effect::Quit);
}

#[test]
fn render_shows_placeholder_then_buffer() {
    let state = WizardState::new();
    assert!(render(&state).contains("Command alias"));

    let (state, _) = feed(state, &[WizardEvent::Char('l'), WizardEvent::Char('s')]);
    assert!(render(&state).contains("> ls│"));
}

#[test]
fn render_choice_marks_selection() {
    let (state, _) = feed(WizardState::new(), &script(&[typed("a"), typed("b")]));

    let frame = render(&state);
    assert!(frame.contains("Do you want to add flags?"));
    assert!(frame.contains("[x] Yes"));
    assert!(frame.contains("[ ] No"));

    let (state, _) = feed(state, &[WizardEvent::Down]);
    let frame = render(&state);
    assert!(frame.contains("[ ] Yes"));
    assert!(frame.contains("[x] No"));
}

#[test]
fn render_end_shows_error() {
    let events = script(&[typed("a"), typed("b"), vec![WizardEvent::Down, WizardEvent::Enter], typed("x")]);
    let (state, _) = feed(WizardState::new(), &events);

    assert!(render(&state).contains("Saving"));
    assert!(render(&state.with_error("disk full")).contains("disk full"));
}

#[test]
fn map_event_translates_keys() {
    let key = |code, modifiers| {
        Event::Key(KeyEvent::new(code, modifiers))
    };

    assert_eq!(
        map_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
        Some(WizardEvent::Char('a'))
    );
    assert_eq!(
        map_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        Some(WizardEvent::Char('A'))
    );
    assert_eq!(
        map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(WizardEvent::Cancel)
    );
    assert_eq!(
        map_event(key(KeyCode::Esc, KeyModifiers::NONE)),
        Some(WizardEvent::Cancel)
    );
    assert_eq!(
        map_event(key(KeyCode::Enter, KeyModifiers::NONE)),
        Some(WizardEvent::Enter)
    );
    assert_eq!(map_event(key(KeyCode::Tab, KeyModifiers::NONE)), None);
    assert_eq!(map_event(Event::FocusGained), None);

    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(map_event(Event::Key(release)), None);
}

#[test]
fn accepted_submit_saves_and_ends() {
    let commander = FakeCommander::default();
    let (state, effect) = submit(" build ", "make all");

    let flow = apply_effect(state, effect, &commander);

    assert!(matches!(flow, ControlFlow::Break(WizardOutcome::Saved(ref name)) if name == "build"));
    let added = commander.added.lock().unwrap();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].1.exec, "make all");
}

#[test]
fn rejected_submit_stays_on_end_with_error() {
    let commander = FakeCommander {
        rejection: Some("exec can't be empty".to_string()),
        ..FakeCommander::default()
    };
    let (state, effect) = submit("build", "make");

    let ControlFlow::Continue(state) = apply_effect(state, effect, &commander) else {
        panic!("a rejected save must not end the wizard");
    };

    assert_eq!(state.step(), Step::End);
    assert_eq!(state.error(), Some("invalid command: exec can't be empty"));
    assert!(render(&state).contains("exec can't be empty"));
    assert!(commander.added.lock().unwrap().is_empty());

    let (state, effect) = state.transition(WizardEvent::Enter);
    assert_eq!(effect, Effect::None);
    assert_eq!(state.step(), Step::End);
}

#[test]
fn reserved_name_is_rejected_by_the_store_without_writing() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::load_from(dir.path().join("config.json")).unwrap();
    let before = std::fs::read(store.path()).unwrap();
    let (state, effect) = submit("add", "ls");

    let ControlFlow::Continue(state) = apply_effect(state, effect, &store) else {
        panic!("a reserved name must not end the wizard");
    };

    assert!(state.error().unwrap().contains("invalid command name 'add'"));
    assert!(store.command_names().is_empty());
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn quit_and_none_effects_need_no_commander() {
    let commander = FakeCommander::default();

    let flow = apply_effect(WizardState::new(), Effect::Quit, &commander);
    assert!(matches!(flow, ControlFlow::Break(WizardOutcome::Cancelled)));

    let flow = apply_effect(WizardState::new(), Effect::None, &commander);
    assert!(matches!(flow, ControlFlow::Continue(ref state) if state.step() == Step::Name));
    assert!(commander.added.lock().unwrap().is_empty());
}

