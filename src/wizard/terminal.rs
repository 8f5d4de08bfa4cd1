use std::{
    io::{self, Stdout, Write},
    ops::ControlFlow,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, ClearType},
};
use tracing::{info, warn};

use crate::config_store::Commander;

use super::{
    WizardError, WizardOutcome,
    state::{Effect, WizardEvent, WizardState},
    view,
};

/// Raw mode on the alternate screen, restored on drop.
struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }

    fn draw(&mut self, state: &WizardState) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // Raw mode needs explicit carriage returns.
        let frame = view::render(state).replace('\n', "\r\n");
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Drives the wizard on the real terminal until it saves or is aborted.
pub fn run<C: Commander + ?Sized>(commander: &C) -> Result<WizardOutcome, WizardError> {
    let mut session = TerminalSession::enter()?;
    let mut state = WizardState::new();
    session.draw(&state)?;

    loop {
        let Some(input) = map_event(event::read()?) else {
            continue;
        };

        let (next, effect) = state.transition(input);
        state = match apply_effect(next, effect, commander) {
            ControlFlow::Continue(next) => next,
            ControlFlow::Break(outcome) => return Ok(outcome),
        };

        session.draw(&state)?;
    }
}

/// Performs the side effect of a transition.
///
/// Quitting and a successful save end the wizard. A failed save records the
/// error and keeps the wizard on its end step.
pub(crate) fn apply_effect<C: Commander + ?Sized>(
    state: WizardState,
    effect: Effect,
    commander: &C,
) -> ControlFlow<WizardOutcome, WizardState> {
    match effect {
        Effect::None => ControlFlow::Continue(state),
        Effect::Quit => {
            info!("Wizard aborted");
            ControlFlow::Break(WizardOutcome::Cancelled)
        }
        Effect::Submit { name, command } => match commander.add_command(&name, command) {
            Ok(()) => ControlFlow::Break(WizardOutcome::Saved(name.trim().to_string())),
            Err(e) => {
                if e.is_validation() {
                    info!("Wizard input rejected: {e}");
                } else {
                    warn!("Wizard could not save command: {e}");
                }
                ControlFlow::Continue(state.with_error(e.to_string()))
            }
        },
    }
}

/// Maps crossterm key presses to wizard events. Other events are ignored.
pub(crate) fn map_event(event: Event) -> Option<WizardEvent> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(WizardEvent::Cancel),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(WizardEvent::Cancel),
        KeyCode::Enter => Some(WizardEvent::Enter),
        KeyCode::Backspace => Some(WizardEvent::Backspace),
        KeyCode::Left => Some(WizardEvent::Left),
        KeyCode::Right => Some(WizardEvent::Right),
        KeyCode::Up => Some(WizardEvent::Up),
        KeyCode::Down => Some(WizardEvent::Down),
        KeyCode::Char(c) => Some(WizardEvent::Char(c)),
        _ => None,
    }
}
