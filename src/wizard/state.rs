use crate::config::{Command, Flag};

/// Top-level wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Command alias entry.
    Name,
    /// Description entry.
    Description,
    /// Nested flag collection loop.
    Flags(FlagStep),
    /// Exec template entry.
    Exec,
    /// Definition submitted; waiting for the save result or for the user to leave.
    End,
}

/// Sub-step of the flag collection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStep {
    /// "Do you want to add flags?"
    Question,
    /// Flag name entry.
    Name,
    /// Flag value entry.
    Value,
    /// "Is this flag required?"
    Required,
}

/// Selected option of a two-way toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    /// First option; selected by default.
    #[default]
    Yes,
    /// Second option.
    No,
}

/// Terminal-independent input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// A printable character.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the cursor left.
    Left,
    /// Move the cursor right.
    Right,
    /// Select the previous option.
    Up,
    /// Select the next option.
    Down,
    /// Commit the current step.
    Enter,
    /// Abort the wizard (Esc / Ctrl-C).
    Cancel,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do besides redrawing.
    None,
    /// Save the collected definition.
    Submit {
        /// Command alias as typed
        name: String,
        /// Collected definition
        command: Command,
    },
    /// Leave the wizard without saving.
    Quit,
}

/// Editable single-line text buffer with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Current contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }
}

/// Complete wizard state. Transitions are pure; see [`WizardState::transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    input: TextInput,
    choice: Choice,
    name: String,
    description: String,
    exec: String,
    flags: Vec<Flag>,
    pending_flag: Flag,
    error: Option<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh wizard positioned at the name step.
    pub fn new() -> Self {
        Self {
            step: Step::Name,
            input: TextInput::default(),
            choice: Choice::default(),
            name: String::new(),
            description: String::new(),
            exec: String::new(),
            flags: Vec::new(),
            pending_flag: Flag::default(),
            error: None,
        }
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Text buffer of the current text step.
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Selected option of the current choice step.
    pub fn choice(&self) -> Choice {
        self.choice
    }

    /// Flags collected so far.
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Save error shown at the end step, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records a failed save; the wizard stays at the end step.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Applies `event` and returns the next state with the effect to perform.
    pub fn transition(self, event: WizardEvent) -> (Self, Effect) {
        if event == WizardEvent::Cancel {
            return (self, Effect::Quit);
        }

        match self.step {
            Step::End => (self, Effect::None),
            Step::Flags(FlagStep::Question) | Step::Flags(FlagStep::Required) => {
                self.on_choice(event)
            }
            _ => self.on_text(event),
        }
    }

    fn on_text(mut self, event: WizardEvent) -> (Self, Effect) {
        match event {
            WizardEvent::Char(c) => self.input.insert(c),
            WizardEvent::Backspace => self.input.backspace(),
            WizardEvent::Left => self.input.left(),
            WizardEvent::Right => self.input.right(),
            WizardEvent::Enter => return self.commit_text(),
            WizardEvent::Up | WizardEvent::Down | WizardEvent::Cancel => {}
        }
        (self, Effect::None)
    }

    fn commit_text(mut self) -> (Self, Effect) {
        let text = self.input.take();
        match self.step {
            Step::Name => {
                self.name = text;
                self.step = Step::Description;
            }
            Step::Description => {
                self.description = text;
                self.step = Step::Flags(FlagStep::Question);
            }
            Step::Flags(FlagStep::Name) => {
                self.pending_flag.name = text;
                self.step = Step::Flags(FlagStep::Value);
            }
            Step::Flags(FlagStep::Value) => {
                self.pending_flag.value = text;
                self.step = Step::Flags(FlagStep::Required);
            }
            Step::Exec => {
                self.exec = text;
                self.step = Step::End;
                let effect = Effect::Submit {
                    name: self.name.clone(),
                    command: Command {
                        description: self.description.clone(),
                        exec: self.exec.clone(),
                        flags: self.flags.clone(),
                    },
                };
                return (self, effect);
            }
            Step::Flags(_) | Step::End => {}
        }
        (self, Effect::None)
    }

    fn on_choice(mut self, event: WizardEvent) -> (Self, Effect) {
        match event {
            WizardEvent::Up | WizardEvent::Char('k') => self.choice = Choice::Yes,
            WizardEvent::Down | WizardEvent::Char('j') => self.choice = Choice::No,
            WizardEvent::Enter => self.commit_choice(),
            _ => {}
        }
        (self, Effect::None)
    }

    fn commit_choice(&mut self) {
        let yes = self.choice == Choice::Yes;
        self.choice = Choice::default();

        match self.step {
            Step::Flags(FlagStep::Question) if yes => self.step = Step::Flags(FlagStep::Name),
            Step::Flags(FlagStep::Question) => self.step = Step::Exec,
            Step::Flags(FlagStep::Required) => {
                let mut flag = std::mem::take(&mut self.pending_flag);
                flag.required = yes;
                self.flags.push(flag);
                self.step = Step::Flags(FlagStep::Question);
            }
            _ => {}
        }
    }
}
