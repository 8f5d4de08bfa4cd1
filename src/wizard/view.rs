use crate::cli::formatting::{format_description, format_error, format_header};

use super::state::{Choice, FlagStep, Step, WizardState};

const HINT: &str = "enter: next • esc: quit";
const CURSOR: char = '│';

/// Renders the current step as plain lines separated by `\n`.
pub fn render(state: &WizardState) -> String {
    let body = match state.step() {
        Step::Name => text_step("Command alias", state),
        Step::Description => text_step("Command description", state),
        Step::Flags(FlagStep::Question) => choice_step("Do you want to add flags?", state.choice()),
        Step::Flags(FlagStep::Name) => text_step("Flag name", state),
        Step::Flags(FlagStep::Value) => text_step("Flag value", state),
        Step::Flags(FlagStep::Required) => choice_step("Is this flag required?", state.choice()),
        Step::Exec => text_step("Command execution", state),
        Step::End => match state.error() {
            Some(error) => format!(
                "{}\n\n{}",
                format_error(&format!("There's been an error: {error}")),
                format_description("esc: quit")
            ),
            None => "Saving...".to_string(),
        },
    };

    if state.step() == Step::End {
        return body;
    }
    format!("{body}\n\n{}", format_description(HINT))
}

fn text_step(placeholder: &str, state: &WizardState) -> String {
    let input = state.input();
    let line = if input.value().is_empty() {
        format!("> {CURSOR}{}", format_description(placeholder))
    } else {
        let (before, after): (String, String) = {
            let chars: Vec<char> = input.value().chars().collect();
            let split = input.cursor().min(chars.len());
            (
                chars[..split].iter().collect(),
                chars[split..].iter().collect(),
            )
        };
        format!("> {before}{CURSOR}{after}")
    };

    format!("{}\n{line}", format_header(placeholder))
}

fn choice_step(question: &str, choice: Choice) -> String {
    format!(
        "{}\n\n{}\n{}",
        format_header(question),
        checkbox("Yes", choice == Choice::Yes),
        checkbox("No", choice == Choice::No)
    )
}

fn checkbox(label: &str, checked: bool) -> String {
    if checked {
        format!("[x] {label}")
    } else {
        format!("[ ] {label}")
    }
}
