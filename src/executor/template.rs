//! Exec-template rendering.
//!
//! Templates are plain text with `{{.name}}` placeholders that reference flag
//! values. Whitespace inside the braces is allowed (`{{ .name }}`); nothing else
//! is interpreted.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

static FIELD_REF: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\.([A-Za-z0-9_][A-Za-z0-9_-]*)$"));

/// Errors raised while rendering an exec template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` was never closed.
    #[error("unclosed action starting at byte {offset}")]
    Unclosed {
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// The action is not a `.name` field reference.
    #[error("unsupported action '{{{{{action}}}}}'")]
    UnsupportedAction {
        /// Action text between the braces, trimmed
        action: String,
    },

    /// The template references a flag that is not defined.
    #[error("no value for '{key}'")]
    MissingKey {
        /// Referenced key
        key: String,
    },
}

/// Renders `template`, replacing every `{{.key}}` with `values[key]`.
///
/// # Errors
///
/// * `TemplateError::Unclosed` - If a `{{` has no matching `}}`
/// * `TemplateError::UnsupportedAction` - If an action is not a field reference
/// * `TemplateError::MissingKey` - If a referenced key is absent from `values`
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use lotta::executor::template::render;
///
/// let values = HashMap::from([("msg".to_string(), "hi".to_string())]);
/// assert_eq!(render("echo {{.msg}}", &values).unwrap(), "echo hi");
/// ```
pub fn render(template: &str, values: &HashMap<String, String>) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        rendered.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open.find(CLOSE).ok_or(TemplateError::Unclosed {
            offset: consumed + start,
        })?;

        let key = field_name(after_open[..end].trim())?;
        let value = values.get(key).ok_or_else(|| TemplateError::MissingKey {
            key: key.to_string(),
        })?;
        rendered.push_str(value);

        let advance = start + OPEN.len() + end + CLOSE.len();
        consumed += advance;
        rest = &rest[advance..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

fn field_name(action: &str) -> Result<&str, TemplateError> {
    let unsupported = || TemplateError::UnsupportedAction {
        action: action.to_string(),
    };

    let pattern = FIELD_REF.as_ref().map_err(|_| unsupported())?;
    pattern
        .captures(action)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(unsupported)
}
