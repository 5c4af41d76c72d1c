//! Line-oriented action scripts for driving a session without a terminal.
//!
//! ```text
//! # pick a style and recolor its cuff
//! gear gloves
//! toggle style-2
//! open
//! zone 1
//! color #2E8B57
//! close
//! ```

use thiserror::Error;
use tracing::debug;

use crate::catalog::{GearType, Hex, UnknownGear};
use crate::engine::{Action, Session};
use crate::error::ValidationError;
use crate::selection::PageDirection;

/// Why a script line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unexpected extra argument '{0}'")]
    ExtraArgument(String),

    #[error("invalid index '{0}'")]
    InvalidIndex(String),

    #[error(transparent)]
    Gear(#[from] UnknownGear),

    #[error(transparent)]
    Color(#[from] ValidationError),
}

/// A parse or apply failure tied to a 1-based script line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub kind: ScriptErrorKind,
}

/// A parsed action with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub action: Action,
}

/// Parse a single non-comment line.
pub fn parse_line(line: &str) -> Result<Option<Action>, ScriptErrorKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };
    let argument = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(ScriptErrorKind::ExtraArgument(extra.to_string()));
    }

    let require = |command: &'static str, expected: &'static str| {
        argument.ok_or(ScriptErrorKind::MissingArgument { command, expected })
    };
    let no_argument = || match argument {
        Some(extra) => Err(ScriptErrorKind::ExtraArgument(extra.to_string())),
        None => Ok(()),
    };

    let action = match command.to_ascii_lowercase().as_str() {
        "gear" => Action::SelectGear(require("gear", "a gear type")?.parse::<GearType>()?),
        "toggle" => Action::ToggleStyle(require("toggle", "a style id")?.to_string()),
        "open" => {
            no_argument()?;
            Action::OpenEditor
        }
        "close" => {
            no_argument()?;
            Action::CloseEditor
        }
        "zone" => Action::SetActiveZone(parse_index(require("zone", "a zone index")?)?),
        "color" => Action::ApplyColor(Hex::parse(require("color", "a #RRGGBB color")?)?),
        "page" => Action::SetPalettePage(parse_index(require("page", "a page index")?)?),
        "next" => {
            no_argument()?;
            Action::PagePalette(PageDirection::Next)
        }
        "prev" => {
            no_argument()?;
            Action::PagePalette(PageDirection::Prev)
        }
        other => return Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    };

    Ok(Some(action))
}

fn parse_index(token: &str) -> Result<i64, ScriptErrorKind> {
    token
        .parse()
        .map_err(|_| ScriptErrorKind::InvalidIndex(token.to_string()))
}

/// Parse a whole script, failing on the first bad line.
pub fn parse(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        if let Some(action) = parse_line(text).map_err(|kind| ScriptError { line, kind })? {
            steps.push(ScriptStep { line, action });
        }
    }
    Ok(steps)
}

/// Apply steps in order, stopping at the first rejected action.
pub fn run(session: &mut Session, steps: &[ScriptStep]) -> Result<(), ScriptError> {
    for step in steps {
        debug!(line = step.line, action = ?step.action, "Applying script step");
        session.apply(&step.action).map_err(|e| ScriptError {
            line: step.line,
            kind: ScriptErrorKind::Color(e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let steps = parse("# header\n\n   \nopen\n").unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].line, 4);
    }

    #[test]
    fn negative_indices_parse() {
        assert_eq!(
            parse_line("page -1").unwrap(),
            Some(Action::SetPalettePage(-1))
        );
    }
}
