//! Line-oriented session scripts: one command per line, `#` starts a comment.
//!
//! ```text
//! search thermo
//! filter branch cs
//! open 4
//! mode 4 questions
//! zoom-in 4
//! show
//! ```

use client_core::viewer::{UnknownViewMode, ViewMode, ViewerCommand};
use shared::domain::{DocumentId, FilterAxis, ResourceId, UnknownFilterAxis};
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum ScriptCommand {
    Search(String),
    ClearSearch,
    Filter {
        axis: FilterAxis,
        code: String,
        selected: bool,
    },
    ClearFilters,
    Results,
    Open(ResourceId),
    Viewer(ViewerCommand),
    Download,
    Show,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error(transparent)]
    Axis(#[from] UnknownFilterAxis),
    #[error(transparent)]
    ViewMode(#[from] UnknownViewMode),
}

/// Parses one script line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let Some((verb, rest)) = split_word(line) else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" => ScriptCommand::Search(rest.to_string()),
        "clear-search" => ScriptCommand::ClearSearch,
        "filter" | "unfilter" => {
            let selected = verb.eq_ignore_ascii_case("filter");
            let command = if selected { "filter" } else { "unfilter" };
            let (axis, rest) = split_word(rest).ok_or(ScriptError::MissingArgument {
                command,
                argument: "filter axis",
            })?;
            let code = rest.trim();
            if code.is_empty() {
                return Err(ScriptError::MissingArgument {
                    command,
                    argument: "filter code",
                });
            }
            ScriptCommand::Filter {
                axis: axis.parse()?,
                code: code.to_string(),
                selected,
            }
        }
        "clear-filters" => ScriptCommand::ClearFilters,
        "results" => ScriptCommand::Results,
        "open" => ScriptCommand::Open(ResourceId::new(required(rest, "open", "resource id")?)),
        "close" => ScriptCommand::Viewer(ViewerCommand::Close(document(rest, "close")?)),
        "close-all" => ScriptCommand::Viewer(ViewerCommand::CloseAll),
        "tab" => ScriptCommand::Viewer(ViewerCommand::SwitchTab(document(rest, "tab")?)),
        "mode" => {
            let (id, mode) = split_word(rest).ok_or(ScriptError::MissingArgument {
                command: "mode",
                argument: "document id",
            })?;
            let mode: ViewMode = required(mode, "mode", "view mode")?.parse()?;
            ScriptCommand::Viewer(ViewerCommand::SetViewMode {
                id: DocumentId::from(id),
                mode,
            })
        }
        "zoom-in" => ScriptCommand::Viewer(ViewerCommand::ZoomIn(document(rest, "zoom-in")?)),
        "zoom-out" => ScriptCommand::Viewer(ViewerCommand::ZoomOut(document(rest, "zoom-out")?)),
        "loaded" => ScriptCommand::Viewer(ViewerCommand::MarkLoaded(document(rest, "loaded")?)),
        "failed" => ScriptCommand::Viewer(ViewerCommand::MarkFailed(document(rest, "failed")?)),
        "retry" => ScriptCommand::Viewer(ViewerCommand::Retry(document(rest, "retry")?)),
        "fullscreen" => ScriptCommand::Viewer(ViewerCommand::ToggleFullscreen),
        "download" => ScriptCommand::Download,
        "show" => ScriptCommand::Show,
        _ => return Err(ScriptError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    Some(match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    })
}

fn required<'a>(
    raw: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ScriptError> {
    let raw = raw.trim();
    if raw.is_empty() {
        Err(ScriptError::MissingArgument { command, argument })
    } else {
        Ok(raw)
    }
}

fn document(raw: &str, command: &'static str) -> Result<DocumentId, ScriptError> {
    required(raw, command, "document id").map(DocumentId::from)
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
