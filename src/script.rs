//! Line-oriented command language
//!
//! Lets a console (or a test) drive a session with the same messages a
//! graphical surface would send. One command per line; blank lines and
//! lines starting with `#` are skipped. In free text arguments `\n` stands
//! for a line break.
//!
//! ```text
//! edit 2 3                 double-click data cell (2, 3)
//! edit-header row|col I    double-click a header
//! type TEXT                text input for whatever is being edited
//! set R C TEXT             text input addressed to cell (R, C)
//! set-header row|col I T   text input addressed to a header
//! blur                     edit surface lost focus
//! menu row|col I X Y       right-click at page position (X, Y)
//! click                    click outside the menu
//! close-menu               close the menu
//! insert-row | insert-col  menu actions
//! draft TEXT               type into the new change point field
//! submit                   press the add button
//! add LABEL                add a change point directly
//! reset                    re-seed the table
//! ```

use thiserror::Error;

use crate::grid::HeaderKind;
use crate::messages::{AppMsg, EditMsg, EntryMsg, GridMsg, MenuMsg, Msg};

/// Why a single line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unknown header kind '{0}' (expected row or col)")]
    InvalidKind(String),
}

/// A parse failure with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct ScriptLineError {
    pub line: usize,
    #[source]
    pub source: ScriptError,
}

/// Parse a whole script
pub fn parse_script(text: &str) -> Result<Vec<Msg>, ScriptLineError> {
    let mut msgs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(msg)) => msgs.push(msg),
            Ok(None) => {}
            Err(source) => return Err(ScriptLineError { line: i + 1, source }),
        }
    }
    Ok(msgs)
}

/// Parse one line; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<Msg>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim_start()))
        .unwrap_or((line, ""));

    let msg = match command {
        "edit" => {
            let [row, col] = numbers(rest, "edit ROW COL")?;
            Msg::begin_cell(row, col)
        }
        "edit-header" => {
            let (kind, index) = header_address(rest, "edit-header row|col INDEX")?;
            Msg::begin_header(kind, index)
        }
        "type" => Msg::Edit(EditMsg::Input(unescape(rest))),
        "set" => {
            let usage = "set ROW COL TEXT";
            let (row, rest) = next_number(rest, usage)?;
            let (col, text) = next_number(rest, usage)?;
            Msg::Grid(GridMsg::SetCell {
                row,
                col,
                text: unescape(text),
            })
        }
        "set-header" => {
            let usage = "set-header row|col INDEX TEXT";
            let (kind_word, rest) = next_word(rest).ok_or(ScriptError::Usage(usage))?;
            let kind = header_kind(kind_word)?;
            let (index, text) = next_number(rest, usage)?;
            Msg::Grid(GridMsg::SetHeaderText {
                kind,
                index,
                text: unescape(text),
            })
        }
        "blur" => Msg::end_edit(),
        "menu" => {
            let usage = "menu row|col INDEX X Y";
            let mut parts = rest.split_whitespace();
            let (Some(kind), Some(index), Some(x), Some(y), None) = (
                parts.next(),
                parts.next(),
                parts.next(),
                parts.next(),
                parts.next(),
            ) else {
                return Err(ScriptError::Usage(usage));
            };
            Msg::open_menu(
                header_kind(kind)?,
                number(index)?,
                coordinate(x)?,
                coordinate(y)?,
            )
        }
        "click" => Msg::Menu(MenuMsg::DismissOutside),
        "close-menu" => Msg::Menu(MenuMsg::Close),
        "insert-row" => Msg::Menu(MenuMsg::ConfirmInsertRow),
        "insert-col" => Msg::Menu(MenuMsg::ConfirmInsertColumn),
        "draft" => Msg::Entry(EntryMsg::SetDraft(unescape(rest))),
        "submit" => Msg::Entry(EntryMsg::Submit),
        "add" => Msg::add_change_point(unescape(rest)),
        "reset" => Msg::App(AppMsg::Reset),
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(msg))
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn next_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(
        text.split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim_start()))
            .unwrap_or((text, "")),
    )
}

fn next_number<'a>(text: &'a str, usage: &'static str) -> Result<(usize, &'a str), ScriptError> {
    let (word, rest) = next_word(text).ok_or(ScriptError::Usage(usage))?;
    Ok((number(word)?, rest))
}

fn numbers<const N: usize>(text: &str, usage: &'static str) -> Result<[usize; N], ScriptError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() != N {
        return Err(ScriptError::Usage(usage));
    }
    let mut out = [0; N];
    for (slot, word) in out.iter_mut().zip(words) {
        *slot = number(word)?;
    }
    Ok(out)
}

fn number(word: &str) -> Result<usize, ScriptError> {
    word.parse()
        .map_err(|_| ScriptError::InvalidNumber(word.to_string()))
}

fn coordinate(word: &str) -> Result<f32, ScriptError> {
    word.parse()
        .map_err(|_| ScriptError::InvalidNumber(word.to_string()))
}

fn header_kind(word: &str) -> Result<HeaderKind, ScriptError> {
    match word {
        "row" => Ok(HeaderKind::Row),
        "col" | "column" => Ok(HeaderKind::Column),
        other => Err(ScriptError::InvalidKind(other.to_string())),
    }
}

fn header_address(text: &str, usage: &'static str) -> Result<(HeaderKind, usize), ScriptError> {
    let mut parts = text.split_whitespace();
    let (Some(kind), Some(index), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ScriptError::Usage(usage));
    };
    Ok((header_kind(kind)?, number(index)?))
}
