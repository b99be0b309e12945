// File: ./src/model/parser.rs
//! Tokenizes one raw input line into a command plus validated arguments.
//!
//! Stateless per call: every line is classified independently and the parser
//! never sees the collection, so bounds checking of numeric indices happens
//! in the session. Blank input is the caller's concern and never reaches
//! `parse`.

use crate::error::TallyError;
use strum::{EnumIter, IntoEnumIterator};

const TOKEN_BY: &str = "/by";
const TOKEN_FROM: &str = "/from";
const TOKEN_TO: &str = "/to";

const MSG_PROVIDE_KEYWORD: &str = "Please provide a keyword to find.";
const MSG_PROVIDE_TASK_NUMBER: &str = "Please provide a task number.";
const MSG_PROVIDE_VALID_NUMBER: &str = "Please provide a valid number for the task.";
const MSG_TODO_EMPTY: &str = "The description of a todo cannot be empty.";
const MSG_DEADLINE_NEEDS_BY: &str =
    "Deadline command must include '/by' followed by the due date.";
const MSG_DEADLINE_FORMAT: &str = "Invalid deadline format. Use: deadline <description> /by <date>";
const MSG_DEADLINE_DESC_EMPTY: &str = "The description of a deadline cannot be empty.";
const MSG_DEADLINE_DATE_EMPTY: &str = "The due date cannot be empty.";
const MSG_EVENT_NEEDS_FROM_TO: &str =
    "Event command must include both '/from' and '/to' followed by start and end times.";
const MSG_EVENT_FORMAT: &str = "Invalid event format. Use: event <description> /from <start> /to <end>";
const MSG_EVENT_DESC_EMPTY: &str = "The description of an event cannot be empty.";
const MSG_EVENT_START_EMPTY: &str = "The start time cannot be empty.";
const MSG_EVENT_END_EMPTY: &str = "The end time cannot be empty.";
const MSG_PRIORITY_NEEDS_BOTH: &str = "Please provide a task number and priority level.";
const MSG_PRIORITY_NEEDS_LEVEL: &str = "Please provide a priority level: high, medium, or low.";

/// Supported command keywords.
#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumIter)]
pub enum CommandKind {
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    Todo,
    Deadline,
    Event,
    Priority,
    Bye,
}

impl CommandKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::Find => "find",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Priority => "priority",
            Self::Bye => "bye",
        }
    }

    /// Classifies trimmed input: exact keyword matches first, then
    /// `keyword + space` prefixes for commands carrying arguments.
    fn classify(input: &str) -> Option<Self> {
        if let Some(kind) = Self::iter().find(|k| input == k.keyword()) {
            return Some(kind);
        }
        Self::iter().find(|k| {
            input.len() > k.keyword().len() + 1 && input.starts_with(&format!("{} ", k.keyword()))
        })
    }
}

/// A classified command with validated, kind-specific arguments.
///
/// Numeric indices are carried 1-based exactly as typed; converting to
/// zero-based and range-checking against the collection is the session's
/// contract (`mark 0` must surface as a range error, which needs the
/// collection size).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    List,
    Find { keyword: String },
    Mark { ordinal: i64 },
    Unmark { ordinal: i64 },
    Delete { ordinal: i64 },
    Todo { description: String },
    Deadline { description: String, by: String },
    Event { description: String, from: String, to: String },
    Priority { ordinal: i64, level: String },
    Bye,
}

/// Classifies one raw line into a `Command` or a structured error.
pub fn parse(raw: &str) -> Result<Command, TallyError> {
    let input = raw.trim();
    let kind = CommandKind::classify(input).ok_or(TallyError::UnknownCommand)?;

    match kind {
        CommandKind::List => Ok(Command::List),
        // `bye` only exits as a bare command; classify prefix-matches
        // `bye something`, so reject trailing text here.
        CommandKind::Bye if input == kind.keyword() => Ok(Command::Bye),
        CommandKind::Bye => Err(TallyError::UnknownCommand),
        CommandKind::Find => {
            let keyword = remainder(input, kind);
            require_not_blank(&keyword, MSG_PROVIDE_KEYWORD)?;
            Ok(Command::Find { keyword })
        }
        CommandKind::Mark => Ok(Command::Mark {
            ordinal: parse_ordinal(input, kind)?,
        }),
        CommandKind::Unmark => Ok(Command::Unmark {
            ordinal: parse_ordinal(input, kind)?,
        }),
        CommandKind::Delete => Ok(Command::Delete {
            ordinal: parse_ordinal(input, kind)?,
        }),
        CommandKind::Todo => {
            let description = remainder(input, kind);
            require_not_blank(&description, MSG_TODO_EMPTY)?;
            Ok(Command::Todo { description })
        }
        CommandKind::Deadline => parse_deadline(input),
        CommandKind::Event => parse_event(input),
        CommandKind::Priority => parse_priority(input),
    }
}

/// Text after the keyword, trimmed. Empty when the command was bare.
fn remainder(input: &str, kind: CommandKind) -> String {
    input[kind.keyword().len()..].trim().to_string()
}

fn require_not_blank(value: &str, message: &str) -> Result<(), TallyError> {
    if value.trim().is_empty() {
        return Err(TallyError::Validation(message.to_string()));
    }
    Ok(())
}

/// Parses the 1-based index following an index command keyword.
fn parse_ordinal(input: &str, kind: CommandKind) -> Result<i64, TallyError> {
    let rest = remainder(input, kind);
    if rest.is_empty() {
        return Err(TallyError::Validation(MSG_PROVIDE_TASK_NUMBER.to_string()));
    }
    rest.parse::<i64>()
        .map_err(|_| TallyError::Parse(MSG_PROVIDE_VALID_NUMBER.to_string()))
}

fn parse_deadline(input: &str) -> Result<Command, TallyError> {
    let by_idx = input
        .find(TOKEN_BY)
        .ok_or_else(|| TallyError::Format(MSG_DEADLINE_NEEDS_BY.to_string()))?;
    let keyword_end = CommandKind::Deadline.keyword().len();
    if by_idx < keyword_end {
        // `/by` glued to (or inside) the keyword; there is no description slice.
        return Err(TallyError::Format(MSG_DEADLINE_FORMAT.to_string()));
    }
    let description = input[keyword_end..by_idx].trim();
    let by = input[by_idx + TOKEN_BY.len()..].trim();
    require_not_blank(description, MSG_DEADLINE_DESC_EMPTY)?;
    require_not_blank(by, MSG_DEADLINE_DATE_EMPTY)?;
    Ok(Command::Deadline {
        description: description.to_string(),
        by: by.to_string(),
    })
}

fn parse_event(input: &str) -> Result<Command, TallyError> {
    let from_idx = input
        .find(TOKEN_FROM)
        .ok_or_else(|| TallyError::Format(MSG_EVENT_NEEDS_FROM_TO.to_string()))?;
    let to_idx = input
        .find(TOKEN_TO)
        .ok_or_else(|| TallyError::Format(MSG_EVENT_NEEDS_FROM_TO.to_string()))?;
    // Tokens must appear in grammar order; a reversed `/to ... /from` is an
    // explicit format error rather than a nonsensical substring split.
    if to_idx < from_idx {
        return Err(TallyError::Format(MSG_EVENT_FORMAT.to_string()));
    }
    let keyword_end = CommandKind::Event.keyword().len();
    if from_idx < keyword_end {
        return Err(TallyError::Format(MSG_EVENT_FORMAT.to_string()));
    }
    let description = input[keyword_end..from_idx].trim();
    let from = input[from_idx + TOKEN_FROM.len()..to_idx].trim();
    let to = input[to_idx + TOKEN_TO.len()..].trim();
    require_not_blank(description, MSG_EVENT_DESC_EMPTY)?;
    require_not_blank(from, MSG_EVENT_START_EMPTY)?;
    require_not_blank(to, MSG_EVENT_END_EMPTY)?;
    Ok(Command::Event {
        description: description.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn parse_priority(input: &str) -> Result<Command, TallyError> {
    let rest = remainder(input, CommandKind::Priority);
    if rest.is_empty() {
        return Err(TallyError::Validation(MSG_PRIORITY_NEEDS_BOTH.to_string()));
    }
    let (index_token, level) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| TallyError::Validation(MSG_PRIORITY_NEEDS_LEVEL.to_string()))?;
    let ordinal = index_token
        .parse::<i64>()
        .map_err(|_| TallyError::Parse(MSG_PROVIDE_VALID_NUMBER.to_string()))?;
    let level = level.trim();
    require_not_blank(level, MSG_PRIORITY_NEEDS_LEVEL)?;
    Ok(Command::Priority {
        ordinal,
        level: level.to_string(),
    })
}
