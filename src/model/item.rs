// File: ./src/model/item.rs
use crate::error::TallyError;
use crate::model::dates;
use chrono::NaiveDate;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TaskStatus {
    Done,
    NotDone,
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Single-character mark used in rendered lines and the completion digit.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Done => "X",
            Self::NotDone => " ",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Done => Self::NotDone,
            Self::NotDone => Self::Done,
        }
    }
}

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::High => "H",
            Self::Medium => "M",
            Self::Low => "L",
        }
    }

    /// Permissive parse: full names, first letters and "med" are accepted
    /// case-insensitively; anything else (including empty input) normalizes
    /// to Medium. Never fails.
    pub fn parse_or_default(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "h" | "high" => Self::High,
            "l" | "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

/// One side of an Event's date range. Dates that match none of the accepted
/// formats are retained as opaque display text rather than rejected; this
/// asymmetry with Deadline (which hard-fails) is deliberate compatibility
/// with the persisted data produced by earlier versions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EventDate {
    Parsed(NaiveDate),
    Raw(String),
}

impl EventDate {
    pub fn parse(input: &str) -> Self {
        match dates::parse_flexible(input) {
            Some(d) => Self::Parsed(d),
            None => Self::Raw(input.trim().to_string()),
        }
    }

    /// Human rendering: `Dec 31 2025` for parsed dates, the raw text otherwise.
    pub fn display(&self) -> String {
        match self {
            Self::Parsed(d) => dates::format_human(*d),
            Self::Raw(s) => s.clone(),
        }
    }

    /// Persisted rendering: ISO for parsed dates, the raw text otherwise.
    pub fn iso(&self) -> String {
        match self {
            Self::Parsed(d) => dates::format_iso(*d),
            Self::Raw(s) => s.clone(),
        }
    }
}

/// Variant discriminator plus the kind-specific data arm. Fixed at
/// construction; a task never changes kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDate },
    Event { start: EventDate, end: EventDate },
}

impl TaskKind {
    /// Single-letter symbol shared by display and serialization.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline { .. } => "D",
            Self::Event { .. } => "E",
        }
    }
}

/// One trackable item: description, completion flag, priority and kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    kind: TaskKind,
}

impl Task {
    fn with_kind(description: &str, kind: TaskKind) -> Self {
        Self {
            description: description.trim().to_string(),
            status: TaskStatus::NotDone,
            priority: Priority::Medium,
            kind,
        }
    }

    pub fn todo(description: &str) -> Self {
        Self::with_kind(description, TaskKind::Todo)
    }

    /// An unparseable due date is a hard construction failure, unlike Event
    /// sides which degrade to raw text.
    pub fn deadline(description: &str, raw_due: &str) -> Result<Self, TallyError> {
        let due = dates::parse_flexible(raw_due)
            .ok_or_else(|| TallyError::Date(raw_due.trim().to_string()))?;
        Ok(Self::with_kind(description, TaskKind::Deadline { due }))
    }

    pub fn event(description: &str, raw_start: &str, raw_end: &str) -> Self {
        Self::with_kind(
            description,
            TaskKind::Event {
                start: EventDate::parse(raw_start),
                end: EventDate::parse(raw_end),
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
    }

    pub fn mark_not_done(&mut self) {
        self.status = TaskStatus::NotDone;
    }

    pub fn toggle(&mut self) {
        self.status = self.status.toggled();
    }

    /// Resolves the level permissively; never fails.
    pub fn set_priority(&mut self, level: &str) {
        self.priority = Priority::parse_or_default(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_not_done_medium() {
        let t = Task::todo("read book");
        assert!(!t.is_done());
        assert_eq!(t.priority, Priority::Medium);
        assert_eq!(t.kind().symbol(), "T");
    }

    #[test]
    fn mark_and_toggle_transitions() {
        let mut t = Task::todo("x");
        t.mark_done();
        assert!(t.is_done());
        t.mark_done(); // idempotent
        assert!(t.is_done());
        t.toggle();
        assert!(!t.is_done());
        t.mark_not_done();
        assert!(!t.is_done());
    }

    #[test]
    fn priority_parse_is_permissive() {
        assert_eq!(Priority::parse_or_default("HIGH"), Priority::High);
        assert_eq!(Priority::parse_or_default("h"), Priority::High);
        assert_eq!(Priority::parse_or_default("Low"), Priority::Low);
        assert_eq!(Priority::parse_or_default("med"), Priority::Medium);
        assert_eq!(Priority::parse_or_default("medium"), Priority::Medium);
        assert_eq!(Priority::parse_or_default("banana"), Priority::Medium);
        assert_eq!(Priority::parse_or_default(""), Priority::Medium);
        assert_eq!(Priority::parse_or_default("  m  "), Priority::Medium);
    }

    #[test]
    fn deadline_rejects_bad_dates() {
        assert!(Task::deadline("return book", "2025-12-31").is_ok());
        let err = Task::deadline("return book", "soonish").unwrap_err();
        assert!(matches!(err, TallyError::Date(_)));
    }

    #[test]
    fn event_sides_degrade_independently() {
        let t = Task::event("trip", "2025-01-01", "sometime later");
        match t.kind() {
            TaskKind::Event { start, end } => {
                assert!(matches!(start, EventDate::Parsed(_)));
                assert_eq!(end, &EventDate::Raw("sometime later".to_string()));
            }
            _ => panic!("expected event"),
        }
    }

    #[test]
    fn descriptions_are_trimmed() {
        assert_eq!(Task::todo("  read book  ").description(), "read book");
    }
}
