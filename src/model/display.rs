// File: ./src/model/display.rs
//! Canonical one-line rendering of a task.
//!
//! Layout: `[<kind>][<completion>][P:<priority>] <description>` plus a
//! kind-specific suffix. This is the only task-level string the core
//! produces; banners and framing belong to the front-ends.

use crate::model::dates;
use crate::model::item::{Task, TaskKind};
use std::fmt;

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}][P:{}] {}",
            self.kind().symbol(),
            self.status.icon(),
            self.priority.symbol(),
            self.description()
        )?;
        match self.kind() {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", dates::format_human(*due)),
            TaskKind::Event { start, end } => {
                write!(f, " (from: {} to: {})", start.display(), end.display())
            }
        }
    }
}
