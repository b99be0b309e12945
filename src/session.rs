// File: ./src/session.rs
//! Central logic for one interactive session.
//!
//! The session is the single owner of the in-memory task collection. It
//! classifies raw input through the parser, validates indices against the
//! collection, applies the mutation or query, and hands a renderable result
//! back to whichever front-end asked. Persistence is touched exactly twice:
//! `open` at startup and `save` at clean exit. There is no autosave, and a
//! failed save is a warning, never a crash.

use crate::error::TallyError;
use crate::model::parser::{self, Command};
use crate::model::Task;
use crate::storage::Storage;
use crate::store::TaskStore;

/// Structured result of one applied command. Front-ends decide how to frame
/// these (console block vs. chat bubble); the session only produces
/// task-level strings via `lines()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// All tasks, rendered, in collection order.
    Listed(Vec<String>),
    /// Matching tasks for a find, rendered, in original relative order.
    Found(Vec<String>),
    Added { rendered: String, total: usize },
    Removed { rendered: String, total: usize },
    Marked { rendered: String },
    Unmarked { rendered: String },
    PrioritySet { rendered: String, ordinal: i64 },
    /// Clean exit requested; the caller should save and stop reading input.
    Bye,
}

impl Response {
    /// Default task-level message lines shared by both front-ends.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Response::Listed(tasks) => {
                let mut out = vec!["Here are the tasks in your list:".to_string()];
                out.extend(numbered(tasks));
                out
            }
            Response::Found(matches) => {
                if matches.is_empty() {
                    return vec!["No matching tasks found.".to_string()];
                }
                let mut out = vec!["Here are the matching tasks in your list:".to_string()];
                out.extend(numbered(matches));
                out
            }
            Response::Added { rendered, total } => vec![
                "Got it. I've added this task:".to_string(),
                format!("  {}", rendered),
                format!("Now you have {} tasks in the list.", total),
            ],
            Response::Removed { rendered, total } => vec![
                "Noted. I've removed this task:".to_string(),
                format!("  {}", rendered),
                format!("Now you have {} tasks in the list.", total),
            ],
            Response::Marked { rendered } => vec![
                "Nice! I've marked this task as done:".to_string(),
                format!("  {}", rendered),
            ],
            Response::Unmarked { rendered } => vec![
                "OK, I've marked this task as not done yet:".to_string(),
                format!("  {}", rendered),
            ],
            Response::PrioritySet { rendered, ordinal } => vec![
                format!("Priority for task {} set:", ordinal),
                format!("  {}", rendered),
            ],
            Response::Bye => vec!["Bye. Hope to see you again soon!".to_string()],
        }
    }
}

fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect()
}

/// Outcome of the initial load, surfaced so front-ends can show the
/// appropriate banner line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoadReport {
    Loaded { count: usize, skipped: usize },
    /// The file was unreadable; the session started empty.
    Failed,
}

pub struct Session {
    store: TaskStore,
    storage: Storage,
}

impl Session {
    /// Opens a session against the given storage, populating the collection
    /// from disk. An unreadable file degrades to an empty collection with a
    /// warning; the session itself must always come up.
    pub fn open(storage: Storage) -> (Self, LoadReport) {
        let (store, report) = match storage.load() {
            Ok(outcome) => {
                let report = LoadReport::Loaded {
                    count: outcome.tasks.len(),
                    skipped: outcome.skipped,
                };
                (TaskStore::from_tasks(outcome.tasks), report)
            }
            Err(e) => {
                log::warn!("Could not load tasks: {:#}", e);
                (TaskStore::new(), LoadReport::Failed)
            }
        };
        (Self { store, storage }, report)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Flushes the collection to storage. Called once at clean exit.
    pub fn save(&self) -> Result<(), TallyError> {
        self.storage.save(self.store.as_slice()).map_err(|e| {
            log::warn!("Could not save tasks: {:#}", e);
            TallyError::Io(e.context("Could not save tasks to storage"))
        })
    }

    /// Classifies and applies one line of raw input. Blank input is the
    /// caller's concern and should not reach this method. Every error is
    /// recovered at this boundary: the collection is never left corrupted.
    pub fn handle(&mut self, raw: &str) -> Result<Response, TallyError> {
        match parser::parse(raw)? {
            Command::List => Ok(Response::Listed(
                self.store.iter().map(|t| t.to_string()).collect(),
            )),
            Command::Find { keyword } => Ok(Response::Found(
                self.store
                    .find(&keyword)
                    .into_iter()
                    .map(|t| t.to_string())
                    .collect(),
            )),
            Command::Mark { ordinal } => {
                let index = self.checked_index(ordinal)?;
                let task = self.store.get_mut(index)?;
                task.mark_done();
                Ok(Response::Marked {
                    rendered: task.to_string(),
                })
            }
            Command::Unmark { ordinal } => {
                let index = self.checked_index(ordinal)?;
                let task = self.store.get_mut(index)?;
                task.mark_not_done();
                Ok(Response::Unmarked {
                    rendered: task.to_string(),
                })
            }
            Command::Delete { ordinal } => {
                let index = self.checked_index(ordinal)?;
                let removed = self.store.remove(index)?;
                Ok(Response::Removed {
                    rendered: removed.to_string(),
                    total: self.store.len(),
                })
            }
            Command::Todo { description } => Ok(self.add(Task::todo(&description))),
            Command::Deadline { description, by } => {
                // Date validation happens at construction, before anything
                // is appended: a bad date leaves the collection unchanged.
                let task = Task::deadline(&description, &by)?;
                Ok(self.add(task))
            }
            Command::Event {
                description,
                from,
                to,
            } => Ok(self.add(Task::event(&description, &from, &to))),
            Command::Priority { ordinal, level } => {
                let index = self.checked_index(ordinal)?;
                let task = self.store.get_mut(index)?;
                task.set_priority(&level);
                Ok(Response::PrioritySet {
                    rendered: task.to_string(),
                    ordinal,
                })
            }
            Command::Bye => Ok(Response::Bye),
        }
    }

    fn add(&mut self, task: Task) -> Response {
        let rendered = task.to_string();
        self.store.add(task);
        Response::Added {
            rendered,
            total: self.store.len(),
        }
    }

    /// Converts a 1-based ordinal as typed into a zero-based index, range
    /// checked against the current collection size.
    fn checked_index(&self, ordinal: i64) -> Result<usize, TallyError> {
        let size = self.store.len();
        if ordinal < 1 || ordinal as usize > size {
            return Err(TallyError::Range { size });
        }
        Ok((ordinal - 1) as usize)
    }
}
