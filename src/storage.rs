// Persists the task collection to a flat text file, one task per line.
//
// Line grammar (fields joined by " | "):
//   <T|D|E> | <0|1> | <description> [| <date-field>]...
// `T` has no trailing date fields, `D` one (ISO due date), `E` two
// (ISO-or-raw start, ISO-or-raw end). Priority is not part of the grammar;
// every reloaded task starts at medium.

use crate::model::{Task, TaskKind};
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub const FIELD_SEPARATOR: &str = " | ";

/// Result of reading the whole file: decoded tasks plus the number of lines
/// that were skipped. Skips are tolerated per line (a corrupt line never
/// aborts the read) but are reported so they don't vanish silently.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub skipped: usize,
}

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tasks. A missing file is an empty collection; an unreadable
    /// file is an I/O error for the caller to deal with (the session warns
    /// and starts empty, but the distinction stays observable here).
    pub fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            log::debug!("No task file at {:?}, starting empty", self.path);
            return Ok(LoadOutcome::default());
        }

        let content = Self::with_lock(&self.path, || {
            fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read task file '{}'", self.path.display()))
        })?;

        let mut outcome = LoadOutcome::default();
        for (number, line) in content.lines().enumerate() {
            match decode_line(line) {
                Some(task) => outcome.tasks.push(task),
                None => {
                    outcome.skipped += 1;
                    log::warn!("Skipping unreadable task on line {}: {:?}", number + 1, line);
                }
            }
        }
        if outcome.skipped > 0 {
            log::warn!(
                "Loaded {} tasks, skipped {} unreadable lines from {:?}",
                outcome.tasks.len(),
                outcome.skipped,
                self.path
            );
        }
        Ok(outcome)
    }

    /// Full-replace write: the whole collection is rewritten on every save,
    /// one line per task with a trailing newline each.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory: {}", parent.display()))?;
        }

        let mut content = String::new();
        for task in tasks {
            content.push_str(&encode_line(task));
            content.push('\n');
        }

        Self::with_lock(&self.path, || {
            Self::atomic_write(&self.path, content.as_bytes())
                .with_context(|| format!("Failed to write task file '{}'", self.path.display()))
        })
    }

    /// Helper to get a sidecar lock file path.
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}

/// Encodes one task as one persisted line (no trailing newline).
pub fn encode_line(task: &Task) -> String {
    let mut line = String::new();
    line.push_str(task.kind().symbol());
    line.push_str(FIELD_SEPARATOR);
    line.push_str(if task.is_done() { "1" } else { "0" });
    line.push_str(FIELD_SEPARATOR);
    line.push_str(task.description());
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { due } => {
            line.push_str(FIELD_SEPARATOR);
            line.push_str(&crate::model::dates::format_iso(*due));
        }
        TaskKind::Event { start, end } => {
            line.push_str(FIELD_SEPARATOR);
            line.push_str(&start.iso());
            line.push_str(FIELD_SEPARATOR);
            line.push_str(&end.iso());
        }
    }
    line
}

/// Decodes one persisted line into a task, or None if the line should be
/// skipped: too few fields, unknown kind letter, missing kind-specific
/// fields, or a deadline date that no longer parses. Completion is applied
/// after construction.
pub fn decode_line(line: &str) -> Option<Task> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < 3 {
        return None;
    }

    let kind = parts[0].trim();
    let is_done = parts[1].trim() == "1";
    let description = parts[2].trim();
    // Descriptions are validated non-blank at entry; a line that trims to an
    // empty one is damaged, not a task.
    if description.is_empty() {
        return None;
    }

    let mut task = match kind {
        "T" => Task::todo(description),
        "D" => {
            if parts.len() < 4 {
                return None;
            }
            Task::deadline(description, parts[3].trim()).ok()?
        }
        "E" => {
            if parts.len() < 5 {
                return None;
            }
            // Event sides degrade to raw text on their own, so construction
            // never fails here.
            Task::event(description, parts[3].trim(), parts[4].trim())
        }
        _ => return None,
    };

    if is_done {
        task.mark_done();
    }
    Some(task)
}
