//! Line-oriented task file.
//!
//! One task per line, fields joined by `" | "`:
//!
//! ```text
//! T | 1 | read book
//! D | 0 | return book | Jun 6 2019
//! E | 0 | project meeting | Mon 2pm | 4pm
//! ```
//!
//! Field text is written as-is. A description that itself contains `" | "`
//! will not read back as written.

use std::{
    fs,
    path::Path,
};

use thiserror::Error;
use tracing::debug;

use crate::error::{Result, ValidationError, ZenError};
use crate::task::{Task, TaskKind, TaskType};
use crate::todolist::TaskList;

pub const DEFAULT_DATA_FILE: &str = "data/zen.txt";

const FIELD_SEPARATOR: &str = " | ";
const DONE: &str = "1";
const NOT_DONE: &str = "0";

/// Why a stored line could not be turned back into a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    #[error("unknown task type `{0}`")]
    UnknownType(String),

    #[error("{0} missing")]
    MissingField(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_no: usize,
    pub content: String,
    pub reason: LineError,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub list: TaskList,
    pub skipped: Vec<SkippedLine>,
}

/// Reads the task file. A missing file is an empty list; unreadable lines are
/// skipped and reported.
pub fn load(path: &Path) -> Result<LoadReport> {
    ensure_parent(path, "load")?;
    if !path.exists() {
        debug!(path = %path.display(), "no task file yet");
        return Ok(LoadReport::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ZenError::io("load", path, e))?;
    let report = decode(&content);
    for skipped in &report.skipped {
        // Surfaced to the user through the load report.
        debug!(
            line = skipped.line_no,
            reason = %skipped.reason,
            "skipping corrupted line: {}",
            skipped.content
        );
    }
    debug!(
        path = %path.display(),
        loaded = report.list.len(),
        skipped = report.skipped.len(),
        "tasks loaded"
    );
    Ok(report)
}

/// Rewrites the whole file from `list`, replacing it in one rename.
pub fn save(path: &Path, list: &TaskList) -> Result<()> {
    ensure_parent(path, "save")?;
    let tmp = path.with_extension("txt.tmp");
    fs::write(&tmp, encode(list)).map_err(|e| ZenError::io("save", &tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ZenError::io("save", path, e));
    }
    debug!(path = %path.display(), tasks = list.len(), "tasks saved");
    Ok(())
}

fn ensure_parent(path: &Path, action: &'static str) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| ZenError::io(action, parent, e))
        }
        _ => Ok(()),
    }
}

pub fn encode(list: &TaskList) -> String {
    list.iter().fold(String::new(), |mut out, task| {
        out.push_str(&encode_line(task));
        out.push('\n');
        out
    })
}

pub fn decode(content: &str) -> LoadReport {
    let mut tasks = Vec::new();
    let mut skipped = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(task) => tasks.push(task),
            Err(reason) => skipped.push(SkippedLine {
                line_no: i + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }
    LoadReport {
        list: TaskList::from_tasks(tasks),
        skipped,
    }
}

pub fn encode_line(task: &Task) -> String {
    let status = if task.is_done() { DONE } else { NOT_DONE };
    let mut fields = vec![
        task.task_type().symbol().to_string(),
        status.to_string(),
        task.description().to_string(),
    ];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => fields.push(by.to_string()),
        TaskKind::Event { from, to } => {
            fields.push(from.to_string());
            fields.push(to.to_string());
        }
    }
    fields.join(FIELD_SEPARATOR)
}

pub fn decode_line(line: &str) -> std::result::Result<Task, LineError> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if parts.len() < 3 {
        return Err(LineError::TooFewFields(parts.len()));
    }

    let ty = TaskType::from_symbol(parts[0])
        .ok_or_else(|| LineError::UnknownType(parts[0].to_string()))?;
    let description = parts[2];
    let field = |i: usize, name: &'static str| {
        parts
            .get(i)
            .copied()
            .ok_or(LineError::MissingField(name))
    };

    let mut task = match ty {
        TaskType::Todo => Task::todo(description)?,
        TaskType::Deadline => Task::deadline(description, field(3, "deadline date")?)?,
        TaskType::Event => Task::event(
            description,
            field(3, "event start")?,
            field(4, "event end")?,
        )?,
    };

    // Anything other than "1" reads as not done.
    if parts[1] == DONE {
        task.mark_done();
    }
    Ok(task)
}
