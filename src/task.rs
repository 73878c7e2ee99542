use std::fmt;

use serde::Serialize;

use crate::date::DateValue;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Done,
}

/// Variant tag, used for the display symbol and the storage type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
}

impl TaskType {
    pub fn symbol(self) -> &'static str {
        match self {
            TaskType::Todo => "T",
            TaskType::Deadline => "D",
            TaskType::Event => "E",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "T" => Some(TaskType::Todo),
            "D" => Some(TaskType::Deadline),
            "E" => Some(TaskType::Event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline { by: DateValue },
    Event { from: DateValue, to: DateValue },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Task {
    description: String,
    status: Status,
    #[serde(flatten)]
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: &str) -> Result<Self, ValidationError> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, by: &str) -> Result<Self, ValidationError> {
        let description = checked_description(description)?;
        let by = DateValue::parse(by, "deadline")?;
        Ok(Self::build(description, TaskKind::Deadline { by }))
    }

    /// `from` is not required to come before `to`.
    pub fn event(description: &str, from: &str, to: &str) -> Result<Self, ValidationError> {
        let description = checked_description(description)?;
        let from = DateValue::parse(from, "event start")?;
        let to = DateValue::parse(to, "event end")?;
        Ok(Self::build(description, TaskKind::Event { from, to }))
    }

    fn new(description: &str, kind: TaskKind) -> Result<Self, ValidationError> {
        Ok(Self::build(checked_description(description)?, kind))
    }

    fn build(description: String, kind: TaskKind) -> Self {
        Self {
            description,
            status: Status::Pending,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::Todo => TaskType::Todo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
        }
    }

    pub fn mark_done(&mut self) {
        self.status = Status::Done;
    }

    pub fn mark_pending(&mut self) {
        self.status = Status::Pending;
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    fn status_icon(&self) -> &'static str {
        if self.is_done() {
            "X"
        } else {
            " "
        }
    }
}

fn checked_description(description: &str) -> Result<String, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(description.to_string())
}

/// `[T][X] read book`, `[D][ ] return book (by: Jun 6 2019)`, ...
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.task_type().symbol(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {by})"),
            TaskKind::Event { from, to } => write!(f, " (from: {from} to: {to})"),
        }
    }
}
