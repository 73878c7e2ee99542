use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZenError>;

/// A task (or one of its dates) failed construction-time checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The description of a task cannot be empty.")]
    EmptyDescription,

    #[error("The {field} date cannot be empty.")]
    EmptyDate { field: &'static str },
}

/// A recognised command whose arguments are missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("The description of a todo cannot be empty.")]
    MissingTodoDescription,

    #[error("Please use the format: deadline <description> /by <date>")]
    DeadlineUsage,

    #[error("Please use the format: event <description> /from <start> /to <end>")]
    EventUsage,

    #[error("Please provide a keyword to search for.")]
    MissingKeyword,

    #[error("Please provide a valid task number!")]
    InvalidIndex,
}

#[derive(Debug, Error)]
pub enum ZenError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// `index` is 0-based; the message shows it the way the user typed it.
    #[error("Task {} is out of range! You have {size} tasks in the list.", .index + 1)]
    OutOfRange { index: usize, size: usize },

    #[error("Failed to {action} tasks at {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I'm sorry, but I don't know what that means :-(")]
    UnknownCommand,

    #[error("Please enter a command.")]
    EmptyCommand,
}

impl ZenError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for problems with what the user typed, as opposed to storage failures.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
