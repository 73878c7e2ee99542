//! Runs classified commands against the task list.
//!
//! Every front end goes through [`Executor::execute`]; it returns a
//! [`Response`] describing what happened and leaves wording to
//! [`crate::response`]. Mutating commands save the whole list before
//! returning. A failed save is reported as an error, but the change stays
//! applied in memory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{classify, parse_index, parse_keyword, parse_todo, split_deadline, split_event};
use super::{Category, Classified};
use crate::error::{FormatError, Result, ZenError};
use crate::persistence;
use crate::response;
use crate::task::Task;
use crate::todolist::TaskList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    Matches,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Exit,
    Help,
    Listing { scope: ListScope, tasks: Vec<Task> },
    Added { task: Task, total: usize },
    Marked(Task),
    Unmarked(Task),
    Deleted { task: Task, total: usize },
}

impl Response {
    pub fn is_exit(&self) -> bool {
        matches!(self, Response::Exit)
    }
}

pub struct Executor {
    list: TaskList,
    data_path: PathBuf,
}

impl Executor {
    pub fn new(list: TaskList, data_path: impl Into<PathBuf>) -> Self {
        Self {
            list,
            data_path: data_path.into(),
        }
    }

    /// Loads `data_path`, falling back to an empty list when it cannot be
    /// read. Returns the notices the user should see about that.
    pub fn open(data_path: impl Into<PathBuf>) -> (Self, Vec<String>) {
        let data_path = data_path.into();
        match persistence::load(&data_path) {
            Ok(report) => {
                let notices = report.skipped.iter().map(response::skipped_notice).collect();
                (Self::new(report.list, data_path), notices)
            }
            Err(err) => {
                warn!(error = %err, "starting with an empty task list");
                (
                    Self::new(TaskList::default(), data_path),
                    vec![response::LOAD_WARNING.to_string()],
                )
            }
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn execute(&mut self, raw: &str) -> Result<Response> {
        let Classified {
            category,
            remainder,
        } = classify(raw);
        debug!(?category, "executing command");

        match category {
            Category::Bye => Ok(Response::Exit),
            Category::Help => Ok(Response::Help),
            Category::List => Ok(Response::Listing {
                scope: ListScope::All,
                tasks: self.list.to_vec(),
            }),
            Category::Find => Ok(Response::Listing {
                scope: ListScope::Matches,
                tasks: self.list.find_containing(parse_keyword(remainder)),
            }),

            Category::Mark => {
                let task = self.list.mark(index(remainder)?)?.clone();
                self.persist()?;
                Ok(Response::Marked(task))
            }
            Category::Unmark => {
                let task = self.list.unmark(index(remainder)?)?.clone();
                self.persist()?;
                Ok(Response::Unmarked(task))
            }
            Category::Delete => {
                let task = self.list.delete(index(remainder)?)?;
                self.persist()?;
                Ok(Response::Deleted {
                    task,
                    total: self.list.len(),
                })
            }

            Category::Todo => self.add(Task::todo(parse_todo(remainder))?),
            Category::Deadline => {
                let (description, by) =
                    split_deadline(remainder).ok_or(FormatError::DeadlineUsage)?;
                self.add(Task::deadline(description, by)?)
            }
            Category::Event => {
                let (description, from, to) =
                    split_event(remainder).ok_or(FormatError::EventUsage)?;
                self.add(Task::event(description, from, to)?)
            }

            Category::TodoEmpty => Err(FormatError::MissingTodoDescription.into()),
            Category::DeadlineEmpty => Err(FormatError::DeadlineUsage.into()),
            Category::EventEmpty => Err(FormatError::EventUsage.into()),
            Category::FindEmpty => Err(FormatError::MissingKeyword.into()),
            Category::Empty => Err(ZenError::EmptyCommand),
            Category::Unknown => Err(ZenError::UnknownCommand),
        }
    }

    fn add(&mut self, task: Task) -> Result<Response> {
        let task = self.list.add(task).clone();
        self.persist()?;
        Ok(Response::Added {
            task,
            total: self.list.len(),
        })
    }

    fn persist(&self) -> Result<()> {
        persistence::save(&self.data_path, &self.list)
    }
}

fn index(remainder: &str) -> Result<usize> {
    parse_index(remainder).ok_or_else(|| FormatError::InvalidIndex.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn executor(dir: &TempDir) -> Executor {
        Executor::new(TaskList::default(), dir.path().join("zen.txt"))
    }

    #[test]
    fn add_commands_append_and_persist() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);

        let r = ex.execute("todo read book").unwrap();
        assert!(matches!(r, Response::Added { total: 1, .. }));

        let r = ex.execute("deadline return book /by 2019-06-06").unwrap();
        match r {
            Response::Added { task, total } => {
                assert_eq!(total, 2);
                assert_eq!(task.to_string(), "[D][ ] return book (by: Jun 6 2019)");
            }
            other => panic!("unexpected response: {other:?}"),
        }

        ex.execute("event meeting /from Mon 2pm /to 4pm").unwrap();
        assert_eq!(ex.list().len(), 3);

        let saved = std::fs::read_to_string(ex.data_path()).unwrap();
        assert_eq!(saved.lines().count(), 3);
    }

    #[test]
    fn mark_is_idempotent_and_persisted() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);
        ex.execute("todo read book").unwrap();

        for _ in 0..2 {
            match ex.execute("mark 1").unwrap() {
                Response::Marked(task) => assert!(task.is_done()),
                other => panic!("unexpected response: {other:?}"),
            }
        }
        assert_eq!(ex.list().len(), 1);
        let saved = std::fs::read_to_string(ex.data_path()).unwrap();
        assert_eq!(saved, "T | 1 | read book\n");

        ex.execute("unmark 1").unwrap();
        assert!(!ex.list().get(0).unwrap().is_done());
    }

    #[test]
    fn delete_returns_removed_task() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);
        ex.execute("todo a").unwrap();
        ex.execute("todo b").unwrap();

        match ex.execute("delete 2").unwrap() {
            Response::Deleted { task, total } => {
                assert_eq!(task.description(), "b");
                assert_eq!(total, 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn bounds_and_format_errors_are_distinct() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);
        ex.execute("todo a").unwrap();

        assert!(matches!(
            ex.execute("delete 0"),
            Err(ZenError::Format(FormatError::InvalidIndex))
        ));
        assert!(matches!(
            ex.execute("delete 2"),
            Err(ZenError::OutOfRange { index: 1, size: 1 })
        ));
        assert!(matches!(
            ex.execute("mark x"),
            Err(ZenError::Format(FormatError::InvalidIndex))
        ));
        assert_eq!(ex.list().len(), 1);
    }

    #[test]
    fn usage_errors_do_not_mutate() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);

        for (input, expected) in [
            ("todo", FormatError::MissingTodoDescription),
            ("deadline", FormatError::DeadlineUsage),
            ("deadline buy milk", FormatError::DeadlineUsage),
            ("deadline buy milk /by", FormatError::DeadlineUsage),
            ("event", FormatError::EventUsage),
            ("event party /from 7pm", FormatError::EventUsage),
            ("find", FormatError::MissingKeyword),
        ] {
            match ex.execute(input) {
                Err(ZenError::Format(err)) => assert_eq!(err, expected, "{input}"),
                other => panic!("{input}: unexpected {other:?}"),
            }
        }
        assert!(ex.list().is_empty());
        assert!(!ex.data_path().exists());
    }

    #[test]
    fn validation_errors_surface() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);
        assert!(matches!(
            ex.execute("event x /from /to y"),
            Err(ZenError::Validation(_))
        ));
        assert!(ex.list().is_empty());
    }

    #[test]
    fn generic_errors() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);
        assert!(matches!(ex.execute("   "), Err(ZenError::EmptyCommand)));
        assert!(matches!(ex.execute("dance"), Err(ZenError::UnknownCommand)));
    }

    #[test]
    fn find_and_list_do_not_persist() {
        let dir = TempDir::new().unwrap();
        let mut ex = executor(&dir);
        match ex.execute("find book").unwrap() {
            Response::Listing { scope, tasks } => {
                assert_eq!(scope, ListScope::Matches);
                assert!(tasks.is_empty());
            }
            other => panic!("unexpected response: {other:?}"),
        }
        assert!(matches!(
            ex.execute("list").unwrap(),
            Response::Listing { scope: ListScope::All, .. }
        ));
        assert!(!ex.data_path().exists());
        assert!(ex.execute("bye").unwrap().is_exit());
    }

    #[test]
    fn open_reports_skipped_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zen.txt");
        std::fs::write(&path, "T | 0 | fine\nT | 0\n").unwrap();

        let (ex, notices) = Executor::open(&path);
        assert_eq!(ex.list().len(), 1);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("T | 0"));
    }

    #[test]
    fn open_falls_back_to_empty_on_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zen.txt");
        std::fs::write(&path, b"\xff\xfe\x00").unwrap();

        let (ex, notices) = Executor::open(&path);
        assert!(ex.list().is_empty());
        assert_eq!(notices, vec![response::LOAD_WARNING.to_string()]);
    }

    #[test]
    fn failed_save_keeps_the_change() {
        let dir = TempDir::new().unwrap();
        // A directory where the data file should be makes the rename fail.
        let path = dir.path().join("zen.txt");
        std::fs::create_dir_all(path.join("occupied")).unwrap();
        let mut ex = Executor::new(TaskList::default(), &path);

        let err = ex.execute("todo read book").unwrap_err();
        assert!(matches!(err, ZenError::Io { .. }));
        assert!(!err.is_user_error());
        assert_eq!(ex.list().len(), 1);
    }
}
