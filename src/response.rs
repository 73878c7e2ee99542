//! Wording for executor results, shared by the console and dialog front ends.

use crate::command::{ListScope, Response};
use crate::error::ZenError;
use crate::persistence::SkippedLine;
use crate::task::Task;

pub const WELCOME: [&str; 2] = ["Hello! I'm Zen", "What can I do for you?"];
pub const LOAD_WARNING: &str =
    "Warning: Could not load tasks from file. Starting with empty task list.";

const ERROR_PREFIX: &str = "NOOOOO!!!";
const TASK_INDENT: &str = "   ";

const HELP: &str = "\
Here are the commands you can use:

bye                              - Exit the application
list                             - Show all tasks
help                             - Show this help message

todo <description>               - Add a todo task
deadline <description> /by <date> - Add a deadline task
event <description> /from <start> /to <end> - Add an event task

mark <number>                    - Mark a task as done
unmark <number>                  - Mark a task as not done
delete <number>                  - Delete a task

find <keyword>                   - Find tasks containing keyword

Examples:
  todo Buy groceries
  deadline Submit report /by 2024-12-25
  event Team meeting /from 2024-12-20 14:00 /to 16:00
  mark 1
  find meeting";

/// The response as display lines, without any front-end decoration.
pub fn lines(response: &Response) -> Vec<String> {
    match response {
        Response::Exit => vec!["Bye. Hope to see you again soon!".into()],
        Response::Help => HELP.lines().map(String::from).collect(),
        Response::Listing { scope, tasks } => listing(*scope, tasks),
        Response::Added { task, total } => vec![
            "Got it. I've added this task:".into(),
            indented(task),
            count(*total),
        ],
        Response::Marked(task) => vec![
            "Nice! I've marked this task as done:".into(),
            indented(task),
        ],
        Response::Unmarked(task) => vec![
            "OK, I've marked this task as not done yet:".into(),
            indented(task),
        ],
        Response::Deleted { task, total } => vec![
            "Noted. I've removed this task:".into(),
            indented(task),
            count(*total),
        ],
    }
}

pub fn render(response: &Response) -> String {
    lines(response).join("\n")
}

pub fn render_error(err: &ZenError) -> String {
    format!("{ERROR_PREFIX} {err}")
}

/// One string for either outcome of [`crate::command::Executor::execute`].
pub fn render_result(result: &Result<Response, ZenError>) -> String {
    match result {
        Ok(response) => render(response),
        Err(err) => render_error(err),
    }
}

pub fn skipped_notice(skipped: &SkippedLine) -> String {
    format!(
        "Warning: Skipping corrupted line {}: {} ({})",
        skipped.line_no, skipped.content, skipped.reason
    )
}

fn listing(scope: ListScope, tasks: &[Task]) -> Vec<String> {
    let (header, empty) = match scope {
        ListScope::All => ("Here are the tasks in your list:", "No tasks in your list yet!"),
        ListScope::Matches => (
            "Here are the matching tasks in your list:",
            "No matching tasks found in your list.",
        ),
    };
    if tasks.is_empty() {
        return vec![empty.into()];
    }
    std::iter::once(header.to_string())
        .chain(
            tasks
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{}.{}", i + 1, t)),
        )
        .collect()
}

fn indented(task: &Task) -> String {
    format!("{TASK_INDENT}{task}")
}

fn count(total: usize) -> String {
    format!("Now you have {total} tasks in the list.")
}
