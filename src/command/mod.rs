//! Command classification.
//!
//! [`classify`] maps one raw input line to a [`Category`] and the text after
//! the command word. The helpers below pull typed parameters out of that
//! remainder once the category is known. Everything here is pure.

pub mod executor;

pub use executor::{Executor, ListScope, Response};

const DEADLINE_SEPARATOR: &str = " /by ";
const EVENT_FROM_SEPARATOR: &str = " /from ";
const EVENT_TO_SEPARATOR: &str = " /to ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Empty,
    Bye,
    List,
    Help,
    Mark,
    Unmark,
    Delete,
    Todo,
    TodoEmpty,
    Deadline,
    DeadlineEmpty,
    Event,
    EventEmpty,
    Find,
    FindEmpty,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub category: Category,
    /// Text after the command prefix; empty for bare keywords.
    pub remainder: &'a str,
}

const BARE: [(&str, Category); 7] = [
    ("bye", Category::Bye),
    ("list", Category::List),
    ("help", Category::Help),
    ("todo", Category::TodoEmpty),
    ("deadline", Category::DeadlineEmpty),
    ("event", Category::EventEmpty),
    ("find", Category::FindEmpty),
];

const PREFIXED: [(&str, Category); 7] = [
    ("mark ", Category::Mark),
    ("unmark ", Category::Unmark),
    ("delete ", Category::Delete),
    ("todo ", Category::Todo),
    ("deadline ", Category::Deadline),
    ("event ", Category::Event),
    ("find ", Category::Find),
];

/// Case-sensitive; first match wins.
pub fn classify(raw: &str) -> Classified<'_> {
    let input = raw.trim();
    if input.is_empty() {
        return Classified {
            category: Category::Empty,
            remainder: "",
        };
    }

    if let Some((_, category)) = BARE.iter().find(|(word, _)| *word == input) {
        return Classified {
            category: *category,
            remainder: "",
        };
    }

    for (prefix, category) in PREFIXED {
        if let Some(remainder) = input.strip_prefix(prefix) {
            return Classified {
                category,
                remainder,
            };
        }
    }

    Classified {
        category: Category::Unknown,
        remainder: input,
    }
}

/// 1-based task number to 0-based index. `None` when not a positive integer.
pub fn parse_index(remainder: &str) -> Option<usize> {
    let n: i64 = remainder.trim().parse().ok()?;
    usize::try_from(n.checked_sub(1)?).ok()
}

pub fn parse_todo(remainder: &str) -> &str {
    remainder.trim()
}

/// `<description> /by <date>` to `(description, date)`.
pub fn split_deadline(remainder: &str) -> Option<(&str, &str)> {
    let rest = remainder.trim();
    let at = rest.find(DEADLINE_SEPARATOR)?;
    let by = rest[at + DEADLINE_SEPARATOR.len()..].trim();
    if by.is_empty() {
        return None;
    }
    Some((rest[..at].trim(), by))
}

/// `<description> /from <start> /to <end>` to `(description, start, end)`.
///
/// The start text is empty when the two markers overlap (`x /from /to y`);
/// task construction rejects that.
pub fn split_event(remainder: &str) -> Option<(&str, &str, &str)> {
    let rest = remainder.trim();
    let from_at = rest.find(EVENT_FROM_SEPARATOR)?;
    let to_at = rest.find(EVENT_TO_SEPARATOR)?;
    if from_at >= to_at {
        return None;
    }
    let end = rest[to_at + EVENT_TO_SEPARATOR.len()..].trim();
    if end.is_empty() {
        return None;
    }
    let start = rest
        .get(from_at + EVENT_FROM_SEPARATOR.len()..to_at)
        .unwrap_or("")
        .trim();
    Some((rest[..from_at].trim(), start, end))
}

pub fn parse_keyword(remainder: &str) -> &str {
    remainder.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(raw: &str) -> Category {
        classify(raw).category
    }

    #[test]
    fn bare_keywords() {
        assert_eq!(category("bye"), Category::Bye);
        assert_eq!(category("  list  "), Category::List);
        assert_eq!(category("help"), Category::Help);
        assert_eq!(category("todo"), Category::TodoEmpty);
        assert_eq!(category("deadline   "), Category::DeadlineEmpty);
        assert_eq!(category("event"), Category::EventEmpty);
        assert_eq!(category("find"), Category::FindEmpty);
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!(category(""), Category::Empty);
        assert_eq!(category(" \t "), Category::Empty);
        assert_eq!(category("invalid"), Category::Unknown);
        assert_eq!(category("LIST"), Category::Unknown);
        assert_eq!(category("help me"), Category::Unknown);
        assert_eq!(category("mark"), Category::Unknown);
        assert_eq!(category("todoread"), Category::Unknown);
    }

    #[test]
    fn prefixed_commands_keep_remainder() {
        let c = classify("todo read book");
        assert_eq!(c.category, Category::Todo);
        assert_eq!(c.remainder, "read book");

        let c = classify("mark 1");
        assert_eq!(c.category, Category::Mark);
        assert_eq!(c.remainder, "1");

        assert_eq!(category("unmark 2"), Category::Unmark);
        assert_eq!(category("delete 3"), Category::Delete);
        assert_eq!(category("deadline x /by y"), Category::Deadline);
        assert_eq!(category("event x /from a /to b"), Category::Event);
        assert_eq!(category("find book"), Category::Find);
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index("1"), Some(0));
        assert_eq!(parse_index(" 5 "), Some(4));
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("0"), None);
        assert_eq!(parse_index("-3"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
        assert_eq!(parse_index("-9223372036854775808"), None);
    }

    #[test]
    fn deadline_split() {
        assert_eq!(
            split_deadline("return book /by 2019-06-06"),
            Some(("return book", "2019-06-06"))
        );
        assert_eq!(split_deadline("buy milk"), None);
        assert_eq!(split_deadline("buy milk /by"), None);
        assert_eq!(split_deadline("buy milk /by   "), None);
        assert_eq!(split_deadline("buy milk/by sunday"), None);
    }

    #[test]
    fn event_split() {
        assert_eq!(
            split_event("meeting /from Mon 2pm /to 4pm"),
            Some(("meeting", "Mon 2pm", "4pm"))
        );
        assert_eq!(split_event("meeting /from Mon 2pm"), None);
        assert_eq!(split_event("meeting /to 4pm"), None);
        assert_eq!(split_event("meeting /to 4pm /from Mon"), None);
        assert_eq!(split_event("meeting /from Mon /to"), None);
        assert_eq!(split_event("x /from /to y"), Some(("x", "", "y")));
    }

    #[test]
    fn keyword_is_trimmed() {
        assert_eq!(parse_keyword("  book "), "book");
        assert_eq!(parse_todo(" read book "), "read book");
    }
}
