//! Line-by-line console session.
//!
//! Input and output are passed in, so the loop runs the same against stdin
//! or an in-memory buffer.

use std::io::{self, BufRead, Write};

use crate::command::Executor;
use crate::response;

const SEPARATOR: &str = "____________________________________________________________";

/// Reads commands until `bye` or end of input.
pub fn run<R: BufRead, W: Write>(
    executor: &mut Executor,
    notices: &[String],
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for notice in notices {
        writeln!(out, " {notice}")?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for line in response::WELCOME {
        writeln!(out, " {line}")?;
    }
    writeln!(out, "{SEPARATOR}")?;

    for line in input.lines() {
        let line = line?;
        let result = executor.execute(&line);

        writeln!(out, "{SEPARATOR}")?;
        for text in response::render_result(&result).lines() {
            writeln!(out, " {text}")?;
        }
        writeln!(out, "{SEPARATOR}")?;
        out.flush()?;

        if matches!(result, Ok(ref r) if r.is_exit()) {
            break;
        }
    }
    Ok(())
}
