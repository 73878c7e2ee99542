use std::{
    io,
    path::Path,
};

use clap::Parser;

use anyhow::{Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use zen::{
    app::{input::handle_event, ui::draw, App},
    command::Executor,
    console,
    logging::{self, LogTarget},
    response, Cli, Cmd,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_path = cli.data_file;

    match cli.cmd {
        Some(Cmd::Tui) => {
            logging::init(LogTarget::File(&data_path.with_file_name("zen.log")));
            launch_tui(&data_path)?;
        }
        Some(Cmd::Run { command }) => {
            logging::init(LogTarget::Stderr);
            let (mut executor, notices) = Executor::open(&data_path);
            for notice in notices {
                eprintln!("{notice}");
            }
            let result = executor.execute(&command.join(" "));
            let text = response::render_result(&result);
            match result {
                Ok(_) => println!("{text}"),
                Err(err) if err.is_user_error() => println!("{text}"),
                Err(err) => return Err(err).context("command ran but the task file was not updated"),
            }
        }
        Some(Cmd::Export) => {
            logging::init(LogTarget::Stderr);
            let (executor, notices) = Executor::open(&data_path);
            for notice in notices {
                eprintln!("{notice}");
            }
            let json = serde_json::to_string_pretty(executor.list())?;
            println!("{json}");
        }
        Some(Cmd::Console) | None => {
            logging::init(LogTarget::Stderr);
            let (mut executor, notices) = Executor::open(&data_path);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            console::run(&mut executor, &notices, stdin.lock(), &mut stdout)
                .context("console session failed")?;
        }
    }

    Ok(())
}

fn launch_tui(path: &Path) -> Result<()> {
    // Load persisted state
    let (executor, notices) = Executor::open(path);
    let mut app = App::new(executor, notices);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure proper teardown even on panic
    let _guard = TerminalGuard;

    // Main loop; every command saves as it runs, so nothing is flushed on exit.
    loop {
        terminal.draw(|f| draw(f, &app))?;

        let ev = event::read()?;
        if !handle_event(&mut app, ev) {
            if app.should_quit {
                // Leave the farewell on screen briefly
                terminal.draw(|f| draw(f, &app))?;
                std::thread::sleep(std::time::Duration::from_millis(800));
            }
            break;
        }
    }

    Ok(())
}

/// Restores the terminal on drop (even if we return early)
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Try best-effort cleanup; ignore errors at shutdown
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
