pub mod ui;
pub mod input;

use crate::command::Executor;
use crate::response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker { User, Zen }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: Speaker,
    pub text: String,
    pub is_error: bool,
}

/// Central TUI state: a dialog between the user and Zen.
pub struct App {
    pub executor: Executor,
    pub transcript: Vec<Message>,
    pub draft: String,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(executor: Executor, notices: Vec<String>) -> Self {
        let mut app = Self {
            executor,
            transcript: Vec::new(),
            draft: String::new(),
            scroll: 0,
            should_quit: false,
        };
        for notice in notices {
            app.push(Speaker::Zen, notice, true);
        }
        app.welcome();
        app
    }

    /// Sends the draft as one command and records both sides of the exchange.
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.draft);
        let input = input.trim().to_string();
        let result = self.executor.execute(&input);

        self.push(Speaker::User, input, false);
        self.push(Speaker::Zen, response::render_result(&result), result.is_err());
        self.scroll = 0;

        if matches!(result, Ok(ref r) if r.is_exit()) {
            self.should_quit = true;
        }
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
        self.scroll = 0;
        self.welcome();
    }

    pub fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by);
    }
    pub fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn welcome(&mut self) {
        self.push(Speaker::Zen, response::WELCOME.join("\n"), false);
    }

    fn push(&mut self, from: Speaker, text: String, is_error: bool) {
        self.transcript.push(Message { from, text, is_error });
    }
}
