use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Source of interactive answers. The resolver and the orchestrator take this
/// as an explicit dependency so prompt-driven flows can be scripted in tests.
pub trait Prompter {
    /// Ask one question and return the trimmed answer line.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Prompts on the controlling terminal.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        print!("{} {} > ", "?".cyan().bold(), question);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
