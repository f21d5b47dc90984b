//! Terminal prompts: yes/no confirmation and hidden token entry

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::infrastructure::traits::Prompter;

/// Question asked before every destructive operation.
pub const CONFIRM_QUESTION: &str = "Are you sure you want to proceed? (y/n): ";

/// True only for a trimmed, case-insensitive `y`.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Print `question` and read one answer line.
///
/// End of input before anything was read is an error, not a "no".
pub fn confirm_with<R, W>(reader: &mut R, writer: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(writer, "{}", question)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while waiting for an answer",
        ));
    }
    Ok(is_affirmative(&line))
}

/// Read one line as a secret; trailing newline stripped.
pub fn read_line_with<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while reading",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Real prompter on stdin/stdout; secrets are read in raw mode.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_hidden() -> io::Result<String> {
        terminal::enable_raw_mode()?;
        let result = Self::collect_keys();
        terminal::disable_raw_mode()?;
        eprintln!();
        result
    }

    fn collect_keys() -> io::Result<String> {
        let mut secret = String::new();
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => return Ok(secret),
                    KeyCode::Backspace => {
                        secret.pop();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                    }
                    KeyCode::Char(c) => secret.push(c),
                    _ => {}
                }
            }
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        confirm_with(&mut stdin.lock(), &mut stdout.lock(), question)
    }

    fn read_secret(&self, prompt: &str) -> io::Result<String> {
        eprint!("{}", prompt);
        io::stderr().flush()?;

        let stdin = io::stdin();
        if stdin.is_terminal() {
            Self::read_hidden()
        } else {
            read_line_with(&mut stdin.lock())
        }
    }
}
