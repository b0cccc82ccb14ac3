//! # Terminal Input
//!
//! Prompting and parsing of raw console text.
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompt "Enter product id: "                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read one line ── end of input? ──► InputError::Closed (menu exits)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse ── not a number? ──► InputError::NotANumber (menu prints it)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  primitive value handed to warehouse-core                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Business rules (positive id, rating range, ...) are NOT checked here. That
//! is the store's job.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;
use warehouse_core::Category;

/// Date format accepted at the prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a prompt did not produce a value.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream reached its end.
    #[error("input closed")]
    Closed,

    #[error("Invalid input, please enter a whole number.")]
    NotANumber(String),

    #[error("Invalid date format, please use YYYY-MM-DD.")]
    BadDate(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Line-oriented reader/writer pair used by the session.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes one full line.
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `label` (no newline) and reads the answer without its line ending.
    pub fn prompt(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompts for a number of any parseable type.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, InputError> {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse()
            .map_err(|_| InputError::NotANumber(raw))
    }

    /// Prompts for a `YYYY-MM-DD` date.
    pub fn prompt_date(&mut self, label: &str) -> Result<NaiveDate, InputError> {
        let raw = self.prompt(label)?;
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| InputError::BadDate(raw))
    }

    /// Prompts a yes/no question. Only `yes` / `y` (any case) count as yes.
    pub fn prompt_yes(&mut self, question: &str) -> Result<bool, InputError> {
        let answer = self.prompt(&format!("{question} (yes/no): "))?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y"))
    }

    /// Shows the numbered category menu and maps the choice.
    ///
    /// Returns `Ok(None)` for a number outside 1-5.
    pub fn prompt_category(&mut self, heading: &str) -> Result<Option<Category>, InputError> {
        let options: Vec<String> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}", i + 1, c))
            .collect();
        self.say(format!("{heading}: {}", options.join(", ")))?;

        let choice: i64 = self.prompt_number("> ")?;
        Ok(Category::from_choice(choice))
    }

    /// Gives back the writer (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(script: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut term = terminal("Carrot\r\nBeet\n");
        assert_eq!(term.prompt("Name: ").unwrap(), "Carrot");
        assert_eq!(term.prompt("Name: ").unwrap(), "Beet");
        assert!(matches!(term.prompt("Name: "), Err(InputError::Closed)));

        let printed = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(printed, "Name: Name: Name: ");
    }

    #[test]
    fn test_prompt_number() {
        let mut term = terminal(" 42 \nabc\n");
        assert_eq!(term.prompt_number::<i64>("Id: ").unwrap(), 42);

        let err = term.prompt_number::<i64>("Id: ").unwrap_err();
        assert!(matches!(err, InputError::NotANumber(ref raw) if raw == "abc"));
        assert_eq!(err.to_string(), "Invalid input, please enter a whole number.");
    }

    #[test]
    fn test_prompt_date() {
        let mut term = terminal("2024-03-15\n15/03/2024\n");
        assert_eq!(
            term.prompt_date("Date: ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(matches!(term.prompt_date("Date: "), Err(InputError::BadDate(_))));
    }

    #[test]
    fn test_prompt_yes() {
        let mut term = terminal("YES\ny\nno\n\n");
        assert!(term.prompt_yes("Change name?").unwrap());
        assert!(term.prompt_yes("Change name?").unwrap());
        assert!(!term.prompt_yes("Change name?").unwrap());
        assert!(!term.prompt_yes("Change name?").unwrap());
    }

    #[test]
    fn test_prompt_category() {
        let mut term = terminal("4\n9\n");
        assert_eq!(term.prompt_category("Category").unwrap(), Some(Category::Fish));
        assert_eq!(term.prompt_category("Category").unwrap(), None);

        let printed = String::from_utf8(term.into_output()).unwrap();
        assert!(printed.contains("Category: 1. FRUIT, 2. VEGETABLE, 3. MEAT, 4. FISH, 5. DAIRY"));
    }
}
