//! Line-oriented questions on the terminal.

use console::Term;

use crate::error::{CliError, Result};

/// Something that can show lines and ask questions.
///
/// The wizard talks to the user only through this trait.
pub trait Prompter {
    fn show(&mut self, line: &str) -> Result<()>;

    /// Ask a question and return the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompts on stderr and reads answers from the terminal.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    /// Fails when nobody is attached to the terminal.
    pub fn new() -> Result<Self> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(CliError::InvalidArgument(
                "interactive wizard needs a terminal; use --answers".to_string(),
            ));
        }
        Ok(Self { term })
    }
}

impl Prompter for TermPrompter {
    fn show(&mut self, line: &str) -> Result<()> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.term.write_str(question)?;
        Ok(self.term.read_line()?.trim().to_string())
    }
}
